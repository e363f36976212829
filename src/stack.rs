//! Stack push, pop, and peek simulations.
//!
//! The last input element is the value to push; the initial stack is capped
//! at three elements. Pop and peek operate on the whole input as the stack,
//! top at the end.

use crate::step::Step;

pub(crate) fn push(numbers: &[i64]) -> Vec<Step> {
    let mut stack: Vec<i64> = numbers.iter().copied().take(3).collect();
    let new_element = numbers.last().copied().unwrap_or(99);
    let mut steps = vec![
        Step::stack(&stack, format!("Pushing {new_element} onto stack"), 0).operation("push"),
    ];
    stack.push(new_element);
    steps.push(
        Step::stack(&stack, format!("{new_element} pushed to top of stack"), 3)
            .highlighting(vec![stack.len() - 1])
            .operation("push"),
    );
    steps
}

pub(crate) fn pop(numbers: &[i64]) -> Vec<Step> {
    let mut stack = numbers.to_vec();
    let Some(&top) = stack.last() else {
        return vec![Step::stack(&[], "Stack is empty, cannot pop", 1).operation("pop")];
    };
    let mut steps = vec![
        Step::stack(&stack, format!("Popping {top} from stack"), 0)
            .highlighting(vec![stack.len() - 1])
            .operation("pop"),
    ];
    stack.pop();
    steps.push(Step::stack(&stack, format!("Popped {top} from stack"), 4).operation("pop"));
    steps
}

pub(crate) fn peek(numbers: &[i64]) -> Vec<Step> {
    let Some(&top) = numbers.last() else {
        return vec![Step::stack(&[], "Stack is empty", 1).operation("peek")];
    };
    vec![
        Step::stack(numbers, format!("Top element is {top}"), 2)
            .highlighting(vec![numbers.len() - 1])
            .operation("peek"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Payload;

    fn stack_of(step: &Step) -> &[i64] {
        match &step.payload {
            Payload::Stack(s) => s,
            other => panic!("expected stack payload, got {other:?}"),
        }
    }

    #[test]
    fn push_caps_initial_stack_and_appends_last_value() {
        let steps = push(&[1, 2, 3, 4, 7]);
        assert_eq!(stack_of(&steps[0]), &[1, 2, 3]);
        assert_eq!(stack_of(&steps[1]), &[1, 2, 3, 7]);
        assert_eq!(steps[1].highlighting, Some(vec![3]));
        assert_eq!(steps[1].operation, Some("push"));
    }

    #[test]
    fn push_on_empty_input_defaults_to_99() {
        let steps = push(&[]);
        assert_eq!(steps[0].explanation, "Pushing 99 onto stack");
        assert_eq!(stack_of(&steps[1]), &[99]);
    }

    #[test]
    fn pushing_zero_keeps_zero() {
        let steps = push(&[0]);
        assert_eq!(stack_of(&steps[1]), &[0, 0]);
    }

    #[test]
    fn pop_removes_the_top() {
        let steps = pop(&[5, 8]);
        assert_eq!(steps[0].explanation, "Popping 8 from stack");
        assert_eq!(steps[0].highlighting, Some(vec![1]));
        assert_eq!(stack_of(&steps[1]), &[5]);
    }

    #[test]
    fn pop_on_empty_stack_is_a_single_step() {
        let steps = pop(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].explanation, "Stack is empty, cannot pop");
        assert_eq!(steps[0].pseudo_code_line, 1);
        assert_eq!(stack_of(&steps[0]), &[] as &[i64]);
    }

    #[test]
    fn peek_is_a_single_highlighted_step() {
        let steps = peek(&[5, 8]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].explanation, "Top element is 8");
        assert_eq!(steps[0].highlighting, Some(vec![1]));
    }
}
