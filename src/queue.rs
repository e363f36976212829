//! Queue enqueue and dequeue simulations.
//!
//! The last input element is the value to enqueue; the initial queue is
//! capped at three elements. Dequeue removes from the front of the whole
//! input.

use crate::step::Step;

pub(crate) fn enqueue(numbers: &[i64]) -> Vec<Step> {
    let mut queue: Vec<i64> = numbers.iter().copied().take(3).collect();
    let new_element = numbers.last().copied().unwrap_or(99);
    let mut steps = vec![
        Step::queue(&queue, format!("Enqueuing {new_element} to queue"), 0).operation("enqueue"),
    ];
    queue.push(new_element);
    steps.push(
        Step::queue(&queue, format!("{new_element} added to rear of queue"), 3)
            .highlighting(vec![queue.len() - 1])
            .operation("enqueue"),
    );
    steps
}

pub(crate) fn dequeue(numbers: &[i64]) -> Vec<Step> {
    let mut queue = numbers.to_vec();
    let Some(&front) = queue.first() else {
        return vec![Step::queue(&[], "Queue is empty, cannot dequeue", 1).operation("dequeue")];
    };
    let mut steps = vec![
        Step::queue(&queue, format!("Dequeuing {front} from front"), 0)
            .highlighting(vec![0])
            .operation("dequeue"),
    ];
    queue.remove(0);
    steps.push(Step::queue(&queue, format!("Removed {front} from queue"), 4).operation("dequeue"));
    steps
}
