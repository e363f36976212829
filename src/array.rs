//! Array access, insert, and delete primitives.
//!
//! The target position is always deterministic: the middle of the array.
//! Insertion uses one more than the current maximum as the new value.

use crate::step::Step;

pub(crate) fn access(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![Step::array(&[], "Array is empty, nothing to access", -1)];
    }
    let index = numbers.len() / 2;
    vec![
        Step::array(numbers, format!("Accessing element at index {index}"), 0),
        Step::array(numbers, format!("Array[{index}] = {}", numbers[index]), 3)
            .highlighting(vec![index]),
    ]
}

pub(crate) fn insert(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let new_element = array.iter().max().map_or(1, |m| m.saturating_add(1));
    let insert_pos = array.len() / 2;
    let mut steps = vec![Step::array(
        &array,
        format!("Inserting {new_element} at position {insert_pos}"),
        0,
    )];
    for i in (insert_pos + 1..=array.len()).rev() {
        steps.push(
            Step::array(
                &array,
                format!("Shifting element from position {} to {i}", i - 1),
                1,
            )
            .highlighting(vec![i - 1, i]),
        );
    }
    array.insert(insert_pos, new_element);
    steps.push(
        Step::array(
            &array,
            format!("Inserted {new_element} at position {insert_pos}"),
            2,
        )
        .highlighting(vec![insert_pos]),
    );
    steps
}

pub(crate) fn delete(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![Step::array(&[], "Array is empty, nothing to delete", -1)];
    }
    let mut array = numbers.to_vec();
    let delete_pos = array.len() / 2;
    let deleted = array[delete_pos];
    let mut steps = vec![
        Step::array(
            &array,
            format!("Deleting element {deleted} from position {delete_pos}"),
            0,
        )
        .highlighting(vec![delete_pos]),
    ];
    array.remove(delete_pos);
    steps.push(Step::array(&array, "Shifted remaining elements left", 2));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Payload;

    fn array_of(step: &Step) -> &[i64] {
        match &step.payload {
            Payload::Array(a) => a,
            other => panic!("expected array payload, got {other:?}"),
        }
    }

    #[test]
    fn access_reads_the_middle_element() {
        let steps = access(&[10, 20, 30, 40, 50]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].explanation, "Array[2] = 30");
        assert_eq!(steps[1].highlighting, Some(vec![2]));
    }

    #[test]
    fn insert_shifts_then_places_max_plus_one() {
        let steps = insert(&[4, 9, 6]);
        // shifts announced from the back: 2→3, then 1→2
        assert_eq!(steps[1].explanation, "Shifting element from position 2 to 3");
        assert_eq!(steps[2].explanation, "Shifting element from position 1 to 2");
        let last = steps.last().expect("non-empty");
        assert_eq!(last.explanation, "Inserted 10 at position 1");
        assert_eq!(array_of(last), &[4, 10, 9, 6]);
    }

    #[test]
    fn insert_into_empty_array_starts_from_one() {
        let steps = insert(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(array_of(steps.last().expect("non-empty")), &[1]);
    }

    #[test]
    fn insert_saturates_at_the_maximum_value() {
        let steps = insert(&[i64::MAX]);
        let last = steps.last().expect("non-empty");
        assert_eq!(array_of(last), &[i64::MAX, i64::MAX]);
    }

    #[test]
    fn delete_removes_the_middle_element() {
        let steps = delete(&[1, 2, 3]);
        assert_eq!(steps[0].explanation, "Deleting element 2 from position 1");
        assert_eq!(array_of(&steps[1]), &[1, 3]);
    }

    #[test]
    fn delete_on_empty_array_is_a_single_step() {
        let steps = delete(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].explanation, "Array is empty, nothing to delete");
    }
}
