//! Singly linked list simulations.
//!
//! Lists are rendered as ordered cells with explicit next indices. Inserts
//! take the last input element as the new value (capping the initial list at
//! four cells); delete targets the middle cell by value; search scans for the
//! last element.

use crate::step::{ListNode, Step};

fn nodes(values: &[i64]) -> Vec<ListNode> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| ListNode {
            value,
            next: (i + 1 < values.len()).then_some(i + 1),
        })
        .collect()
}

pub(crate) fn insert_head(numbers: &[i64]) -> Vec<Step> {
    let mut list: Vec<i64> = numbers.iter().copied().take(4).collect();
    let new_element = numbers.last().copied().unwrap_or(99);
    let mut steps = vec![
        Step::list(nodes(&list), format!("Inserting {new_element} at head"), 0)
            .operation("insert-head"),
    ];
    list.insert(0, new_element);
    steps.push(
        Step::list(nodes(&list), format!("{new_element} is now the head"), 3)
            .highlighting(vec![0])
            .operation("insert-head"),
    );
    steps
}

pub(crate) fn insert_tail(numbers: &[i64]) -> Vec<Step> {
    let mut list: Vec<i64> = numbers.iter().copied().take(4).collect();
    let new_element = numbers.last().copied().unwrap_or(99);
    let mut steps = vec![
        Step::list(nodes(&list), format!("Inserting {new_element} at tail"), 0)
            .operation("insert-tail"),
    ];
    list.push(new_element);
    steps.push(
        Step::list(nodes(&list), format!("{new_element} added at tail"), 6)
            .highlighting(vec![list.len() - 1])
            .operation("insert-tail"),
    );
    steps
}

pub(crate) fn delete(numbers: &[i64]) -> Vec<Step> {
    let mut list = numbers.to_vec();
    if list.is_empty() {
        return vec![
            Step::list(Vec::new(), "List is empty, nothing to delete", -1).operation("delete"),
        ];
    }
    let target = list[list.len() / 2];
    let mut steps = vec![
        Step::list(nodes(&list), format!("Deleting node with value {target}"), 0)
            .operation("delete"),
    ];
    // first occurrence wins when the middle value is duplicated
    if let Some(pos) = list.iter().position(|&v| v == target) {
        list.remove(pos);
    }
    steps.push(
        Step::list(nodes(&list), format!("Node with value {target} deleted"), 7)
            .operation("delete"),
    );
    steps
}

pub(crate) fn search(numbers: &[i64]) -> Vec<Step> {
    let Some(&target) = numbers.last() else {
        return vec![
            Step::list(Vec::new(), "List is empty, nothing to search", -1).operation("search"),
        ];
    };
    let mut steps =
        vec![Step::list(nodes(numbers), format!("Searching for {target}"), 0).operation("search")];
    for (i, &value) in numbers.iter().enumerate() {
        steps.push(
            Step::list(nodes(numbers), format!("Checking node {i}: {value}"), 2)
                .highlighting(vec![i])
                .operation("search"),
        );
        if value == target {
            steps.push(
                Step::list(nodes(numbers), format!("Found {target} at position {i}"), 3)
                    .highlighting(vec![i])
                    .found(i)
                    .operation("search"),
            );
            break;
        }
    }
    steps
}
