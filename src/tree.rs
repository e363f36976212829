//! BST and generic tree simulations.
//!
//! Nodes are laid out by insertion order into a complete-binary-tree index
//! scheme: the parent of node `i` is `(i - 1) / 2`. Key comparisons play no
//! part in shaping the tree, and "in-order" traversal visits input order.
//! This mirrors the rendered behavior of the visualizer, not textbook BST
//! semantics.

use crate::step::{Diagram, DiagramNode, Edge, Step};

fn complete_tree(values: &[i64]) -> Diagram {
    Diagram {
        nodes: values
            .iter()
            .enumerate()
            .map(|(id, &value)| DiagramNode::new(id, value))
            .collect(),
        edges: (1..values.len()).map(|id| Edge::new((id - 1) / 2, id)).collect(),
    }
}

pub(crate) fn bst_insert(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![
            Step::tree(Diagram::default(), "Tree is empty, nothing to insert", -1)
                .operation("bst-insert"),
        ];
    }
    let mut steps = Vec::new();
    for (idx, &value) in numbers.iter().enumerate() {
        let line = if idx == 0 { 1 } else { 3 };
        steps.push(
            Step::tree(
                complete_tree(&numbers[..idx]),
                format!("Inserting {value} into BST"),
                line,
            )
            .highlighting(vec![idx])
            .operation("bst-insert"),
        );
        steps.push(
            Step::tree(
                complete_tree(&numbers[..=idx]),
                format!("{value} inserted into BST"),
                6,
            )
            .highlighting(vec![idx])
            .operation("bst-insert"),
        );
    }
    steps
}

pub(crate) fn bst_search(numbers: &[i64]) -> Vec<Step> {
    let Some((&target, values)) = numbers.split_last() else {
        return vec![
            Step::tree(Diagram::default(), "Tree is empty, nothing to search", -1)
                .operation("bst-search"),
        ];
    };
    let tree = complete_tree(values);
    let mut steps = vec![
        Step::tree(tree.clone(), format!("Searching for {target} in BST"), 0)
            .operation("bst-search"),
    ];
    for (i, &value) in values.iter().enumerate() {
        steps.push(
            Step::tree(tree.clone(), format!("Checking node {value}"), 1)
                .highlighting(vec![i])
                .operation("bst-search"),
        );
        if value == target {
            steps.push(
                Step::tree(tree.clone(), format!("Found {target}!"), 2)
                    .highlighting(vec![i])
                    .found(i)
                    .operation("bst-search"),
            );
            return steps;
        }
    }
    steps.push(Step::tree(tree, format!("{target} not found"), 5).operation("bst-search"));
    steps
}

pub(crate) fn tree_delete(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![
            Step::tree(Diagram::default(), "Tree is empty, nothing to delete", -1)
                .operation("tree-delete"),
        ];
    }
    let target = numbers[numbers.len() / 2];
    let tree = complete_tree(numbers);
    let mut steps = vec![
        Step::tree(tree.clone(), format!("Deleting node {target} from tree"), 0)
            .operation("tree-delete"),
    ];
    // removal is by value only; the edge list keeps its original endpoints
    let mut pruned = tree;
    pruned.nodes.retain(|node| node.value != target);
    steps.push(Step::tree(pruned, format!("Node {target} deleted"), 3).operation("tree-delete"));
    steps
}

pub(crate) fn tree_traversal(numbers: &[i64]) -> Vec<Step> {
    let tree = complete_tree(numbers);
    let mut steps = vec![
        Step::tree(tree.clone(), "Starting tree traversal (In-order)", 0)
            .operation("tree-traversal"),
    ];
    for (i, &value) in numbers.iter().enumerate() {
        steps.push(
            Step::tree(tree.clone(), format!("Visiting node {value}"), 0)
                .highlighting(vec![i])
                .operation("tree-traversal"),
        );
    }
    steps
}
