//! Step generation for interactive algorithm walkthroughs.
//!
//! An operation id and a raw comma-separated input line go in, a complete
//! `Vec<Step>` comes out. Each step carries a full snapshot of the data
//! structure, a one-line explanation, and the pseudocode line it animates,
//! so a frontend can scrub forwards and backwards without replaying
//! anything. [`Playback`] is the cursor that does the scrubbing.

pub mod error;
mod input;
pub mod operation;
pub mod playback;
pub mod step;

mod array;
mod graph;
mod hash;
mod list;
mod queue;
mod searching;
mod sorting;
mod stack;
mod tree;

pub use input::parse_numbers;
pub use operation::OperationId;
pub use playback::Playback;
pub use step::{Diagram, DiagramNode, Distance, Edge, ListNode, Payload, Step};

/// Generates the full step sequence for `operation` over `raw_input`.
///
/// Unknown operation ids do not fail: they yield a single placeholder step
/// so a frontend can still render something sensible.
pub fn generate(operation: &str, raw_input: &str) -> Vec<Step> {
    let numbers = input::parse_numbers(raw_input);
    let Ok(op) = operation.parse::<OperationId>() else {
        return vec![Step::array(
            &numbers,
            format!("{operation} - Implementation coming soon!"),
            0,
        )];
    };
    match op {
        OperationId::BubbleSort => sorting::bubble_sort(&numbers),
        OperationId::SelectionSort => sorting::selection_sort(&numbers),
        OperationId::InsertionSort => sorting::insertion_sort(&numbers),
        OperationId::MergeSort => sorting::merge_sort(&numbers),
        OperationId::QuickSort => sorting::quick_sort(&numbers),
        OperationId::HeapSort => sorting::heap_sort(&numbers),
        OperationId::LinearSearch => searching::linear_search(&numbers),
        OperationId::BinarySearch => searching::binary_search(&numbers),
        OperationId::JumpSearch => searching::jump_search(&numbers),
        OperationId::ArrayAccess => array::access(&numbers),
        OperationId::ArrayInsert => array::insert(&numbers),
        OperationId::ArrayDelete => array::delete(&numbers),
        OperationId::StackPush => stack::push(&numbers),
        OperationId::StackPop => stack::pop(&numbers),
        OperationId::StackPeek => stack::peek(&numbers),
        OperationId::QueueEnqueue => queue::enqueue(&numbers),
        OperationId::QueueDequeue => queue::dequeue(&numbers),
        OperationId::LlInsertHead => list::insert_head(&numbers),
        OperationId::LlInsertTail => list::insert_tail(&numbers),
        OperationId::LlDelete => list::delete(&numbers),
        OperationId::LlSearch => list::search(&numbers),
        // "tree-insert"/"tree-search" are legacy aliases for the bst ids,
        // and "bst-delete" for "tree-delete".
        OperationId::BstInsert | OperationId::TreeInsert => tree::bst_insert(&numbers),
        OperationId::BstSearch | OperationId::TreeSearch => tree::bst_search(&numbers),
        OperationId::BstDelete | OperationId::TreeDelete => tree::tree_delete(&numbers),
        OperationId::TreeTraversal => tree::tree_traversal(&numbers),
        OperationId::HashInsert => hash::insert(&numbers),
        OperationId::HashSearch => hash::search(&numbers),
        OperationId::HashDelete => hash::delete(&numbers),
        OperationId::Bfs => graph::bfs(&numbers),
        OperationId::Dfs => graph::dfs(&numbers),
        OperationId::Dijkstra => graph::dijkstra(&numbers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn unknown_operation_yields_a_placeholder_step() {
        let steps = generate("shell-sort", "3,1");
        assert_eq!(steps.len(), 1);
        insta::assert_snapshot!(
            serde_json::to_string(&steps[0]).unwrap(),
            @r#"{"array":[3,1],"explanation":"shell-sort - Implementation coming soon!","pseudoCodeLine":0}"#
        );
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("5,3,8,1")]
    fn every_operation_yields_at_least_one_step(#[case] input: &str) {
        for op in OperationId::ALL {
            let steps = generate(op.as_str(), input);
            assert!(!steps.is_empty(), "{} produced no steps", op.as_str());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for op in OperationId::ALL {
            let first = generate(op.as_str(), "5,3,8,1,9,2");
            let second = generate(op.as_str(), "5,3,8,1,9,2");
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
                "{} is not deterministic",
                op.as_str()
            );
        }
    }

    #[rstest]
    #[case(OperationId::TreeInsert, OperationId::BstInsert)]
    #[case(OperationId::TreeSearch, OperationId::BstSearch)]
    #[case(OperationId::BstDelete, OperationId::TreeDelete)]
    fn aliased_ids_generate_identical_steps(#[case] alias: OperationId, #[case] canonical: OperationId) {
        let via_alias = generate(alias.as_str(), "8,3,10,1");
        let via_canonical = generate(canonical.as_str(), "8,3,10,1");
        assert_eq!(
            serde_json::to_string(&via_alias).unwrap(),
            serde_json::to_string(&via_canonical).unwrap()
        );
    }

    #[test]
    fn bubble_sort_over_the_dispatcher_ends_sorted() {
        let steps = generate("bubble-sort", "3.7,12abc,+5,oops");
        let Some(Payload::Array(final_array)) = steps.last().map(|s| &s.payload) else {
            panic!("last step is not an array step");
        };
        assert_eq!(final_array, &vec![3, 5, 12]);
    }

    #[test]
    fn garbage_input_still_generates() {
        let steps = generate("dijkstra", ",,,not numbers,,");
        assert_eq!(steps.len(), 2);
    }
}
