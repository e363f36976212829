use std::str::FromStr;

use crate::error::UnknownOperation;

/// Closed set of operation ids understood by the step generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    JumpSearch,
    ArrayAccess,
    ArrayInsert,
    ArrayDelete,
    StackPush,
    StackPop,
    StackPeek,
    QueueEnqueue,
    QueueDequeue,
    LlInsertHead,
    LlInsertTail,
    LlDelete,
    LlSearch,
    BstInsert,
    BstSearch,
    BstDelete,
    TreeInsert,
    TreeSearch,
    TreeDelete,
    TreeTraversal,
    HashInsert,
    HashSearch,
    HashDelete,
    Bfs,
    Dfs,
    Dijkstra,
}

impl OperationId {
    /// Every known operation id, in the order of the public contract.
    pub const ALL: [OperationId; 34] = [
        OperationId::BubbleSort,
        OperationId::SelectionSort,
        OperationId::InsertionSort,
        OperationId::MergeSort,
        OperationId::QuickSort,
        OperationId::HeapSort,
        OperationId::LinearSearch,
        OperationId::BinarySearch,
        OperationId::JumpSearch,
        OperationId::ArrayAccess,
        OperationId::ArrayInsert,
        OperationId::ArrayDelete,
        OperationId::StackPush,
        OperationId::StackPop,
        OperationId::StackPeek,
        OperationId::QueueEnqueue,
        OperationId::QueueDequeue,
        OperationId::LlInsertHead,
        OperationId::LlInsertTail,
        OperationId::LlDelete,
        OperationId::LlSearch,
        OperationId::BstInsert,
        OperationId::BstSearch,
        OperationId::BstDelete,
        OperationId::TreeInsert,
        OperationId::TreeSearch,
        OperationId::TreeDelete,
        OperationId::TreeTraversal,
        OperationId::HashInsert,
        OperationId::HashSearch,
        OperationId::HashDelete,
        OperationId::Bfs,
        OperationId::Dfs,
        OperationId::Dijkstra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationId::BubbleSort => "bubble-sort",
            OperationId::SelectionSort => "selection-sort",
            OperationId::InsertionSort => "insertion-sort",
            OperationId::MergeSort => "merge-sort",
            OperationId::QuickSort => "quick-sort",
            OperationId::HeapSort => "heap-sort",
            OperationId::LinearSearch => "linear-search",
            OperationId::BinarySearch => "binary-search",
            OperationId::JumpSearch => "jump-search",
            OperationId::ArrayAccess => "array-access",
            OperationId::ArrayInsert => "array-insert",
            OperationId::ArrayDelete => "array-delete",
            OperationId::StackPush => "stack-push",
            OperationId::StackPop => "stack-pop",
            OperationId::StackPeek => "stack-peek",
            OperationId::QueueEnqueue => "queue-enqueue",
            OperationId::QueueDequeue => "queue-dequeue",
            OperationId::LlInsertHead => "ll-insert-head",
            OperationId::LlInsertTail => "ll-insert-tail",
            OperationId::LlDelete => "ll-delete",
            OperationId::LlSearch => "ll-search",
            OperationId::BstInsert => "bst-insert",
            OperationId::BstSearch => "bst-search",
            OperationId::BstDelete => "bst-delete",
            OperationId::TreeInsert => "tree-insert",
            OperationId::TreeSearch => "tree-search",
            OperationId::TreeDelete => "tree-delete",
            OperationId::TreeTraversal => "tree-traversal",
            OperationId::HashInsert => "hash-insert",
            OperationId::HashSearch => "hash-search",
            OperationId::HashDelete => "hash-delete",
            OperationId::Bfs => "bfs",
            OperationId::Dfs => "dfs",
            OperationId::Dijkstra => "dijkstra",
        }
    }
}

impl FromStr for OperationId {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationId::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_id() {
        for op in OperationId::ALL {
            assert_eq!(op.as_str().parse::<OperationId>(), Ok(op));
        }
    }

    #[test]
    fn unknown_id_reports_the_offending_string() {
        let err = "totally-unknown-op".parse::<OperationId>().unwrap_err();
        assert_eq!(err, UnknownOperation("totally-unknown-op".to_string()));
        assert_eq!(err.to_string(), "unknown operation id 'totally-unknown-op'");
    }
}
