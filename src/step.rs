use serde::Serialize;

/// One immutable snapshot of simulation state, plus the explanation text and
/// pseudo-code line pointer shown alongside it.
///
/// Exactly one structure payload is embedded per step; annotation fields are
/// optional and drive visual emphasis only. Serializes to the camelCase JSON
/// shape the renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(flatten)]
    pub payload: Payload,
    pub explanation: String,
    /// 0-based index into the operation's pseudo-code listing, -1 for
    /// terminal states with no specific line.
    pub pseudo_code_line: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighting: Option<Vec<usize>>,
    /// Current `[left, right]` bounds of a binary search; the right bound can
    /// reach -1 once the window is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_range: Option<[i64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Vec<usize>>,
    /// Graph traversal frontier; serialized as `queue`, distinct from the
    /// queue structure payload.
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub frontier: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
}

impl Step {
    pub fn new(payload: Payload, explanation: impl Into<String>, pseudo_code_line: i32) -> Self {
        Step {
            payload,
            explanation: explanation.into(),
            pseudo_code_line,
            comparing: None,
            swapped: None,
            highlighting: None,
            search_range: None,
            found: None,
            sorted: None,
            visited: None,
            frontier: None,
            operation: None,
        }
    }

    pub fn array(values: &[i64], explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::Array(values.to_vec()), explanation, line)
    }

    pub fn stack(values: &[i64], explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::Stack(values.to_vec()), explanation, line)
    }

    pub fn queue(values: &[i64], explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::Queue(values.to_vec()), explanation, line)
    }

    pub fn list(nodes: Vec<ListNode>, explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::LinkedList(nodes), explanation, line)
    }

    pub fn tree(diagram: Diagram, explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::Tree(diagram), explanation, line)
    }

    pub fn graph(diagram: Diagram, explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::Graph(diagram), explanation, line)
    }

    pub fn hash_table(buckets: &[Vec<i64>], explanation: impl Into<String>, line: i32) -> Self {
        Step::new(Payload::HashTable(buckets.to_vec()), explanation, line)
    }

    pub fn comparing(mut self, a: usize, b: usize) -> Self {
        self.comparing = Some(vec![a, b]);
        self
    }

    pub fn swapped(mut self, a: usize, b: usize) -> Self {
        self.swapped = Some(vec![a, b]);
        self
    }

    pub fn highlighting(mut self, indices: Vec<usize>) -> Self {
        self.highlighting = Some(indices);
        self
    }

    pub fn search_range(mut self, left: i64, right: i64) -> Self {
        self.search_range = Some([left, right]);
        self
    }

    pub fn found(mut self, at: usize) -> Self {
        self.found = Some(at);
        self
    }

    pub fn sorted(mut self) -> Self {
        self.sorted = Some(true);
        self
    }

    pub fn visited(mut self, ids: Vec<usize>) -> Self {
        self.visited = Some(ids);
        self
    }

    pub fn frontier(mut self, ids: Vec<usize>) -> Self {
        self.frontier = Some(ids);
        self
    }

    pub fn operation(mut self, tag: &'static str) -> Self {
        self.operation = Some(tag);
        self
    }
}

/// The family-specific structure snapshot carried by a step. Externally
/// tagged, so a serialized step contains exactly one of the payload keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    Array(Vec<i64>),
    Stack(Vec<i64>),
    Queue(Vec<i64>),
    LinkedList(Vec<ListNode>),
    Tree(Diagram),
    Graph(Diagram),
    HashTable(Vec<Vec<i64>>),
}

/// A linked-list cell: its value and the index of the next cell, `null` at
/// the tail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListNode {
    pub value: i64,
    pub next: Option<usize>,
}

/// Node/edge description shared by the tree and graph payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagramNode {
    pub id: usize,
    pub value: i64,
    /// Shortest-path distance, tracked by Dijkstra only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
}

impl DiagramNode {
    pub fn new(id: usize, value: i64) -> Self {
        DiagramNode {
            id,
            value,
            distance: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Edge {
            from,
            to,
            weight: None,
        }
    }

    pub fn weighted(from: usize, to: usize, weight: i64) -> Self {
        Edge {
            from,
            to,
            weight: Some(weight),
        }
    }
}

/// A node's distance label. `Unreached` serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Reached(i64),
    Unreached,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(step: &Step) -> String {
        serde_json::to_string(step).expect("step serializes")
    }

    #[test]
    fn array_step_serializes_with_camel_case_keys() {
        let step = Step::array(&[3, 1], "Comparing 3 and 1", 2).comparing(0, 1);
        insta::assert_snapshot!(
            json(&step),
            @r#"{"array":[3,1],"explanation":"Comparing 3 and 1","pseudoCodeLine":2,"comparing":[0,1]}"#
        );
    }

    #[test]
    fn absent_annotations_are_absent_keys() {
        let step = Step::stack(&[], "Stack is empty, cannot pop", 1).operation("pop");
        insta::assert_snapshot!(
            json(&step),
            @r#"{"stack":[],"explanation":"Stack is empty, cannot pop","pseudoCodeLine":1,"operation":"pop"}"#
        );
    }

    #[test]
    fn list_tail_serializes_null_next() {
        let nodes = vec![
            ListNode {
                value: 5,
                next: Some(1),
            },
            ListNode {
                value: 7,
                next: None,
            },
        ];
        let step = Step::list(nodes, "Searching for 7", 0).operation("search");
        insta::assert_snapshot!(
            json(&step),
            @r#"{"linkedList":[{"value":5,"next":1},{"value":7,"next":null}],"explanation":"Searching for 7","pseudoCodeLine":0,"operation":"search"}"#
        );
    }

    #[test]
    fn unreached_distance_serializes_null() {
        let diagram = Diagram {
            nodes: vec![
                DiagramNode {
                    id: 0,
                    value: 9,
                    distance: Some(Distance::Reached(0)),
                },
                DiagramNode {
                    id: 1,
                    value: 4,
                    distance: Some(Distance::Unreached),
                },
            ],
            edges: vec![Edge::weighted(0, 1, 4)],
        };
        let step = Step::graph(diagram, "Starting Dijkstra's algorithm from node 0", 0)
            .operation("dijkstra");
        insta::assert_snapshot!(
            json(&step),
            @r#"{"graph":{"nodes":[{"id":0,"value":9,"distance":0},{"id":1,"value":4,"distance":null}],"edges":[{"from":0,"to":1,"weight":4}]},"explanation":"Starting Dijkstra's algorithm from node 0","pseudoCodeLine":0,"operation":"dijkstra"}"#
        );
    }

    #[test]
    fn frontier_serializes_as_queue_key() {
        let step = Step::graph(Diagram::default(), "Starting BFS from node 0", 0)
            .visited(vec![0])
            .frontier(vec![0])
            .operation("bfs");
        insta::assert_snapshot!(
            json(&step),
            @r#"{"graph":{"nodes":[],"edges":[]},"explanation":"Starting BFS from node 0","pseudoCodeLine":0,"visited":[0],"queue":[0],"operation":"bfs"}"#
        );
    }

    #[test]
    fn search_range_keeps_signed_bounds() {
        let step = Step::array(&[1], "1 < 2, search left half", 6).search_range(0, -1);
        assert_eq!(step.search_range, Some([0, -1]));
        assert!(json(&step).contains(r#""searchRange":[0,-1]"#));
    }
}
