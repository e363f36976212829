//! Graph traversal and shortest-path simulations.
//!
//! Topology is fixed: BFS/DFS walk a 6-node directed tree and Dijkstra a
//! 5-node weighted graph. Input values only label the nodes for display
//! (extra values are truncated, missing values leave unlabeled ids), so the
//! traversal itself is driven entirely by the edge lists below.

use std::collections::VecDeque;

use crate::step::{Diagram, DiagramNode, Distance, Edge, Step};

const TRAVERSAL_NODES: usize = 6;
const TRAVERSAL_EDGES: [(usize, usize); 5] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)];

const WEIGHTED_NODES: usize = 5;
const WEIGHTED_EDGES: [(usize, usize, i64); 6] = [
    (0, 1, 4),
    (0, 2, 1),
    (2, 1, 2),
    (1, 3, 1),
    (2, 3, 5),
    (3, 4, 3),
];

fn traversal_graph(values: &[i64]) -> Diagram {
    Diagram {
        nodes: values
            .iter()
            .take(TRAVERSAL_NODES)
            .enumerate()
            .map(|(id, &value)| DiagramNode::new(id, value))
            .collect(),
        edges: TRAVERSAL_EDGES
            .iter()
            .map(|&(from, to)| Edge::new(from, to))
            .collect(),
    }
}

fn neighbors(node: usize) -> impl Iterator<Item = usize> {
    TRAVERSAL_EDGES
        .iter()
        .filter(move |&&(from, _)| from == node)
        .map(|&(_, to)| to)
}

pub(crate) fn bfs(values: &[i64]) -> Vec<Step> {
    let graph = traversal_graph(values);
    let mut visited = vec![0];
    let mut queue = VecDeque::from([0]);
    let mut steps = vec![
        Step::graph(graph.clone(), "Starting BFS from node 0", 0)
            .visited(visited.clone())
            .frontier(queue.iter().copied().collect())
            .operation("bfs"),
    ];
    while let Some(node) = queue.pop_front() {
        steps.push(
            Step::graph(graph.clone(), format!("Visiting node {node}"), 3)
                .visited(visited.clone())
                .frontier(queue.iter().copied().collect())
                .highlighting(vec![node])
                .operation("bfs"),
        );
        for neighbor in neighbors(node) {
            if !visited.contains(&neighbor) {
                visited.push(neighbor);
                queue.push_back(neighbor);
                steps.push(
                    Step::graph(graph.clone(), format!("Added node {neighbor} to queue"), 7)
                        .visited(visited.clone())
                        .frontier(queue.iter().copied().collect())
                        .operation("bfs"),
                );
            }
        }
    }
    steps.push(
        Step::graph(graph, "BFS complete!", -1)
            .visited(visited)
            .frontier(Vec::new())
            .operation("bfs"),
    );
    steps
}

pub(crate) fn dfs(values: &[i64]) -> Vec<Step> {
    let graph = traversal_graph(values);
    let mut steps = vec![
        Step::graph(graph.clone(), "Starting DFS from node 0", 0)
            .visited(Vec::new())
            .operation("dfs"),
    ];
    let mut visited = Vec::new();
    steps.extend(dfs_visit(&graph, 0, &mut visited));
    steps.push(
        Step::graph(graph, "DFS complete!", -1)
            .visited(visited)
            .operation("dfs"),
    );
    steps
}

fn dfs_visit(graph: &Diagram, node: usize, visited: &mut Vec<usize>) -> Vec<Step> {
    visited.push(node);
    let mut steps = vec![
        Step::graph(graph.clone(), format!("Visiting node {node}"), 1)
            .visited(visited.clone())
            .highlighting(vec![node])
            .operation("dfs"),
    ];
    for neighbor in neighbors(node) {
        if !visited.contains(&neighbor) {
            steps.extend(dfs_visit(graph, neighbor, visited));
        }
    }
    steps
}

pub(crate) fn dijkstra(values: &[i64]) -> Vec<Step> {
    let node_count = values.len().min(WEIGHTED_NODES);
    let mut distances: Vec<Option<i64>> = (0..node_count)
        .map(|i| if i == 0 { Some(0) } else { None })
        .collect();
    let mut steps = vec![
        Step::graph(
            weighted_graph(values, &distances),
            "Starting Dijkstra's algorithm from node 0",
            0,
        )
        .operation("dijkstra"),
    ];
    let mut visited: Vec<usize> = Vec::new();
    for _ in 0..node_count {
        // linear minimum extraction; the index in the key breaks ties low
        let next = (0..node_count)
            .filter(|i| !visited.contains(i))
            .filter_map(|i| distances[i].map(|d| (i, d)))
            .min_by_key(|&(i, d)| (d, i));
        let Some((node, dist)) = next else {
            break;
        };
        visited.push(node);
        steps.push(
            Step::graph(
                weighted_graph(values, &distances),
                format!("Visiting node {node} with distance {dist}"),
                4,
            )
            .visited(visited.clone())
            .highlighting(vec![node])
            .operation("dijkstra"),
        );
        for &(from, to, weight) in &WEIGHTED_EDGES {
            if from != node || to >= node_count {
                continue;
            }
            let relaxed = dist + weight;
            if distances[to].map_or(true, |current| relaxed < current) {
                distances[to] = Some(relaxed);
                steps.push(
                    Step::graph(
                        weighted_graph(values, &distances),
                        format!("Updated distance to node {to}: {relaxed}"),
                        7,
                    )
                    .visited(visited.clone())
                    .highlighting(vec![to])
                    .operation("dijkstra"),
                );
            }
        }
    }
    steps.push(
        Step::graph(
            weighted_graph(values, &distances),
            "Dijkstra's algorithm complete!",
            -1,
        )
        .visited(visited)
        .operation("dijkstra"),
    );
    steps
}

fn weighted_graph(values: &[i64], distances: &[Option<i64>]) -> Diagram {
    Diagram {
        nodes: values
            .iter()
            .take(WEIGHTED_NODES)
            .enumerate()
            .map(|(id, &value)| DiagramNode {
                id,
                value,
                distance: Some(match distances.get(id) {
                    Some(Some(d)) => Distance::Reached(*d),
                    _ => Distance::Unreached,
                }),
            })
            .collect(),
        edges: WEIGHTED_EDGES
            .iter()
            .map(|&(from, to, weight)| Edge::weighted(from, to, weight))
            .collect(),
    }
}
