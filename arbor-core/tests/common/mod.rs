//! Graph fixtures shared by the integration tests.

use arbor_core::{Edge, Graph};

/// Edge triples of the five-vertex reference graph whose minimum spanning
/// tree weighs 10.
pub const FIVE_VERTEX_EDGES: &[(usize, usize, i64)] = &[
    (0, 1, 2),
    (0, 2, 3),
    (1, 2, 1),
    (1, 3, 4),
    (2, 3, 5),
    (2, 4, 6),
    (3, 4, 3),
];

/// Two disjoint triangles over vertices `0..3` and `3..6`.
pub const TWO_TRIANGLES_EDGES: &[(usize, usize, i64)] = &[
    (0, 1, 1),
    (1, 2, 2),
    (0, 2, 3),
    (3, 4, 1),
    (4, 5, 2),
    (3, 5, 3),
];

/// Ten-vertex graph mixing a ring, chords, and a parallel edge.
pub const TEN_VERTEX_EDGES: &[(usize, usize, i64)] = &[
    (0, 1, 4),
    (1, 2, 8),
    (2, 3, 7),
    (3, 4, 9),
    (4, 5, 10),
    (5, 6, 2),
    (6, 7, 1),
    (7, 8, 7),
    (8, 9, 6),
    (9, 0, 11),
    (0, 7, 8),
    (1, 7, 11),
    (2, 8, 2),
    (2, 5, 4),
    (3, 5, 14),
    (6, 8, 6),
    (4, 9, 3),
    (2, 3, 5),
];

/// Builds a graph from in-range fixture edges.
pub fn graph(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
    Graph::from_edges(vertex_count, edges.iter().copied()).expect("fixture edges must be valid")
}

/// Returns the weight of the lightest spanning tree by trying every
/// `(V - 1)`-edge subset, or `None` when no subset spans the graph.
pub fn brute_force_mst_weight(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Option<i64> {
    let needed = vertex_count.saturating_sub(1);
    let mut best = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut weight = 0;
        let mut acyclic = true;
        for (index, &(from, to, w)) in edges.iter().enumerate() {
            if mask & (1 << index) == 0 {
                continue;
            }
            let (a, b) = (root(&mut parent, from), root(&mut parent, to));
            if a == b {
                acyclic = false;
                break;
            }
            parent[b] = a;
            weight += w;
        }
        if acyclic {
            best = Some(best.map_or(weight, |current: i64| current.min(weight)));
        }
    }
    best
}

/// Returns `true` when `edges` contain no cycle over `vertex_count` vertices.
pub fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    edges.iter().all(|edge| {
        let (a, b) = (root(&mut parent, edge.from()), root(&mut parent, edge.to()));
        parent[b] = a;
        a != b
    })
}

fn root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}
