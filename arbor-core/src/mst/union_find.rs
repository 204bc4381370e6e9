//! Union-find (disjoint set union) used by Kruskal's engine.
//!
//! Each root represents one component discovered so far. `find` compresses
//! paths iteratively, so arbitrarily deep parent chains never grow the call
//! stack.

use crate::graph::VertexId;

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, mut vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != root {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when both already share a root. The lower-rank root
    /// goes under the higher-rank one; on a tie `right`'s root goes under
    /// `left`'s root, whose rank grows by one.
    pub(super) fn union(&mut self, left: VertexId, right: VertexId) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }
}
