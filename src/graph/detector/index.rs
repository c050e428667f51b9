//! Prerequisite-indexed adjacency, built once per run.
//!
//! Nodes are addressed by their position in the caller's node list. Edges are
//! stored in CSR (compressed sparse row) form keyed by prerequisite, so each
//! dequeue touches only the edges leaving that node.
//!
//! Memory layout:
//! - `indegree`: outstanding prerequisite count per node
//! - `offsets`: `n + 1` row offsets into `dependents`
//! - `dependents`: one entry per edge occurrence, grouped by prerequisite and
//!   kept in edge-list order within each row

use core::hash::Hash;
use std::collections::{HashMap, HashSet, VecDeque};

use super::config::DuplicateEdges;
use super::error::SortError;
use crate::graph::Dependency;

/// Indegree map plus prerequisite→dependents adjacency for one query.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `build` | \(O(n + m)\) | Hashes every node once, counting sort over edges |
/// | `dependents` | \(O(1)\) | Slice into the flat CSR row |
/// | `kahn_order` | \(O(n + m)\) | Each edge is released exactly once |
#[derive(Debug, Clone)]
pub(crate) struct DependencyIndex {
    indegree: Vec<usize>,
    offsets: Vec<usize>,
    dependents: Vec<usize>,
}

impl DependencyIndex {
    /// Resolves edges to node positions and builds the CSR rows.
    ///
    /// # Errors
    /// `DuplicateNode` if a node is listed twice, `UnknownNode` if an edge
    /// names a node outside `nodes`.
    pub(crate) fn build<T: Eq + Hash>(
        nodes: &[T],
        dependencies: &[Dependency<T>],
        policy: DuplicateEdges,
    ) -> Result<Self, SortError> {
        let n = nodes.len();

        let mut positions: HashMap<&T, usize> = HashMap::with_capacity(n);
        for (position, node) in nodes.iter().enumerate() {
            if positions.insert(node, position).is_some() {
                return Err(SortError::DuplicateNode { position });
            }
        }

        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(dependencies.len());
        for (edge, dependency) in dependencies.iter().enumerate() {
            match (
                positions.get(&dependency.node),
                positions.get(&dependency.prerequisite),
            ) {
                (Some(&node), Some(&prerequisite)) => edges.push((node, prerequisite)),
                _ => return Err(SortError::UnknownNode { edge }),
            }
        }

        // Keep the last copy of each pair: that is where `Count` releases the node.
        if policy == DuplicateEdges::Collapse {
            let mut seen = HashSet::with_capacity(edges.len());
            edges.reverse();
            edges.retain(|&edge| seen.insert(edge));
            edges.reverse();
        }

        let mut indegree = vec![0usize; n];
        let mut offsets = vec![0usize; n + 1];
        for &(node, prerequisite) in &edges {
            indegree[node] += 1;
            offsets[prerequisite + 1] += 1;
        }
        for p in 0..n {
            offsets[p + 1] += offsets[p];
        }

        // Stable fill keeps each row in edge-list order.
        let mut cursor = offsets[..n].to_vec();
        let mut dependents = vec![0usize; edges.len()];
        for &(node, prerequisite) in &edges {
            dependents[cursor[prerequisite]] = node;
            cursor[prerequisite] += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            nodes = n,
            edges = dependents.len(),
            collapsed = dependencies.len() - dependents.len(),
            "dependency index built"
        );

        Ok(Self {
            indegree,
            offsets,
            dependents,
        })
    }

    /// Number of indexed nodes.
    pub(crate) fn node_count(&self) -> usize {
        self.indegree.len()
    }

    /// Number of indexed edge occurrences.
    #[cfg(any(test, feature = "tracing"))]
    pub(crate) fn edge_count(&self) -> usize {
        self.dependents.len()
    }

    /// Outstanding prerequisites of `node` before traversal.
    #[cfg(test)]
    pub(crate) fn indegree(&self, node: usize) -> usize {
        self.indegree[node]
    }

    /// Nodes waiting on `prerequisite`, one entry per edge.
    #[cfg(test)]
    pub(crate) fn dependents(&self, prerequisite: usize) -> &[usize] {
        &self.dependents[self.offsets[prerequisite]..self.offsets[prerequisite + 1]]
    }

    /// Runs Kahn's algorithm and returns the positions it could order.
    ///
    /// Zero-indegree nodes are seeded in input order and every node is appended
    /// when it is enqueued. A result shorter than `node_count` means some nodes
    /// never had all of their prerequisites released.
    pub(crate) fn kahn_order(mut self) -> Vec<usize> {
        let n = self.node_count();
        let mut order = Vec::with_capacity(n);
        let mut queue = VecDeque::with_capacity(n);

        for u in 0..n {
            if self.indegree[u] == 0 {
                order.push(u);
                queue.push_back(u);
            }
        }

        while let Some(p) = queue.pop_front() {
            let row = self.offsets[p]..self.offsets[p + 1];
            for &v in &self.dependents[row] {
                self.indegree[v] -= 1;
                if self.indegree[v] == 0 {
                    order.push(v);
                    queue.push_back(v);
                }
            }
        }

        order
    }
}
