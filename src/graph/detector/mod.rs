//! Cycle detection and execution ordering over dependency edges.
//!
//! [`CycleDetector`] answers two questions about a set of nodes and their
//! "depends-on" edges: does a cycle exist, and if not, in which order can the
//! nodes run so that every node comes after all of its prerequisites.
//!
//! The traversal is Kahn's algorithm over a prerequisite-indexed CSR built once
//! per call. Nothing is cached between calls; a detector only carries its
//! [`DetectorConfig`].
//!
//! Two API families share the traversal:
//! - `find_order` / `has_cycle` return `Option`/`bool` and do not distinguish a
//!   cycle from an edge naming a node outside the set.
//! - `try_find_order` returns [`SortError`] with the failure kind.

mod config;
mod error;
mod index;
mod validate;


pub use config::{DetectorConfig, DuplicateEdges};
pub use error::SortError;
pub use validate::is_valid_order;

use core::hash::Hash;

use index::DependencyIndex;

use crate::graph::{build_dependencies, Dependency, Dependent};

/// Kahn-style topological sorter with cycle detection.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `find_order` | \(O(n + m)\) | Index build plus one release per edge |
/// | `find_dependent_order` | \(O(n + m)\) | Edges borrowed from the nodes, no clones until output |
/// | `has_cycle` | \(O(n + m)\) | Same traversal, no output clones |
///
/// Output is deterministic: zero-indegree nodes are seeded in input order and
/// each node's dependents are released in edge-list order.
///
/// ```rust
/// use depcycle::graph::{CycleDetector, Dependency};
///
/// let detector = CycleDetector::new();
/// let deps = [Dependency::new(4, 0), Dependency::new(0, 1), Dependency::new(1, 3), Dependency::new(3, 2)];
/// assert_eq!(detector.find_order(&[0, 1, 2, 3, 4], &deps), Some(vec![2, 3, 1, 0, 4]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleDetector {
    config: DetectorConfig,
}

impl CycleDetector {
    /// Creates a detector with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(DetectorConfig::new())
    }

    /// Creates a detector with an explicit configuration.
    pub const fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> DetectorConfig {
        self.config
    }

    /// Returns `true` if no valid execution order exists for `nodes`.
    ///
    /// A prerequisite missing from `nodes` counts as unsatisfiable.
    pub fn has_cycle<D: Dependent>(&self, nodes: &[D]) -> bool {
        self.dependent_positions(nodes).is_err()
    }

    /// Returns an execution order for `nodes`, or `None` when a cycle exists or
    /// an edge names a node outside `nodes`.
    ///
    /// An empty node set always yields an empty order.
    pub fn find_order<T>(&self, nodes: &[T], dependencies: &[Dependency<T>]) -> Option<Vec<T>>
    where
        T: Eq + Hash + Clone,
    {
        self.try_find_order(nodes, dependencies).ok()
    }

    /// Like [`find_order`](Self::find_order), with the failure kind.
    ///
    /// # Errors
    /// - [`SortError::DuplicateNode`] if `nodes` lists a node twice
    /// - [`SortError::UnknownNode`] if an edge names a node outside `nodes`
    /// - [`SortError::Cycle`] if some nodes never become ready
    pub fn try_find_order<T>(&self, nodes: &[T], dependencies: &[Dependency<T>]) -> Result<Vec<T>, SortError>
    where
        T: Eq + Hash + Clone,
    {
        let positions = self.order_positions(nodes, dependencies)?;
        let order: Vec<T> = positions.into_iter().map(|i| nodes[i].clone()).collect();

        debug_assert!(
            nodes.is_empty() || is_valid_order(nodes, dependencies, &order),
            "prerequisite ordered after its dependent"
        );

        Ok(order)
    }

    /// Execution order for self-describing nodes, edges taken from
    /// [`Dependent::dependencies`].
    pub fn find_dependent_order<D: Dependent>(&self, nodes: &[D]) -> Option<Vec<D>> {
        self.try_find_dependent_order(nodes).ok()
    }

    /// Like [`find_dependent_order`](Self::find_dependent_order), with the failure kind.
    ///
    /// # Errors
    /// Same as [`try_find_order`](Self::try_find_order); `UnknownNode` reports
    /// the position of the offending edge in declaration order.
    pub fn try_find_dependent_order<D: Dependent>(&self, nodes: &[D]) -> Result<Vec<D>, SortError> {
        let positions = self.dependent_positions(nodes)?;
        Ok(positions.into_iter().map(|i| nodes[i].clone()).collect())
    }

    /// Orders many independent graphs on the rayon pool, one traversal each.
    #[cfg(feature = "parallel")]
    pub fn find_orders_par<T>(&self, graphs: &[crate::graph::GraphDocument<T>]) -> Vec<Option<Vec<T>>>
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        use rayon::prelude::*;

        graphs.par_iter().map(|graph| graph.find_order(self)).collect()
    }

    fn dependent_positions<D: Dependent>(&self, nodes: &[D]) -> Result<Vec<usize>, SortError> {
        let refs: Vec<&D> = nodes.iter().collect();
        let dependencies = build_dependencies(nodes);
        let positions = self.order_positions(&refs, &dependencies)?;

        #[cfg(debug_assertions)]
        {
            let order: Vec<&D> = positions.iter().map(|&i| refs[i]).collect();
            debug_assert!(
                refs.is_empty() || is_valid_order(&refs, &dependencies, &order),
                "prerequisite ordered after its dependent"
            );
        }

        Ok(positions)
    }

    /// Positions of `nodes` in execution order.
    fn order_positions<T: Eq + Hash>(&self, nodes: &[T], dependencies: &[Dependency<T>]) -> Result<Vec<usize>, SortError> {
        if nodes.is_empty() {
            return Ok(Vec::new());
        }

        let index = match DependencyIndex::build(nodes, dependencies, self.config.duplicate_edges) {
            Ok(index) => index,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(nodes = nodes.len(), edges = dependencies.len(), %err, "dependency input rejected");
                return Err(err);
            }
        };

        let node_count = index.node_count();
        #[cfg(feature = "tracing")]
        let edge_count = index.edge_count();

        let order = index.kahn_order();

        // Kahn emits each node at most once; a short order means some nodes
        // never saw all of their prerequisites released.
        if order.len() == node_count {
            #[cfg(feature = "tracing")]
            tracing::debug!(nodes = node_count, edges = edge_count, "execution order found");
            Ok(order)
        } else {
            let unresolved = node_count - order.len();
            #[cfg(feature = "tracing")]
            tracing::debug!(nodes = node_count, edges = edge_count, unresolved, "dependency cycle detected");
            Err(SortError::Cycle { unresolved })
        }
    }
}
