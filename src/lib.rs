//! # `depcycle` - Dependency Cycle Detection and Execution Ordering
//!
//! Given a set of nodes and directed "depends-on" edges, `depcycle` answers
//! whether a cycle exists and, when none does, produces an execution order in
//! which every node appears after all of its prerequisites.
//!
//! ## Key Features
//!
//! - **Linear time**: Kahn's algorithm over a prerequisite-indexed CSR, \(O(n + m)\)
//! - **Generic nodes**: any `Eq + Hash + Clone` value can be a node
//! - **Self-describing nodes**: types implementing [`Dependent`] supply their own edges
//! - **Deterministic**: identical inputs always yield identical orders
//! - **Two failure styles**: `Option` when only success matters, [`SortError`] when the
//!   kind of failure matters
//!
//! ## Guarantees
//!
//! **Theorem 1 (Order Validity)**: Every returned order is a permutation of the input
//! nodes in which each edge's prerequisite precedes its node. Debug builds check this
//! after every successful run.
//!
//! **Theorem 2 (Cycle Completeness)**: If any cycle exists among the nodes, no order is
//! returned. A node that lists itself as a prerequisite is a cycle.
//!
//! **Theorem 3 (Edge Multiplicity)**: A repeated edge raises the indegree once per
//! occurrence and is released once per occurrence, so duplicates never change the result.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for every run
//! - `parallel`: order many independent graphs on the rayon pool
//!
//! ## Example
//!
//! ```rust
//! use depcycle::{CycleDetector, Dependency};
//!
//! let detector = CycleDetector::new();
//!
//! // 4 -> 0 -> 1 -> 3 -> 2, read `a -> b` as "a depends on b".
//! let edges: Vec<Dependency<u32>> = [(4, 0), (0, 1), (1, 3), (3, 2)]
//!     .into_iter()
//!     .map(Dependency::from)
//!     .collect();
//! assert_eq!(detector.find_order(&[0, 1, 2, 3, 4], &edges), Some(vec![2, 3, 1, 0, 4]));
//!
//! // Closing the loop makes every order impossible.
//! let mut cyclic = edges.clone();
//! cyclic.push(Dependency::new(1, 4));
//! assert_eq!(detector.find_order(&[0, 1, 2, 3, 4], &cyclic), None);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{
    build_dependencies,
    is_valid_order,
    CycleDetector,
    Dependency,
    Dependent,
    DetectorConfig,
    DuplicateEdges,
    GraphDocument,
    SortError,
};

// Compile-time assertions for the detector's footprint.
const _: () = {
    use core::mem;

    // A detector carries only its configuration.
    assert!(mem::size_of::<CycleDetector>() == mem::size_of::<DetectorConfig>());
    assert!(mem::size_of::<DuplicateEdges>() == 1);
};
