//! Dependency edges and the self-describing node capability.
//!
//! An edge `Dependency { node, prerequisite }` reads "`node` cannot run until
//! `prerequisite` has run". Edges are either supplied explicitly or derived from
//! nodes implementing [`Dependent`].

use core::hash::Hash;

use serde::{Deserialize, Serialize};

/// A directed "depends-on" edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency<T> {
    /// The node that waits.
    pub node: T,
    /// The node that must run first.
    pub prerequisite: T,
}

impl<T> Dependency<T> {
    /// Creates an edge meaning `node` depends on `prerequisite`.
    pub const fn new(node: T, prerequisite: T) -> Self {
        Self { node, prerequisite }
    }
}

impl<T> From<(T, T)> for Dependency<T> {
    #[inline]
    fn from((node, prerequisite): (T, T)) -> Self {
        Self::new(node, prerequisite)
    }
}

/// A node that knows its own prerequisites.
///
/// Implementors are compared and hashed by identity; the prerequisite slice is
/// read in declaration order and may list the same node more than once.
///
/// ```rust
/// use depcycle::graph::Dependent;
///
/// #[derive(Clone)]
/// struct Step {
///     name: &'static str,
///     after: Vec<Step>,
/// }
///
/// impl PartialEq for Step {
///     fn eq(&self, other: &Self) -> bool {
///         self.name == other.name
///     }
/// }
/// impl Eq for Step {}
/// impl std::hash::Hash for Step {
///     fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
///         self.name.hash(state);
///     }
/// }
///
/// impl Dependent for Step {
///     fn dependencies(&self) -> &[Self] {
///         &self.after
///     }
/// }
/// ```
pub trait Dependent: Eq + Hash + Clone {
    /// Prerequisites of this node, in declaration order.
    fn dependencies(&self) -> &[Self];
}

/// Flattens every declared prerequisite into one borrowed edge.
///
/// Emits one `(node, prerequisite)` pair per declaration, so a prerequisite
/// listed twice yields two edges.
pub fn build_dependencies<D: Dependent>(nodes: &[D]) -> Vec<Dependency<&D>> {
    let total = nodes.iter().map(|node| node.dependencies().len()).sum();
    let mut edges = Vec::with_capacity(total);
    for node in nodes {
        for prerequisite in node.dependencies() {
            edges.push(Dependency::new(node, prerequisite));
        }
    }
    edges
}
