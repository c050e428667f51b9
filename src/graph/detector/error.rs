//! Failure kinds for the `Result`-returning ordering API.

use core::fmt;

/// Why no execution order could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortError {
    /// At least one cycle exists; `unresolved` nodes never had all of their
    /// prerequisites satisfied.
    Cycle {
        /// Number of nodes left out of the order.
        unresolved: usize,
    },
    /// An edge names a node that is not part of the node set.
    UnknownNode {
        /// Position of the first offending edge in the dependency list.
        edge: usize,
    },
    /// The node set lists the same node twice.
    DuplicateNode {
        /// Position of the second occurrence in the node list.
        position: usize,
    },
}

impl SortError {
    /// Returns `true` for a genuine dependency cycle.
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { unresolved } => {
                write!(f, "dependency cycle detected ({unresolved} nodes unresolved)")
            }
            Self::UnknownNode { edge } => {
                write!(f, "dependency #{edge} references a node outside the node set")
            }
            Self::DuplicateNode { position } => {
                write!(f, "node at position {position} is listed more than once")
            }
        }
    }
}

impl std::error::Error for SortError {}
