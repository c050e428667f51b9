//! Dependency graphs: edges, self-describing nodes, and the cycle detector.
//!
//! - `dependency`: the edge type and the [`Dependent`] capability
//! - `detector`: Kahn ordering, cycle detection, and order validation
//! - `document`: a serde description of one query

mod dependency;
pub mod detector;
mod document;

pub use dependency::{build_dependencies, Dependency, Dependent};
pub use detector::{is_valid_order, CycleDetector, DetectorConfig, DuplicateEdges, SortError};
pub use document::GraphDocument;
