//! Detector configuration.

use serde::{Deserialize, Serialize};

/// How repeated identical edges are ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdges {
    /// Every occurrence adds one to the indegree and is released once.
    #[default]
    Count,
    /// Identical `(node, prerequisite)` pairs are merged before traversal.
    Collapse,
}

/// Tunables for [`CycleDetector`](super::CycleDetector).
///
/// ```rust
/// use depcycle::graph::{DetectorConfig, DuplicateEdges};
///
/// let config: DetectorConfig = serde_json::from_str(r#"{"duplicate_edges":"collapse"}"#).unwrap();
/// assert_eq!(config, DetectorConfig::new().duplicate_edges(DuplicateEdges::Collapse));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Duplicate edge ingestion policy.
    pub duplicate_edges: DuplicateEdges,
}

impl DetectorConfig {
    /// Default configuration: duplicate edges are counted.
    pub const fn new() -> Self {
        Self {
            duplicate_edges: DuplicateEdges::Count,
        }
    }

    /// Sets the duplicate edge policy.
    #[must_use]
    pub const fn duplicate_edges(mut self, policy: DuplicateEdges) -> Self {
        self.duplicate_edges = policy;
        self
    }
}
