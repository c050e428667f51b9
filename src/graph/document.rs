//! A serializable description of one ordering query.

use core::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{CycleDetector, Dependency, SortError};

/// Nodes plus their dependency edges, as read from or written to JSON.
///
/// ```rust
/// use depcycle::graph::{CycleDetector, GraphDocument};
///
/// let doc: GraphDocument<String> = GraphDocument::from_json(
///     r#"{
///         "nodes": ["link", "compile"],
///         "dependencies": [{ "node": "link", "prerequisite": "compile" }]
///     }"#,
/// ).unwrap();
///
/// assert_eq!(doc.find_order(&CycleDetector::new()), Some(vec!["compile".to_string(), "link".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument<T> {
    /// Every node of the graph, distinct.
    pub nodes: Vec<T>,
    /// Edges between members of `nodes`.
    #[serde(default = "Vec::new")]
    pub dependencies: Vec<Dependency<T>>,
}

impl<T> GraphDocument<T> {
    /// Creates a document from its parts.
    pub fn new(nodes: Vec<T>, dependencies: Vec<Dependency<T>>) -> Self {
        Self { nodes, dependencies }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.dependencies.len()
    }
}

impl<T: Eq + Hash + Clone> GraphDocument<T> {
    /// Execution order of the document's nodes, `None` if unsatisfiable.
    pub fn find_order(&self, detector: &CycleDetector) -> Option<Vec<T>> {
        detector.find_order(&self.nodes, &self.dependencies)
    }

    /// Execution order of the document's nodes with the failure kind.
    ///
    /// # Errors
    /// See [`CycleDetector::try_find_order`].
    pub fn try_find_order(&self, detector: &CycleDetector) -> Result<Vec<T>, SortError> {
        detector.try_find_order(&self.nodes, &self.dependencies)
    }
}

impl<T: DeserializeOwned> GraphDocument<T> {
    /// Parses a JSON document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<T: Serialize> GraphDocument<T> {
    /// Renders the document as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error if a node fails to serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_default_to_empty() {
        let doc: GraphDocument<u32> = GraphDocument::from_json(r#"{ "nodes": [2, 1] }"#).unwrap();
        assert_eq!(doc.edge_count(), 0);
        assert_eq!(doc.find_order(&CycleDetector::new()), Some(vec![2, 1]));
    }

    #[test]
    fn json_round_trip_preserves_edges() {
        let doc = GraphDocument::new(vec![0u32, 1], vec![Dependency::new(1, 0)]);
        let parsed: GraphDocument<u32> = GraphDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn cyclic_document_reports_cycle() {
        let doc = GraphDocument::new(vec!['a', 'b'], vec![Dependency::new('a', 'b'), Dependency::new('b', 'a')]);
        let detector = CycleDetector::new();

        assert_eq!(doc.find_order(&detector), None);
        assert_eq!(doc.try_find_order(&detector), Err(SortError::Cycle { unresolved: 2 }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GraphDocument::<u32>::from_json(r#"{ "dependencies": [] }"#).is_err());
        assert!(GraphDocument::<u32>::from_json("[").is_err());
    }
}
