//! Data model for motif search matches.
//!
//! A motif is a sub-graph pattern of up to three neurons. The matching
//! service returns one [`MotifMatch`] per occurrence, mapping each motif
//! position ([`NodeLabel`]) to the matched cell and listing the connections
//! that satisfied the per-edge constraints. Cell IDs are 64-bit and arrive
//! stringified in JSON payloads built for JavaScript clients; deserialization
//! accepts both forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A motif position. Labels order as `A < B < C` and that order fixes
/// column layout wherever matches are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    /// First motif position.
    A,
    /// Second motif position.
    B,
    /// Third motif position.
    C,
}

impl NodeLabel {
    /// All labels in display order.
    pub const ALL: [NodeLabel; 3] = [NodeLabel::A, NodeLabel::B, NodeLabel::C];

    /// The single-letter form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::A => "A",
            NodeLabel::B => "B",
            NodeLabel::C => "C",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a node label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNodeLabel(pub String);

impl fmt::Display for InvalidNodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid node label: {:?}", self.0)
    }
}

impl Error for InvalidNodeLabel {}

impl FromStr for NodeLabel {
    type Err = InvalidNodeLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(NodeLabel::A),
            "B" => Ok(NodeLabel::B),
            "C" => Ok(NodeLabel::C),
            other => Err(InvalidNodeLabel(other.to_string())),
        }
    }
}

/// A reference to a matched cell: its root ID and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    /// The cell's root ID. Serialized as a string, since 64-bit integers
    /// overflow the number type of JSON consumers.
    #[serde(serialize_with = "serialize_id", deserialize_with = "deserialize_id")]
    pub id: u64,
    /// The cell's display name.
    pub name: String,
}

impl CellRef {
    /// Creates a cell reference.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

fn serialize_id<S>(id: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(u64),
        Str(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => Ok(n),
        IdRepr::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// One connection that satisfied a motif edge's constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMatch {
    /// Label of the presynaptic motif position.
    pub from: NodeLabel,
    /// Label of the postsynaptic motif position.
    pub to: NodeLabel,
    /// Neuropil the connection was observed in, if constrained.
    pub region: Option<String>,
    /// Number of synapses on the connection.
    pub syn_count: u32,
    /// Predicted neurotransmitter type, if constrained.
    pub nt_type: Option<String>,
}

/// One occurrence of the queried motif.
///
/// The node mapping is keyed by [`NodeLabel`], so iteration always yields
/// cells in label order regardless of the order they arrived in.
///
/// ```rust
/// use motif_widgets::motif::{CellRef, MotifMatch, NodeLabel};
///
/// let m = MotifMatch::new()
///     .with_cell(NodeLabel::B, CellRef::new(42, "KC.b"))
///     .with_cell(NodeLabel::A, CellRef::new(7, "PN.1"));
///
/// assert_eq!(m.cell_ids(), vec![7, 42]);
/// assert_eq!(m.id_list(), "7,42");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifMatch {
    /// The matched cell for each motif position.
    pub nodes: BTreeMap<NodeLabel, CellRef>,
    /// The connections satisfying the motif's edge constraints.
    #[serde(default)]
    pub edges: Vec<EdgeMatch>,
}

impl MotifMatch {
    /// Creates an empty match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matched cell for a motif position (builder pattern).
    pub fn with_cell(mut self, label: NodeLabel, cell: CellRef) -> Self {
        self.nodes.insert(label, cell);
        self
    }

    /// Adds an edge record (builder pattern).
    pub fn with_edge(mut self, edge: EdgeMatch) -> Self {
        self.edges.push(edge);
        self
    }

    /// Returns the matched cell for a motif position.
    pub fn cell(&self, label: NodeLabel) -> Option<&CellRef> {
        self.nodes.get(&label)
    }

    /// Returns the motif positions present in this match, in label order.
    pub fn labels(&self) -> impl Iterator<Item = NodeLabel> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns the matched cell IDs in label order.
    pub fn cell_ids(&self) -> Vec<u64> {
        self.nodes.values().map(|c| c.id).collect()
    }

    /// Returns the matched cell IDs as a comma-separated list, the form
    /// expected by downstream tools and clipboard export.
    pub fn id_list(&self) -> String {
        self.nodes
            .values()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order() {
        assert!(NodeLabel::A < NodeLabel::B);
        assert!(NodeLabel::B < NodeLabel::C);
        assert_eq!(NodeLabel::ALL[2].as_str(), "C");
    }

    #[test]
    fn test_label_round_trip() {
        for label in NodeLabel::ALL {
            assert_eq!(label.as_str().parse::<NodeLabel>(), Ok(label));
        }
        assert!("D".parse::<NodeLabel>().is_err());
        assert!("a".parse::<NodeLabel>().is_err());
    }

    #[test]
    fn test_deserialize_string_and_numeric_ids() {
        let json = r#"{
            "nodes": {
                "B": {"id": "720575940623725972", "name": "KC.b"},
                "A": {"id": 7, "name": "PN.1"}
            },
            "edges": [
                {"from": "A", "to": "B", "region": "AMMC_R", "syn_count": 5, "nt_type": "GABA"}
            ]
        }"#;
        let m: MotifMatch = serde_json::from_str(json).unwrap();
        assert_eq!(m.cell(NodeLabel::A).unwrap().id, 7);
        assert_eq!(m.cell(NodeLabel::B).unwrap().id, 720575940623725972);
        assert_eq!(m.edges[0].from, NodeLabel::A);
        assert_eq!(m.edges[0].region.as_deref(), Some("AMMC_R"));
        assert_eq!(m.edges[0].syn_count, 5);
    }

    #[test]
    fn test_edges_default_to_empty() {
        let json = r#"{"nodes": {"A": {"id": "1", "name": "solo"}}}"#;
        let m: MotifMatch = serde_json::from_str(json).unwrap();
        assert!(m.edges.is_empty());
        assert_eq!(m.cell_ids(), vec![1]);
    }

    #[test]
    fn test_serialize_id_as_string() {
        let m = MotifMatch::new().with_cell(NodeLabel::A, CellRef::new(720575940623725972, "x"));
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains(r#""id":"720575940623725972""#));
    }

    #[test]
    fn test_invalid_string_id_is_an_error() {
        let json = r#"{"nodes": {"A": {"id": "not-a-number", "name": "x"}}}"#;
        assert!(serde_json::from_str::<MotifMatch>(json).is_err());
    }

    #[test]
    fn test_iteration_is_label_ordered() {
        let m = MotifMatch::new()
            .with_cell(NodeLabel::C, CellRef::new(3, "c"))
            .with_cell(NodeLabel::A, CellRef::new(1, "a"))
            .with_cell(NodeLabel::B, CellRef::new(2, "b"));
        let labels: Vec<NodeLabel> = m.labels().collect();
        assert_eq!(labels, vec![NodeLabel::A, NodeLabel::B, NodeLabel::C]);
        assert_eq!(m.id_list(), "1,2,3");
    }
}
