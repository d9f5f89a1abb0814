use serde::{Deserialize, Serialize};

/// Label given to the fallback branch of a Choice fan-out, both when import
/// decodes a `Default` field and when export looks for the edge to re-encode
/// as one.
pub const DEFAULT_BRANCH_LABEL: &str = "Default";

/// A directed transition between two graph nodes.
///
/// `label` carries a conditional branch's discriminant when the source node
/// is a Choice state; plain sequential transitions leave it unset. Multiple
/// edges may share a source (fan-out) or a target (fan-in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FlowEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// True when this edge encodes a Choice state's `Default` branch.
    pub fn is_default_branch(&self) -> bool {
        self.label.as_deref() == Some(DEFAULT_BRANCH_LABEL)
    }
}
