use crate::definition::State;
use serde::{Deserialize, Serialize};

/// Canvas coordinates of a node. Presentation only; conversion attaches no
/// meaning to positions beyond "every node gets a distinct one".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The data bag carried by every graph node.
///
/// The typed core (`label`, `state_type`, `resource`, `parameters`, `result`)
/// is what the graph editor manipulates. The two trailing fields exist only
/// on nodes produced by import: `state_name` remembers which definition key
/// the node came from, and `definition` holds the original state verbatim so
/// fields the graph model cannot represent are never silently dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(default, alias = "stateType")]
    pub state_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "stateName")]
    pub state_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<State>,
}

/// A single workflow step on the editing canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(default = "default_node_type", rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    pub data: NodeData,
}

pub(crate) fn default_node_type() -> String {
    "stateNode".to_string()
}

impl FlowNode {
    /// A fresh node of the given claimed state kind, as created by the
    /// editing surface. Import builds its nodes directly instead.
    pub fn new(id: impl Into<String>, label: impl Into<String>, state_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: default_node_type(),
            position: Position::default(),
            data: NodeData {
                label: label.into(),
                state_type: state_type.into(),
                ..NodeData::default()
            },
        }
    }
}
