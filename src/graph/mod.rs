pub mod edge;
pub mod ids;
pub mod layout;
pub mod node;

pub use edge::*;
pub use ids::*;
pub use node::*;

use serde::{Deserialize, Serialize};

/// The node/edge pair produced by import and consumed by export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}
