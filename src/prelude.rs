//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the henkan
//! crate. Import this module to get the core conversion surface without
//! pulling in each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use henkan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let text = std::fs::read_to_string("path/to/definition.json")?;
//! let definition = parse_definition(&text)?;
//!
//! let mut ids = IdGenerator::new();
//! let graph = definition_to_graph(&definition, &mut ids)?;
//! println!("Imported {} states", graph.nodes.len());
//! # Ok(())
//! # }
//! ```

// Conversion core
pub use crate::convert::{GENERATED_COMMENT, definition_to_graph, graph_to_definition, state_name};

// Graph-side model
pub use crate::graph::{
    DEFAULT_BRANCH_LABEL, FlowEdge, FlowGraph, FlowNode, IdGenerator, NodeData, Position,
};

// Definition-side model
pub use crate::definition::{ChoiceRule, Definition, State, StateKind, parse_definition};

// Editing session
pub use crate::session::FlowSession;

// Error types
pub use crate::error::{ExportError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
