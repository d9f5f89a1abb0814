//! # Henkan - Graph ↔ Amazon States Language Conversion Engine
//!
//! **Henkan** converts the node/edge graphs produced by a visual workflow
//! builder into Amazon States Language (ASL) definitions and back again. The
//! two conversions are pure, synchronous functions over plain data: no I/O,
//! no shared state, safe to call from anywhere.
//!
//! ## Core Workflow
//!
//! 1.  **Import**: parse pasted or uploaded JSON with [`definition::parse_definition`],
//!     then lay it out as a graph with [`convert::definition_to_graph`]. Every
//!     node keeps the original state verbatim in its data bag, so nothing the
//!     graph model cannot represent is lost.
//! 2.  **Edit**: the graph-editing surface mutates the node and edge
//!     collections (add, connect, delete).
//! 3.  **Export**: [`convert::graph_to_definition`] serializes the graph back
//!     into a definition for the preview and deploy surfaces.
//!
//! [`session::FlowSession`] ties the three together and decides, per export,
//! whether to re-emit a retained original definition (lossless, unedited
//! import) or derive a fresh one from the graph (after any structural edit).
//!
//! ## Quick Start
//!
//! ```rust
//! use henkan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A two-step graph, as the editing surface would hand it over.
//!     let nodes = vec![
//!         FlowNode::new("1", "Fetch order", "Task"),
//!         FlowNode::new("2", "Archive order", "Pass"),
//!     ];
//!     let edges = vec![FlowEdge::new("e1", "1", "2")];
//!
//!     // Serialize it into an ASL definition.
//!     let definition = graph_to_definition(&nodes, &edges)?;
//!     assert_eq!(definition.start_at.as_deref(), Some("State_1"));
//!     println!("{}", definition.to_json_pretty());
//!
//!     // And turn a definition back into a graph.
//!     let mut ids = IdGenerator::new();
//!     let graph = definition_to_graph(&definition, &mut ids)?;
//!     assert_eq!(graph.nodes.len(), 2);
//!     assert_eq!(graph.edges.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## What the converter does not do
//!
//! Reachability, deploy-time validation and execution belong to the external
//! workflow engine. Dangling edges and transitions to unknown states are
//! skipped, unknown state types fall back to `Pass`, and cycles convert
//! without complaint; the only hard failures are an empty graph on export
//! and a definition without states or `StartAt` on import.

pub mod convert;
pub mod definition;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod session;
