use crate::convert::{definition_to_graph, graph_to_definition};
use crate::definition::{Definition, parse_definition};
use crate::error::{ExportError, ImportError};
use crate::graph::{FlowEdge, FlowGraph, FlowNode, IdGenerator};

/// One editing session of the flow builder.
///
/// The session owns the graph, the id generator, and — after an import — the
/// original definition. Export follows two explicitly distinct strategies:
///
/// 1. **Re-emit**: while the graph is an untouched import, `export` returns
///    the retained original verbatim, so fields the graph model cannot
///    represent survive the round trip.
/// 2. **Derive**: after any structural edit (add node, connect, remove node)
///    the retained definition is discarded and `export` rebuilds one from
///    the graph. Keeping the stale original around instead would make edits
///    silently vanish from the exported output.
#[derive(Debug, Default)]
pub struct FlowSession {
    graph: FlowGraph,
    retained: Option<Definition>,
    ids: IdGenerator,
}

impl FlowSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// True while `export` would re-emit a retained original definition.
    pub fn has_retained_definition(&self) -> bool {
        self.retained.is_some()
    }

    /// Replaces the graph with the imported definition and retains the
    /// original for lossless re-export.
    pub fn import(&mut self, definition: Definition) -> Result<(), ImportError> {
        self.graph = definition_to_graph(&definition, &mut self.ids)?;
        self.retained = Some(definition);
        Ok(())
    }

    /// Parses raw definition text (the import surface) and imports it.
    pub fn import_json(&mut self, text: &str) -> Result<(), ImportError> {
        self.import(parse_definition(text)?)
    }

    /// Adds a node with the given label and claimed state kind, returning
    /// its id. Structural edit: drops any retained definition.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        state_type: impl Into<String>,
    ) -> String {
        let id = self.ids.node_id();
        self.graph.nodes.push(FlowNode::new(id.clone(), label, state_type));
        self.retained = None;
        id
    }

    /// Connects two nodes, returning the new edge's id. Endpoints are not
    /// validated; export ignores edges it cannot resolve. Structural edit:
    /// drops any retained definition.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        let id = self.ids.edge_id();
        self.graph.edges.push(FlowEdge::new(id.clone(), source, target));
        self.retained = None;
        id
    }

    /// Removes a node and every edge touching it. Returns whether a node was
    /// removed. Structural edit: drops any retained definition.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.graph.nodes.len();
        self.graph.nodes.retain(|n| n.id != id);
        self.graph.edges.retain(|e| e.source != id && e.target != id);
        self.retained = None;
        self.graph.nodes.len() != before
    }

    /// Produces the definition for the export/preview/deploy surfaces,
    /// re-emitting the retained original when the graph is an unedited
    /// import and deriving from the graph otherwise.
    pub fn export(&self) -> Result<Definition, ExportError> {
        if let Some(retained) = &self.retained {
            return Ok(retained.clone());
        }
        graph_to_definition(&self.graph.nodes, &self.graph.edges)
    }

    /// Pretty-printed JSON for the preview surface.
    pub fn export_json(&self) -> Result<String, ExportError> {
        self.export().map(|d| d.to_json_pretty())
    }
}
