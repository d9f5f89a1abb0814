/// Sequential id source for nodes and edges created by import.
///
/// The editing session owns one generator for its lifetime and threads it
/// into every `definition_to_graph` call, so id assignment is deterministic
/// and restartable without any process-wide state. Ids are unrelated to
/// anything a state carried in a prior graph: round-tripping through a
/// definition preserves structure, not node identity.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next_node: u64,
    next_edge: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Yields `node-1`, `node-2`, ...
    pub fn node_id(&mut self) -> String {
        self.next_node += 1;
        format!("node-{}", self.next_node)
    }

    /// Yields `edge-1`, `edge-2`, ...
    pub fn edge_id(&mut self) -> String {
        self.next_edge += 1;
        format!("edge-{}", self.next_edge)
    }
}
