use crate::definition::{ChoiceRule, Definition, State, StateKind};
use crate::error::ExportError;
use crate::graph::{FlowEdge, FlowNode};
use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use itertools::Itertools;

/// Top-level `Comment` stamped onto every derived definition.
pub const GENERATED_COMMENT: &str = "State machine generated from Flow Builder";

/// The state name a node exports under. Derived purely from the node id so
/// repeated exports of an unmodified graph are idempotent.
pub fn state_name(node_id: &str) -> String {
    format!("State_{}", node_id)
}

/// Serializes a node/edge graph into an ASL definition.
///
/// The start state is the first node in `nodes` order without an incoming
/// edge. When every node has one (the editor produced a ring), the first
/// node wins outright; that `StartAt` may not be a meaningful entry point,
/// and no warning is raised.
///
/// Edges whose source or target does not resolve to a supplied node are
/// ignored. For a plain node with several outgoing edges the last one wins;
/// fan-out must be modeled with a Choice node, whose outgoing edges become
/// `Choices` entries (the edge labelled `"Default"` becomes the `Default`
/// fallback). Disconnected or unreachable nodes convert like any other.
///
/// Fails only on an empty `nodes` sequence: there is nothing to export, and
/// an empty-but-valid definition would let the caller deploy a machine with
/// no states.
pub fn graph_to_definition(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
) -> Result<Definition, ExportError> {
    if nodes.is_empty() {
        return Err(ExportError::EmptyGraph);
    }

    let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let resolved: Vec<&FlowEdge> = edges
        .iter()
        .filter(|e| known.contains(e.source.as_str()) && known.contains(e.target.as_str()))
        .collect();

    let mut has_incoming: AHashSet<&str> = AHashSet::new();
    let mut outgoing: AHashMap<&str, Vec<&FlowEdge>> = AHashMap::new();
    for &edge in &resolved {
        has_incoming.insert(edge.target.as_str());
        outgoing.entry(edge.source.as_str()).or_default().push(edge);
    }

    let start = nodes
        .iter()
        .find_or_first(|n| !has_incoming.contains(n.id.as_str()))
        .ok_or(ExportError::EmptyGraph)?;

    let mut states: IndexMap<String, State> = IndexMap::with_capacity(nodes.len());
    for node in nodes {
        let mut state = State::new(StateKind::from_tag(&node.data.state_type));
        if !node.data.label.is_empty() {
            state.comment = Some(node.data.label.clone());
        }
        state.resource = node.data.resource.clone();
        state.parameters = node.data.parameters.clone();
        state.result = node.data.result.clone();
        // Optimistic default; cleared again below for nodes that transition.
        state.end = Some(true);
        states.insert(state_name(&node.id), state);
    }

    for node in nodes {
        let Some(out) = outgoing.get(node.id.as_str()) else {
            continue;
        };
        let Some(state) = states.get_mut(&state_name(&node.id)) else {
            continue;
        };
        if state.kind.is_choice() {
            let mut rules = Vec::new();
            for edge in out {
                if edge.is_default_branch() {
                    state.default = Some(state_name(&edge.target));
                } else {
                    rules.push(ChoiceRule {
                        variable: edge.label.clone(),
                        next: Some(state_name(&edge.target)),
                        extra: serde_json::Map::new(),
                    });
                }
            }
            if !rules.is_empty() {
                state.choices = Some(rules);
            }
            state.end = None;
        } else if let Some(last) = out.last() {
            state.next = Some(state_name(&last.target));
            state.end = None;
        }
    }

    // Correctness pass: a node without outgoing edges is terminal no matter
    // what the edge loop left behind.
    for node in nodes {
        if outgoing.contains_key(node.id.as_str()) {
            continue;
        }
        if let Some(state) = states.get_mut(&state_name(&node.id)) {
            state.next = None;
            state.end = Some(true);
        }
    }

    Ok(Definition {
        comment: Some(GENERATED_COMMENT.to_string()),
        start_at: Some(state_name(&start.id)),
        states,
    })
}
