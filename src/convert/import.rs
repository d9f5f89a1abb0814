use crate::definition::Definition;
use crate::error::ImportError;
use crate::graph::layout::grid_position;
use crate::graph::node::default_node_type;
use crate::graph::{DEFAULT_BRANCH_LABEL, FlowEdge, FlowGraph, FlowNode, IdGenerator, NodeData};
use ahash::AHashMap;

/// Deserializes an ASL definition into a node/edge graph.
///
/// Node ids come from the caller-owned `ids` generator, not from anything
/// the definition carried: round-tripping preserves structure, never node
/// identity. Each node keeps the original state name and the full original
/// state verbatim in its data bag, so a caller that has not edited the graph
/// can re-emit the definition losslessly instead of re-deriving it.
///
/// Transitions whose target names no state in the map are skipped silently;
/// a partially edited definition still imports as a best-effort graph. The
/// only failures are structural: no states at all, or no `StartAt`.
pub fn definition_to_graph(
    definition: &Definition,
    ids: &mut IdGenerator,
) -> Result<FlowGraph, ImportError> {
    if definition.states.is_empty() {
        return Err(ImportError::EmptyStates);
    }
    if definition.start_at.is_none() {
        return Err(ImportError::MissingStartAt);
    }

    let count = definition.states.len();
    let mut nodes = Vec::with_capacity(count);
    let mut name_to_id: AHashMap<&str, String> = AHashMap::with_capacity(count);

    for (index, (name, state)) in definition.states.iter().enumerate() {
        let id = ids.node_id();
        name_to_id.insert(name.as_str(), id.clone());
        nodes.push(FlowNode {
            id,
            node_type: default_node_type(),
            position: grid_position(index, count),
            data: NodeData {
                label: state.comment.clone().unwrap_or_else(|| name.clone()),
                state_type: state.kind.as_str().to_string(),
                resource: state.resource.clone(),
                parameters: state.parameters.clone(),
                result: state.result.clone(),
                state_name: Some(name.clone()),
                definition: Some(state.clone()),
            },
        });
    }

    let mut edges = Vec::new();
    for (name, state) in &definition.states {
        let Some(source_id) = name_to_id.get(name.as_str()) else {
            continue;
        };
        if let Some(next) = &state.next {
            if let Some(target_id) = name_to_id.get(next.as_str()) {
                edges.push(FlowEdge::new(ids.edge_id(), source_id.as_str(), target_id.as_str()));
            }
        }
        if let Some(choices) = &state.choices {
            for (n, rule) in choices.iter().enumerate() {
                let Some(target) = rule.next.as_deref() else {
                    continue;
                };
                let Some(target_id) = name_to_id.get(target) else {
                    continue;
                };
                let label = rule
                    .variable
                    .clone()
                    .unwrap_or_else(|| format!("Choice {}", n + 1));
                edges.push(
                    FlowEdge::new(ids.edge_id(), source_id.as_str(), target_id.as_str())
                        .with_label(label),
                );
            }
        }
        if let Some(default) = &state.default {
            if let Some(target_id) = name_to_id.get(default.as_str()) {
                edges.push(
                    FlowEdge::new(ids.edge_id(), source_id.as_str(), target_id.as_str())
                        .with_label(DEFAULT_BRANCH_LABEL),
                );
            }
        }
    }

    Ok(FlowGraph { nodes, edges })
}
