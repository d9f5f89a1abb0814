//! Tests for the graph -> definition direction.
mod common;
use common::*;
use henkan::prelude::*;

#[test]
fn test_two_step_graph_exports_expected_definition() {
    let (nodes, edges) = create_two_step_graph();
    let definition = graph_to_definition(&nodes, &edges).expect("export must succeed");

    assert_eq!(definition.start_at.as_deref(), Some("State_1"));
    assert_eq!(definition.comment.as_deref(), Some(GENERATED_COMMENT));
    assert_eq!(definition.states.len(), 2);

    let first = &definition.states["State_1"];
    assert_eq!(first.kind, StateKind::Pass);
    assert_eq!(first.next.as_deref(), Some("State_2"));
    assert_eq!(first.end, None);

    let second = &definition.states["State_2"];
    assert_eq!(second.kind, StateKind::Pass);
    assert_eq!(second.next, None);
    assert!(second.is_terminal());
}

#[test]
fn test_export_is_idempotent_for_unmodified_graph() {
    let (nodes, edges) = create_two_step_graph();
    let first = graph_to_definition(&nodes, &edges).unwrap();
    let second = graph_to_definition(&nodes, &edges).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_graph_is_refused() {
    let result = graph_to_definition(&[], &[]);
    assert_eq!(result, Err(ExportError::EmptyGraph));
}

#[test]
fn test_dangling_edges_are_ignored() {
    let (nodes, mut edges) = create_two_step_graph();
    edges.push(FlowEdge::new("e2", "2", "ghost"));
    edges.push(FlowEdge::new("e3", "ghost", "1"));

    let definition = graph_to_definition(&nodes, &edges).unwrap();

    // The ghost edges must affect neither the start choice nor terminality.
    assert_eq!(definition.start_at.as_deref(), Some("State_1"));
    assert_eq!(definition.states["State_2"].end, Some(true));
    assert_eq!(definition.states["State_2"].next, None);
    assert_next_end_exclusive(&definition);
}

#[test]
fn test_cycle_falls_back_to_first_node_as_start() {
    let nodes = vec![
        FlowNode::new("a", "A", "Pass"),
        FlowNode::new("b", "B", "Pass"),
    ];
    let edges = vec![FlowEdge::new("e1", "a", "b"), FlowEdge::new("e2", "b", "a")];

    let definition = graph_to_definition(&nodes, &edges).unwrap();
    assert_eq!(definition.start_at.as_deref(), Some("State_a"));
    // Every state transitions; none is terminal.
    assert_eq!(definition.states["State_a"].next.as_deref(), Some("State_b"));
    assert_eq!(definition.states["State_b"].next.as_deref(), Some("State_a"));
}

#[test]
fn test_unknown_state_type_defaults_to_pass() {
    let nodes = vec![FlowNode::new("1", "Mystery", "Teleport")];
    let definition = graph_to_definition(&nodes, &[]).unwrap();
    assert_eq!(definition.states["State_1"].kind, StateKind::Pass);
    assert_eq!(definition.states["State_1"].end, Some(true));
}

#[test]
fn test_last_edge_wins_for_plain_fan_out() {
    let nodes = vec![
        FlowNode::new("1", "A", "Pass"),
        FlowNode::new("2", "B", "Pass"),
        FlowNode::new("3", "C", "Pass"),
    ];
    let edges = vec![FlowEdge::new("e1", "1", "2"), FlowEdge::new("e2", "1", "3")];

    let definition = graph_to_definition(&nodes, &edges).unwrap();
    assert_eq!(definition.states["State_1"].next.as_deref(), Some("State_3"));
    assert_next_end_exclusive(&definition);
}

#[test]
fn test_choice_node_exports_choices_and_default() {
    let nodes = vec![
        FlowNode::new("c", "Route order", "Choice"),
        FlowNode::new("x", "Express", "Task"),
        FlowNode::new("y", "Standard", "Task"),
        FlowNode::new("z", "Hold", "Pass"),
    ];
    let edges = vec![
        FlowEdge::new("e1", "c", "x").with_label("$.priority"),
        FlowEdge::new("e2", "c", "y").with_label("$.weight"),
        FlowEdge::new("e3", "c", "z").with_label(DEFAULT_BRANCH_LABEL),
    ];

    let definition = graph_to_definition(&nodes, &edges).unwrap();
    let choice = &definition.states["State_c"];
    assert_eq!(choice.kind, StateKind::Choice);
    assert_eq!(choice.next, None);
    assert_eq!(choice.end, None);
    assert_eq!(choice.default.as_deref(), Some("State_z"));

    let rules = choice.choices.as_ref().expect("choices must be emitted");
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].variable.as_deref(), Some("$.priority"));
    assert_eq!(rules[0].next.as_deref(), Some("State_x"));
    assert_eq!(rules[1].variable.as_deref(), Some("$.weight"));
    assert_eq!(rules[1].next.as_deref(), Some("State_y"));
}

#[test]
fn test_choice_node_without_branches_stays_terminal() {
    let nodes = vec![FlowNode::new("c", "Dead end", "Choice")];
    let definition = graph_to_definition(&nodes, &[]).unwrap();

    let choice = &definition.states["State_c"];
    assert_eq!(choice.choices, None);
    assert_eq!(choice.default, None);
    assert_eq!(choice.end, Some(true));
}

#[test]
fn test_task_fields_are_copied_from_the_data_bag() {
    let mut node = FlowNode::new("1", "Call it", "Task");
    node.data.resource = Some("arn:aws:lambda:eu-central-1:123456789012:function:f".to_string());
    node.data.result = Some(serde_json::json!({"ok": true}));

    let definition = graph_to_definition(&[node], &[]).unwrap();
    let state = &definition.states["State_1"];
    assert_eq!(state.kind, StateKind::Task);
    assert_eq!(
        state.resource.as_deref(),
        Some("arn:aws:lambda:eu-central-1:123456789012:function:f")
    );
    assert_eq!(state.result, Some(serde_json::json!({"ok": true})));
    assert_eq!(state.comment.as_deref(), Some("Call it"));
}

#[test]
fn test_disconnected_components_all_convert() {
    let nodes = vec![
        FlowNode::new("1", "A", "Pass"),
        FlowNode::new("2", "B", "Pass"),
        FlowNode::new("3", "Island", "Wait"),
    ];
    let edges = vec![FlowEdge::new("e1", "1", "2")];

    let definition = graph_to_definition(&nodes, &edges).unwrap();
    assert_eq!(definition.states.len(), 3);
    assert_eq!(definition.states["State_3"].kind, StateKind::Wait);
    assert_eq!(definition.states["State_3"].end, Some(true));
    assert_next_end_exclusive(&definition);
}
