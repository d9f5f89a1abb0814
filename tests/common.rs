//! Common test utilities for building graphs and definitions.
use henkan::prelude::*;
use serde_json::json;

/// The two-node linear graph: `A (Pass) -> B (Pass)`.
#[allow(dead_code)]
pub fn create_two_step_graph() -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let nodes = vec![
        FlowNode::new("1", "A", "Pass"),
        FlowNode::new("2", "B", "Pass"),
    ];
    let edges = vec![FlowEdge::new("e1", "1", "2")];
    (nodes, edges)
}

/// A linear three-state Pass chain: `First -> Second -> Third`.
#[allow(dead_code)]
pub fn create_linear_definition() -> Definition {
    parse_definition(
        r#"{
            "Comment": "A linear chain",
            "StartAt": "First",
            "States": {
                "First": { "Type": "Pass", "Next": "Second" },
                "Second": { "Type": "Pass", "Next": "Third" },
                "Third": { "Type": "Pass", "End": true }
            }
        }"#,
    )
    .expect("linear fixture must parse")
}

/// A Choice state fanning out to two branches plus a default, with each
/// target present in the state map.
#[allow(dead_code)]
pub fn create_choice_definition() -> Definition {
    parse_definition(
        r#"{
            "StartAt": "Decide",
            "States": {
                "Decide": {
                    "Type": "Choice",
                    "Choices": [
                        { "Variable": "$.size", "NumericGreaterThan": 10, "Next": "Big" },
                        { "Variable": "$.size", "NumericLessThan": 3, "Next": "Small" }
                    ],
                    "Default": "Medium"
                },
                "Big": { "Type": "Succeed" },
                "Small": { "Type": "Succeed" },
                "Medium": { "Type": "Pass", "End": true }
            }
        }"#,
    )
    .expect("choice fixture must parse")
}

/// A Task state carrying fields the graph model has no representation for.
#[allow(dead_code)]
pub fn create_lossy_task_definition() -> Definition {
    parse_definition(
        &json!({
            "Comment": "Hand-written in the console",
            "StartAt": "CallLambda",
            "States": {
                "CallLambda": {
                    "Type": "Task",
                    "Resource": "arn:aws:lambda:eu-central-1:123456789012:function:order",
                    "TimeoutSeconds": 30,
                    "Retry": [{ "ErrorEquals": ["States.Timeout"], "MaxAttempts": 2 }],
                    "End": true
                }
            }
        })
        .to_string(),
    )
    .expect("task fixture must parse")
}

/// Asserts the Next/End invariant for every state of a derived definition:
/// exactly one of the two is set, unless the state is a Choice that fans out
/// through `Choices`/`Default`.
#[allow(dead_code)]
pub fn assert_next_end_exclusive(definition: &Definition) {
    for (name, state) in &definition.states {
        if state.kind.is_choice() && (state.choices.is_some() || state.default.is_some()) {
            assert!(
                state.next.is_none(),
                "choice state '{}' must not carry Next",
                name
            );
            continue;
        }
        let has_next = state.next.is_some();
        let has_end = state.end == Some(true);
        assert!(
            has_next != has_end,
            "state '{}' must have exactly one of Next/End, got next={:?} end={:?}",
            name,
            state.next,
            state.end
        );
    }
}
