use serde::{Deserialize, Serialize};

/// The state type tag, the `"Type"` field of every ASL state.
///
/// The eight known kinds are modeled directly; anything else deserializes
/// into `Other` and is carried through opaquely so that definitions written
/// against a newer revision of the language still import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateKind {
    Pass,
    Task,
    Choice,
    Wait,
    Succeed,
    Fail,
    Parallel,
    Map,
    #[serde(untagged)]
    Other(String),
}

impl StateKind {
    /// Resolves a node's claimed state kind. Unknown or empty tags become
    /// `Pass`, never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Pass" => StateKind::Pass,
            "Task" => StateKind::Task,
            "Choice" => StateKind::Choice,
            "Wait" => StateKind::Wait,
            "Succeed" => StateKind::Succeed,
            "Fail" => StateKind::Fail,
            "Parallel" => StateKind::Parallel,
            "Map" => StateKind::Map,
            _ => StateKind::Pass,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StateKind::Pass => "Pass",
            StateKind::Task => "Task",
            StateKind::Choice => "Choice",
            StateKind::Wait => "Wait",
            StateKind::Succeed => "Succeed",
            StateKind::Fail => "Fail",
            StateKind::Parallel => "Parallel",
            StateKind::Map => "Map",
            StateKind::Other(tag) => tag,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, StateKind::Choice)
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One branch of a Choice state.
///
/// Only the discriminant (`Variable`) and the target are modeled; the
/// comparison operators (`NumericEquals`, `StringLessThan`, ...) live in the
/// flattened remainder and round-trip untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChoiceRule {
    #[serde(rename = "Variable", skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(rename = "Next", skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single named state of a definition.
///
/// Fields the graph model understands are typed; everything else a state may
/// carry (`TimeoutSeconds`, `Retry`, `ItemProcessor`, ...) is collected into
/// `extra` and re-emitted verbatim on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "Type")]
    pub kind: StateKind,
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "Next", skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub end: Option<bool>,
    #[serde(rename = "Resource", skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(rename = "Parameters", skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(rename = "Choices", skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceRule>>,
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl State {
    /// A bare state of the given kind with every optional field unset.
    pub fn new(kind: StateKind) -> Self {
        Self {
            kind,
            comment: None,
            next: None,
            end: None,
            resource: None,
            parameters: None,
            result: None,
            choices: None,
            default: None,
            extra: serde_json::Map::new(),
        }
    }

    /// True when the state ends the machine rather than transitioning.
    pub fn is_terminal(&self) -> bool {
        self.end == Some(true)
    }
}
