use super::state::State;
use crate::error::ImportError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A complete ASL definition document.
///
/// `states` is an insertion-ordered map: ASL itself attaches no meaning to
/// state order, but preserving it keeps exported documents diffable and
/// pleasant to review.
///
/// `start_at` is optional in the in-memory model so that a document missing
/// the field can still be parsed and rejected with [`ImportError::MissingStartAt`]
/// instead of failing at the JSON layer with an unhelpful message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "StartAt", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(rename = "States", default)]
    pub states: IndexMap<String, State>,
}

impl Definition {
    /// Pretty-prints the definition for the export/preview surface.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Parses raw definition text from the import surface (user-pasted or
/// uploaded JSON) into a [`Definition`].
pub fn parse_definition(text: &str) -> Result<Definition, ImportError> {
    serde_json::from_str(text).map_err(|e| ImportError::JsonParseError(e.to_string()))
}
