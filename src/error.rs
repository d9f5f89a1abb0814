use thiserror::Error;

/// Errors that can occur when serializing a graph into a definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("The graph contains no nodes, so there is nothing to export")]
    EmptyGraph,
}

/// Errors that can occur when turning a definition into a graph.
///
/// Both structural variants are preconditions of ASL interoperability: a
/// definition without states or without a start state cannot describe a
/// runnable machine, so import refuses it outright instead of producing an
/// empty graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Failed to parse definition JSON: {0}")]
    JsonParseError(String),

    #[error("The definition has no 'States' entries")]
    EmptyStates,

    #[error("The definition is missing the required 'StartAt' field")]
    MissingStartAt,
}
