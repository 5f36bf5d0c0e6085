use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Which syntax a graph file was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileSyntax {
    Toml,
    Json,
}

impl std::fmt::Display for GraphFileSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFileSyntax::Toml => write!(f, "TOML"),
            GraphFileSyntax::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {syntax} graph definition in '{file}': {reason}")]
#[diagnostic(
    code(wayfinder::graph_file_parse_error),
    help("Check the syntax near the highlighted position; a graph file needs an `edges` list")
)]
pub struct GraphFileParseError {
    pub file: String,
    pub syntax: GraphFileSyntax,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    pub reason: String,
}

#[derive(Error, Debug, Diagnostic)]
pub enum WayfinderError {
    #[error("Node {node} is not present in the graph")]
    #[diagnostic(
        code(wayfinder::node_not_found),
        help("Traversals must start from a node the graph declares or mentions in an edge")
    )]
    NodeNotFound { node: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(wayfinder::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphFileParseError(Box<GraphFileParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(wayfinder::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(wayfinder::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(wayfinder::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(wayfinder::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(wayfinder::graph_error),
        help("Check the graph definition for unsupported constructs")
    )]
    GraphError { message: String },
}

impl WayfinderError {
    /// Build a `NodeNotFound` error for any debuggable node identifier
    pub fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        WayfinderError::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}
