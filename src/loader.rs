//! Graph file parsing
//!
//! Graph files are TOML or JSON documents sharing one schema. The syntax is
//! chosen by file extension.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::discovery::{GRAPH_FILE_SUFFIXES, PLAIN_SUFFIXES};
use crate::error::{GraphFileParseError, GraphFileSyntax, WayfinderError};
use crate::graph::{Graph, Orientation};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub name: Option<String>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

/// A parsed graph file, ready for traversal and detection
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub name: String,
    pub path: PathBuf,
    pub graph: Graph<String>,
}

impl GraphFile {
    pub fn parse_file(path: &Path) -> Result<Self, WayfinderError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WayfinderError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(path, content)
    }

    fn parse_str(path: &Path, content: String) -> Result<Self, WayfinderError> {
        let syntax = syntax_for(path);
        let parsed = match syntax {
            GraphFileSyntax::Toml => toml::from_str::<GraphFile>(&content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (span, e.message().to_string())
            }),
            GraphFileSyntax::Json => serde_json::from_str::<GraphFile>(&content).map_err(|e| {
                let span = line_column_offset(&content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 0));
                (span, e.to_string())
            }),
        };

        parsed.map_err(|(span, reason)| {
            WayfinderError::GraphFileParseError(Box::new(GraphFileParseError {
                file: path.display().to_string(),
                syntax,
                source_code: NamedSource::new(path.display().to_string(), content.clone()),
                span,
                reason,
            }))
        })
    }

    /// Build the graph: declared nodes first, then edge endpoints in edge
    /// order
    pub fn into_graph(self, path: &Path) -> Result<LoadedGraph, WayfinderError> {
        let empty_node = self
            .nodes
            .iter()
            .chain(self.edges.iter().flat_map(|(from, to)| [from, to]))
            .any(|node| node.trim().is_empty());
        if empty_node {
            return Err(WayfinderError::GraphError {
                message: format!("'{}' contains an empty node name", path.display()),
            });
        }

        let name = self.name.unwrap_or_else(|| graph_name_from_path(path));

        let mut graph = Graph::new(self.orientation);
        for node in self.nodes {
            graph.add_node(node);
        }
        for (from, to) in self.edges {
            graph.add_edge(from, to);
        }

        Ok(LoadedGraph {
            name,
            path: path.to_path_buf(),
            graph,
        })
    }
}

/// Read, parse and build the graph stored at `path`
pub fn load_graph(path: &Path) -> Result<LoadedGraph, WayfinderError> {
    GraphFile::parse_file(path)?.into_graph(path)
}

fn syntax_for(path: &Path) -> GraphFileSyntax {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFileSyntax::Json,
        _ => GraphFileSyntax::Toml,
    }
}

/// File name without the graph suffix, `deps.graph.toml` becomes `deps`
fn graph_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let stem = GRAPH_FILE_SUFFIXES
        .iter()
        .chain(PLAIN_SUFFIXES)
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .map(str::to_string);

    stem.unwrap_or(file_name)
}

// serde_json reports 1-based lines and columns
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_toml_graph() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "build.graph.toml",
            r#"
nodes = ["lonely"]
edges = [["app", "core"], ["app", "util"], ["core", "util"]]
"#,
        );

        let loaded = load_graph(&path).unwrap();
        assert_eq!(loaded.name, "build");
        assert_eq!(loaded.graph.orientation(), Orientation::Directed);
        assert_eq!(
            loaded.graph.nodes().cloned().collect::<Vec<_>>(),
            vec!["lonely", "app", "core", "util"]
        );
        assert_eq!(loaded.graph.edge_count(), 3);
    }

    #[test]
    fn test_load_json_undirected_graph() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "roads.graph.json",
            r#"{
  "name": "roads",
  "orientation": "undirected",
  "edges": [["a", "b"], ["b", "c"]]
}"#,
        );

        let loaded = load_graph(&path).unwrap();
        assert_eq!(loaded.name, "roads");
        assert_eq!(
            loaded
                .graph
                .neighbors(&"b".to_string())
                .unwrap()
                .cloned()
                .collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.graph.toml", "edges = [[\"a\", \"b\"]\n");

        match load_graph(&path) {
            Err(WayfinderError::GraphFileParseError(err)) => {
                assert_eq!(err.syntax, GraphFileSyntax::Toml);
                assert!(err.span.is_some());
            }
            other => panic!("Expected GraphFileParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.graph.json", "{\n  \"edges\": [[\"a\", ]]\n}");

        match load_graph(&path) {
            Err(WayfinderError::GraphFileParseError(err)) => {
                assert_eq!(err.syntax, GraphFileSyntax::Json);
                assert!(err.span.is_some());
            }
            other => panic!("Expected GraphFileParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "typo.graph.toml", "edge = [[\"a\", \"b\"]]\n");

        assert!(matches!(
            load_graph(&path),
            Err(WayfinderError::GraphFileParseError(_))
        ));
    }

    #[test]
    fn test_empty_node_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "blank.graph.toml", "edges = [[\"a\", \" \"]]\n");

        assert!(matches!(
            load_graph(&path),
            Err(WayfinderError::GraphError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_graph(Path::new("/nonexistent/missing.graph.toml"));
        assert!(matches!(result, Err(WayfinderError::FileReadError { .. })));
    }

    #[test]
    fn test_graph_name_from_path() {
        assert_eq!(graph_name_from_path(Path::new("x/deps.graph.toml")), "deps");
        assert_eq!(graph_name_from_path(Path::new("x/deps.json")), "deps");
        assert_eq!(graph_name_from_path(Path::new("x/.graph.toml")), ".graph.toml");
    }

    #[test]
    fn test_line_column_offset() {
        let content = "ab\ncd\n";
        assert_eq!(line_column_offset(content, 1, 1), Some(0));
        assert_eq!(line_column_offset(content, 2, 2), Some(4));
        assert_eq!(line_column_offset(content, 0, 0), None);
    }
}
