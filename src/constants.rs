//! Configuration constants for wayfinder
//!
//! This module contains the tunables used throughout the application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the compass animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🧭↑", // North
        "🧭↗", // North-east
        "🧭→", // East
        "🧭↘", // South-east
        "🧭↓", // South
        "🧭↙", // South-west
        "🧭←", // West
        "🧭↖", // North-west
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Graph file discovery configuration
pub mod discovery {
    /// File name endings that mark a graph file during directory walks
    pub const GRAPH_FILE_SUFFIXES: &[&str] = &[".graph.toml", ".graph.json"];

    /// Extensions stripped when deriving a graph name from a file name
    pub const PLAIN_SUFFIXES: &[&str] = &[".toml", ".json"];

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];
}
