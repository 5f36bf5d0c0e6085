//! # Configuration Module
//!
//! This module provides configuration structures for all wayfinder commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **WalkConfig**: Configuration for the `walk` command
//! - **RouteConfig**: Configuration for the `route` command
//! - **InspectConfig**: Configuration for the `inspect` command to detect
//!   cycles in graph files
//! - **RenderOptions**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use wayfinder::cli::{GraphFormat, OutputFormat};
//! use wayfinder::common::ConfigBuilder;
//! use wayfinder::config::{InspectConfig, RenderOptions};
//!
//! # fn main() -> Result<(), wayfinder::error::WayfinderError> {
//! let inspect = InspectConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()?;
//! assert!(inspect.error_on_cycles);
//!
//! // Builders report the first field left unset
//! let incomplete = RenderOptions::builder()
//!     .with_format(GraphFormat::Dot)
//!     .build();
//! assert!(incomplete.is_err());
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod render;
pub mod route;
pub mod walk;

pub use inspect::InspectConfig;
pub use render::RenderOptions;
pub use route::RouteConfig;
pub use walk::WalkConfig;
