//! Core data types and structures
//!
//! This module contains the result types shared by executors and report
//! generators, separated from the algorithms that produce them.

pub mod types;

pub use types::*;
