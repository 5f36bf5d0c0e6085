//! Small helpers shared by reports and terminal output

pub mod string;
