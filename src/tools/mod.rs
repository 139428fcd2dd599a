//! Macroplan tool implementations
//!
//! Input parsing, validation and response shaping for each MCP tool.

pub mod body;
pub mod plans;
pub mod status;
pub mod templates;
