//! Macroplan Library
//!
//! Nutrition calculator for personal-trainer client plans, with an MCP
//! tool layer on top.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
