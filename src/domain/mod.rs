//! Favorite color domain
//!
//! Provides the shared color store and the tools that operate on it over MCP.

pub mod colors;
pub mod tools;
