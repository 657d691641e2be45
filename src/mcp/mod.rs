//! Model Context Protocol (MCP) server handling and JSON-RPC implementations
//!
//! Provides the wire envelope, the tool registry and the method/tool routing.

pub mod registry;
pub mod rpc;
pub mod server;
