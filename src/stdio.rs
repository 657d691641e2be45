//! stdio transport for the MCP server.
//!
//! - stdin carries newline-delimited JSON-RPC requests
//! - stdout carries exactly one JSON response per processed request line
//! - stderr is used for logging only
//!
//! Blank lines are skipped. A line that does not decode as a request is logged and
//! skipped without a response, unlike the HTTP transport which answers with a parse
//! error envelope.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use crate::mcp::{rpc::JsonRpcRequest, server::McpServer};

/// Serves requests from the process's stdin until EOF.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run(server: &McpServer) -> io::Result<()> {
    info!(
        tools = ?server.registry().names(),
        "favorite colors MCP server starting (stdio transport)"
    );

    serve_lines(server, tokio::io::stdin(), tokio::io::stdout()).await?;

    info!("stdin closed, shutting down");
    Ok(())
}

/// Reads requests line by line from `reader` and writes responses to `writer`.
///
/// Requests are handled strictly in input order.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Malformed input is not an error.
pub async fn serve_lines<R, W>(server: &McpServer, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).split(b'\n');

    while let Some(raw) = lines.next_segment().await? {
        let line = raw.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let request = match JsonRpcRequest::from_slice(line) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "skipping malformed request line");
                continue;
            }
        };

        let response = server.handle_request(request);
        let encoded = match serde_json::to_string(&response) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(error = %err, "failed to encode response");
                continue;
            }
        };

        writer.write_all(encoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::serve_lines;
    use crate::mcp::server::McpServer;

    async fn run_lines(server: &McpServer, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        serve_lines(server, input.as_bytes(), &mut output)
            .await
            .expect("serve lines");

        String::from_utf8(output)
            .expect("utf-8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json response line"))
            .collect()
    }

    #[tokio::test]
    async fn answers_one_line_per_request() {
        let server = McpServer::new();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"add_color","arguments":{"color":"blue"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_colors"}}"#,
            "\n",
        );

        let responses = run_lines(&server, input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        let text = responses[1]["result"]["content"][0]["text"]
            .as_str()
            .expect("text content");
        assert!(text.contains("1. blue"));
    }

    #[tokio::test]
    async fn skips_blank_and_malformed_lines() {
        let server = McpServer::new();
        let input = concat!(
            "\n",
            "   \n",
            "this is not json\n",
            r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#,
            "\r\n",
            "{\"unterminated\": \n",
        );

        let responses = run_lines(&server, input).await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], "a");
        assert!(responses[0]["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn protocol_errors_are_still_answered() {
        let server = McpServer::new();
        let input = "{\"method\":\"not/a/method\"}\n{\"id\":5,\"method\":\"tools/call\",\"params\":{\"name\":\"unknown_tool\"}}";

        let responses = run_lines(&server, input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32601);
        assert!(responses[0].get("id").is_none());
        assert_eq!(responses[1]["error"]["code"], -32601);
        assert_eq!(responses[1]["id"], 5);
    }

    #[tokio::test]
    async fn non_object_envelopes_are_skipped() {
        let server = McpServer::new();
        server.store().add("red");
        let input = concat!(
            r#"["2.0", 7, "tools/call", {"name":"clear_colors"}]"#,
            "\n",
            "42\n",
        );

        let responses = run_lines(&server, input).await;

        assert!(responses.is_empty());
        assert_eq!(server.store().count(), 1);
    }

    #[tokio::test]
    async fn empty_input_produces_no_output() {
        let server = McpServer::new();

        let responses = run_lines(&server, "").await;

        assert!(responses.is_empty());
    }
}
