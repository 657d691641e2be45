use std::sync::Arc;

use clap::Parser;
use favorite_colors_mcp::{
    build_app,
    config::{Cli, Config, Transport},
    http, logging,
    mcp::server::McpServer,
    stdio, AppState,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_cli(Cli::parse())
        .inspect_err(|err| error!(error = %err, "invalid configuration"))?;
    let server = Arc::new(McpServer::new());

    match config.transport {
        Transport::Stdio => {
            stdio::run(&server)
                .await
                .inspect_err(|err| error!(error = %err, "error reading input"))?;
        }
        Transport::Http | Transport::Https => {
            let bind_socket = config.bind_socket()?;
            let mcp_url = config.mcp_url();
            let state = AppState::new(server.clone(), config.scheme(), mcp_url.clone());
            let app = build_app(state);

            info!(
                bind_addr = %config.bind_addr,
                bind_port = config.bind_port,
                transport = config.scheme(),
                mcp_url = %mcp_url,
                tools = ?server.registry().names(),
                "server starting"
            );

            http::serve(bind_socket, config.tls.as_ref(), app)
                .await
                .inspect_err(|err| error!(error = %err, "server failed"))?;

            info!("server shutdown gracefully");
        }
    }

    Ok(())
}
