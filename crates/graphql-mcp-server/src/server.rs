use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use bon::bon;
use reqwest::header::HeaderMap;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::{ServiceExt as _, transport::stdio};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info};
use url::Url;

use crate::errors::ServerError;
use crate::graphql::GraphQLClient;
use crate::headers::HeaderStore;

mod running;

use running::Running;

/// An MCP server exposing one GraphQL endpoint
pub struct Server {
    transport: Transport,
    endpoint: Url,
    headers: HeaderMap,
}

#[derive(Debug, Clone, Deserialize, Default, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transport {
    /// Use standard IO for server <> client communication
    #[default]
    Stdio,

    /// Host the MCP server on the configuration, using streamable HTTP messages.
    StreamableHttp {
        /// The IP address to bind to
        #[serde(default = "Transport::default_address")]
        address: IpAddr,

        /// The port to bind to
        #[serde(default = "Transport::default_port")]
        port: u16,

        /// Enable stateful mode for session management
        #[serde(default = "Transport::default_stateful_mode")]
        stateful_mode: bool,
    },
}

impl Transport {
    fn default_address() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    fn default_port() -> u16 {
        8000
    }

    fn default_stateful_mode() -> bool {
        true
    }
}

#[bon]
impl Server {
    #[builder]
    pub fn new(transport: Transport, endpoint: Url, headers: HeaderMap) -> Self {
        Self {
            transport,
            endpoint,
            headers,
        }
    }

    /// Serve until the client disconnects (stdio) or a shutdown signal arrives (HTTP)
    pub async fn start(self) -> Result<(), ServerError> {
        let running = Running::new(
            GraphQLClient::new(self.endpoint),
            HeaderStore::new(self.headers),
        );

        match self.transport {
            Transport::StreamableHttp {
                address,
                port,
                stateful_mode,
            } => {
                info!(port = ?port, address = ?address, "Starting MCP server in Streamable HTTP mode");
                let listen_address = SocketAddr::new(address, port);
                let tcp_listener = tokio::net::TcpListener::bind(listen_address).await?;
                axum::serve(tcp_listener, router(running, stateful_mode))
                    .with_graceful_shutdown(shutdown_signal())
                    .await?;
            }
            Transport::Stdio => {
                info!("Starting MCP server in stdio mode");
                let service = running
                    .serve(stdio())
                    .await
                    .inspect_err(|e| {
                        error!("serving error: {:?}", e);
                    })
                    .map_err(Box::new)?;
                service.waiting().await.map_err(ServerError::StartupError)?;
            }
        }
        Ok(())
    }
}

/// The HTTP router serving MCP messages under `/mcp`
fn router(running: Running, stateful_mode: bool) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(running.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            stateful_mode,
            ..Default::default()
        },
    );
    axum::Router::new().nest_service("/mcp", service)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down MCP server");
}
