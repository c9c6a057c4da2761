//! Listener wiring for the stub server.

use crate::registry::MockRegistry;
use crate::server::router::route_request;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Stub server: one listener, one shared registry.
pub struct StubServer {
    listener: TcpListener,
    registry: Arc<MockRegistry>,
}

impl StubServer {
    /// Bind the listener up front so the assigned address is available
    /// immediately; tests pass port 0 to get an ephemeral port.
    pub async fn bind(addr: SocketAddr, registry: Arc<MockRegistry>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, registry })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve connections until the process stops.
    ///
    /// Each connection runs in its own task, so a delayed response never
    /// blocks the listener or other in-flight requests.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        info!("stub server listening on http://{}", self.local_addr()?);

        loop {
            let (stream, _) = self.listener.accept().await?;
            let io = TokioIo::new(stream);
            let registry = Arc::clone(&self.registry);

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let registry = Arc::clone(&registry);
                    async move { route_request(req, registry).await }
                });

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("connection error: {}", e);
                }
            });
        }
    }
}
