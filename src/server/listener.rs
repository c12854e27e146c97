use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Session;

/// Builds the session (route registrations included) for one accepted
/// connection. Each connection gets its own session; shared state such as an
/// RPC registry is captured in the closure behind an `Arc`.
pub type SessionFactory = Arc<dyn Fn() -> Session + Send + Sync>;

/// The accept loop: owns the listener and the set of live connection tasks.
///
/// The server never interprets payload bytes; it only establishes the
/// connection/session pairing and keeps accepting.
pub struct Server {
    listener: TcpListener,
    config: Config,
    factory: SessionFactory,
}

impl Server {
    /// Binds the configured address. Port 0 picks an ephemeral port,
    /// retrievable through [`Server::local_addr`].
    pub async fn bind(config: Config, factory: SessionFactory) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).await?;
        Ok(Self {
            listener,
            config,
            factory,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the task is cancelled. Each peer gets one
    /// [`Connection`] and one [`Session`], linked for their whole lifetime;
    /// finished connection tasks are reaped as the loop runs and every task
    /// is aborted when the server is dropped.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.listener.local_addr()?);
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (socket, peer) = accepted?;
                    info!("Accepted connection from {}", peer);

                    let session = (self.factory)();
                    let mut connection = Connection::new(socket, &self.config);
                    connections.spawn(async move {
                        if let Err(e) = connection.run(&session).await {
                            tracing::error!("Connection error from {}: {:#}", peer, e);
                        }
                    });
                }
                Some(joined) = connections.join_next(), if !connections.is_empty() => {
                    if let Err(e) = joined {
                        tracing::error!("Connection task failed: {}", e);
                    }
                }
            }
        }
    }
}
