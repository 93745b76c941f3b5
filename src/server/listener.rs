use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::FileRouter;

/// Binds the configured address and serves it until the process ends.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    let router = Arc::new(FileRouter::new(cfg.doc_root.clone()));
    serve(listener, router).await;
    Ok(())
}

/// Accepts connections forever, handing each to its own task.
///
/// Accept errors are logged and the loop carries on.
pub async fn serve(listener: TcpListener, router: Arc<FileRouter>) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
