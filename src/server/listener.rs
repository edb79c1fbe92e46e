use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::pool::SharedPool;

/// OS accept backlog. The only queueing this server has.
const BACKLOG: u32 = 5;

/// Binds the listen socket and serves until the shutdown signal flips.
///
/// Bind and listen failures propagate to the caller; nothing downstream
/// of a successful bind ends the loop except shutdown.
pub async fn run(
    cfg: Config,
    pool: SharedPool,
    shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let listener = bind(&cfg)?;
    info!("Listening on {}", cfg.listen_addr());

    serve(listener, cfg, pool, shutdown).await
}

/// Binds on all interfaces with address reuse, so a restart does not fail
/// on a lingering socket.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .listen_addr()
        .parse()
        .with_context(|| format!("bad listen address {}", cfg.listen_addr()))?;

    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {}", addr))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accept loop: one connection at a time, handled to completion before
/// the next accept. Connection failures are logged and never end the
/// loop. The listening socket is dropped on every exit path.
pub async fn serve(
    listener: TcpListener,
    cfg: Config,
    pool: SharedPool,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        if cfg.debug_web {
                            debug!("{} connected", peer);
                        }

                        let conn = Connection::new(stream, cfg.clone(), pool.clone());
                        if let Err(e) = conn.run().await {
                            error!("connection error from {}: {}", peer, e);
                        }

                        if cfg.debug_web {
                            debug!("{} disconnected", peer);
                        }
                    }
                    Err(e) => error!("accept failed: {}", e),
                }
            }

            _ = shutdown.changed() => {}
        }
    }

    info!("Listener stopped");
    Ok(())
}
