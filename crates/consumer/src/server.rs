//! Listener setup and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::Config;
use crate::error::{Result, ServerError};

/// Listeners bound and ready to serve.
///
/// Binding happens up front so an unavailable public port fails startup before
/// any request is accepted. The admin listener is optional: if its port cannot
/// be bound the service runs without health and metrics endpoints.
pub struct Server {
    listener: TcpListener,
    admin_listener: Option<TcpListener>,
    app: Router,
    admin_app: Router,
}

impl Server {
    /// Binds the public listener, and the admin listener when its port is free.
    pub async fn bind(config: &Config, metrics_handle: PrometheusHandle) -> Result<Self> {
        let listener = bind_listener(&config.addr()).await?;

        let admin_addr = config.admin_addr();
        let admin_listener = match bind_listener(&admin_addr).await {
            Ok(admin_listener) => Some(admin_listener),
            Err(e) => {
                tracing::warn!(error = %e, "admin listener disabled");
                None
            }
        };

        Ok(Self {
            listener,
            admin_listener,
            app: crate::create_app(crate::create_state(config)),
            admin_app: crate::create_admin_app(metrics_handle),
        })
    }

    /// Address the public listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    /// Address the admin listener is bound to, if it was bound.
    pub fn admin_local_addr(&self) -> Option<SocketAddr> {
        self.admin_listener
            .as_ref()
            .and_then(|listener| listener.local_addr().ok())
    }

    /// Serves until `shutdown` resolves, then drains open connections.
    ///
    /// Only the public listener decides the outcome. Admin listener failures are
    /// logged and leave `/consumer` serving.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Receivers see `changed()` fail once the sender is dropped.
        let (shutdown_tx, mut shutdown_rx) = watch::channel(());

        let forward_shutdown = tokio::spawn(async move {
            shutdown.await;
            drop(shutdown_tx);
        });

        let admin_task = self.admin_listener.map(|admin_listener| {
            let mut admin_shutdown_rx = shutdown_rx.clone();
            let admin = axum::serve(admin_listener, self.admin_app).with_graceful_shutdown(
                async move {
                    let _ = admin_shutdown_rx.changed().await;
                },
            );
            tokio::spawn(async move {
                if let Err(e) = admin.await {
                    tracing::error!(error = %e, "admin listener failed");
                }
            })
        });

        let result = axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
            .map_err(ServerError::Serve);

        // Dropping the forwarder drops the sender, which stops the admin listener.
        forward_shutdown.abort();
        if let Some(admin_task) = admin_task {
            if let Err(e) = admin_task.await {
                tracing::error!(error = %e, "admin listener task panicked");
            }
        }

        result
    }
}

async fn bind_listener(addr: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!(%addr, "listener bound");
    Ok(listener)
}
