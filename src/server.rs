use axum::{Extension, Router, routing::get};
use std::{
    io::ErrorKind,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr},
};
use tokio::{net::TcpListener, sync::oneshot};

use crate::{
    api::{self, CallbackState},
    error::AuthError,
};

/// Binds the callback listener on every interface.
///
/// `localhost` in the redirect URI may resolve to `::1` or `127.0.0.1`, so
/// the dual-stack IPv6 wildcard is tried first and the IPv4 wildcard is used
/// where IPv6 is unavailable.
pub async fn bind_callback_listener(port: u16) -> Result<TcpListener, AuthError> {
    let bind_error = |e: std::io::Error| match e.kind() {
        ErrorKind::AddrInUse => AuthError::BindFailed { port, source: e },
        _ => AuthError::IoFailure(e.to_string()),
    };

    match TcpListener::bind(SocketAddr::from((Ipv6Addr::UNSPECIFIED, port))).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => Err(bind_error(e)),
        Err(e) => {
            tracing::debug!(error = %e, "IPv6 wildcard unavailable, binding IPv4 only");
            TcpListener::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
                .await
                .map_err(bind_error)
        }
    }
}

/// Serves the redirect route until `shutdown` fires (or its sender is dropped).
pub async fn start_callback_server(
    listener: TcpListener,
    state: CallbackState,
    shutdown: oneshot::Receiver<()>,
) -> std::io::Result<()> {
    let app = Router::new().route("/", get(api::callback).layer(Extension(state)));

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
        })
        .await
}
