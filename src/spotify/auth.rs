use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::oneshot;

use crate::{
    api::{self, CallbackParams, CallbackState},
    config::Config,
    error::AuthError,
    info, server,
    spotify::{ApiClient, catalog, requests},
    success, warning,
};

/// Runs the OAuth 2.0 authorization-code handshake and returns the bearer
/// token.
///
/// # Authentication Flow
///
/// 1. **Listener**: binds the redirect listener on `callback_port`
/// 2. **Link**: prints the authorization URL (and opens it when
///    `open_browser` is set)
/// 3. **Wait**: parks until a redirect with a `code` arrives. There is no
///    timeout, a human is busy in the browser. Redirects carrying `error`
///    get a failure page and the wait goes on, so the user can retry from
///    the same link.
/// 4. **Shutdown**: stops the listener
/// 5. **Exchange**: posts the code to `{access_point}/api/token` with the
///    client credentials as HTTP Basic auth and reads `access_token`
///
/// # Errors
///
/// - [`AuthError::BindFailed`] when the port is taken
/// - [`AuthError::IoFailure`] for any other listener failure
/// - [`AuthError::Denied`] when the delivered redirect carries no code
/// - [`AuthError::ExchangeFailed`] when the token request fails or its
///   response has no `access_token`
///
/// The listener task only ever touches the one-shot sender; session state
/// stays with the caller, who stores the returned token.
pub async fn authorize<C: ApiClient>(
    client: &C,
    config: &Config,
    open_browser: bool,
) -> Result<String, AuthError> {
    let listener = server::bind_callback_listener(config.callback_port).await?;
    tracing::info!(port = config.callback_port, "callback listener bound");

    let (state, code_rx) = CallbackState::new();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_task = tokio::spawn(server::start_callback_server(listener, state, shutdown_rx));

    let redirect_uri = config.redirect_uri();
    let auth_url = requests::authorize_url(&config.access_point, &config.client_id, &redirect_uri);

    info!("use this link to request the access code:");
    println!("{auth_url}");

    if open_browser && webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the link above manually.");
    }

    info!("waiting for code...");
    let spinner = waiting_spinner(&redirect_uri);
    let received = code_rx.await;
    spinner.finish_and_clear();

    let params: CallbackParams = match received {
        Ok(params) => params,
        Err(_) => {
            // the sender only goes away when the server stopped on its own
            let reason = match server_task.await {
                Ok(Err(e)) => e.to_string(),
                Ok(Ok(())) => "callback server stopped unexpectedly".to_string(),
                Err(e) => e.to_string(),
            };
            return Err(AuthError::IoFailure(reason));
        }
    };

    let _ = shutdown_tx.send(());

    let code = granted_code(&params)?;
    success!("code received");

    info!("making http request for access_token...");
    exchange_code(client, config, &code).await
}

/// The code of a delivered redirect.
pub fn granted_code(params: &CallbackParams) -> Result<String, AuthError> {
    match params.get("code") {
        Some(code) if api::is_granted(params) => Ok(code.clone()),
        // the callback only delivers granted queries, kept as a guard
        _ => Err(AuthError::Denied),
    }
}

/// Trades an authorization code for an access token.
pub async fn exchange_code<C: ApiClient>(
    client: &C,
    config: &Config,
    code: &str,
) -> Result<String, AuthError> {
    let request = requests::token_request(
        &config.access_point,
        code,
        &config.redirect_uri(),
        &config.client_id,
        &config.client_secret,
    );

    let body = client
        .send(request)
        .await
        .map_err(|e| AuthError::ExchangeFailed(e.to_string()))?;

    catalog::parse_access_token(&body).map_err(|e| AuthError::ExchangeFailed(e.to_string()))
}

fn waiting_spinner(redirect_uri: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(format!("Listening on {redirect_uri}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
