use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::{Mutex, oneshot};

/// Query parameters of the redirect request.
pub type CallbackParams = HashMap<String, String>;

const SUCCESS_PAGE: &str = "Got the code. Return back to your program.";
const FAILURE_PAGE: &str = "Authorization code not found. Try again.";

/// Handle the callback route uses to release the waiting handshake.
///
/// Holds the sending half of a one-shot channel. The first callback that
/// carries a code takes it; later hits find it gone and signal nothing.
#[derive(Debug, Clone)]
pub struct CallbackState {
    sender: Arc<Mutex<Option<oneshot::Sender<CallbackParams>>>>,
}

impl CallbackState {
    pub fn new() -> (Self, oneshot::Receiver<CallbackParams>) {
        let (tx, rx) = oneshot::channel();
        let state = Self {
            sender: Arc::new(Mutex::new(Some(tx))),
        };
        (state, rx)
    }

    async fn complete(&self, params: CallbackParams) {
        if let Some(tx) = self.sender.lock().await.take() {
            if tx.send(params).is_err() {
                tracing::warn!("authorization flow stopped waiting before the code arrived");
            }
        } else {
            tracing::debug!("authorization code already delivered, ignoring callback");
        }
    }
}

/// Returns true when the redirect carries a usable code.
pub fn is_granted(params: &CallbackParams) -> bool {
    !params.contains_key("error") && params.contains_key("code")
}

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<CallbackState>,
) -> Html<&'static str> {
    if !is_granted(&params) {
        // the flow keeps waiting, the user may retry from the same link
        tracing::info!(error = ?params.get("error"), "authorization callback without code");
        return Html(FAILURE_PAGE);
    }

    tracing::debug!("authorization callback with code");
    state.complete(params).await;
    Html(SUCCESS_PAGE)
}
