//! # API Module
//!
//! HTTP endpoints served by the local callback listener during `auth`.
//!
//! ## Endpoints
//!
//! - [`callback`] - `GET /`, the OAuth redirect target. A query with a `code`
//!   releases the waiting handshake through a one-shot channel; a query with
//!   `error` (or nothing at all) only answers with a failure page.
//!
//! The router itself lives in [`crate::server`].

mod callback;

pub use callback::{CallbackParams, CallbackState, callback, is_granted};
