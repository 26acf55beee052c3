//! # Spotify Integration Module
//!
//! Everything that talks to the remote API lives here.
//!
//! - [`client`] - the [`ApiClient`] seam and its `reqwest` implementation
//! - [`requests`] - builders for the authorization URL, the token exchange
//!   and the browse requests
//! - [`catalog`] - JSON bodies to display records, plus error body detection
//! - [`auth`] - the authorization-code handshake
//!
//! ## Endpoints
//!
//! ```text
//! {access_point}/authorize                          browser link
//! {access_point}/api/token                          POST, Basic auth
//! {resource_point}/v1/browse/featured-playlists     GET, Bearer auth
//! {resource_point}/v1/browse/new-releases           GET, Bearer auth
//! {resource_point}/v1/browse/categories             GET, Bearer auth
//! {resource_point}/v1/browse/categories/{id}/playlists
//! ```
//!
//! Requests are plain [`ApiRequest`] values so the session controller and
//! the handshake can be exercised against a fake client.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod requests;

pub use client::{ApiClient, ApiRequest, HttpClient};
