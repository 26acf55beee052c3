//! Configuration management for the music advisor.
//!
//! Values come from three places, highest priority first:
//! 1. Command-line flags
//! 2. Environment variables, including a `.env` file in the local data
//!    directory and one in the working directory
//! 3. Application defaults
//!
//! Flags and their environment fallbacks are declared on the clap parser in
//! `main.rs`; this module covers the `.env` loading, the client credentials
//! and page size validation.

use std::{env, path::PathBuf};

use crate::{error::ConfigError, warning};

pub const DEFAULT_ACCESS_POINT: &str = "https://accounts.spotify.com";
pub const DEFAULT_RESOURCE_POINT: &str = "https://api.spotify.com";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_CALLBACK_PORT: u16 = 8080;

/// Loads environment variables from `.env` files.
///
/// Looks for `musicadvisor/.env` in the platform-specific local data
/// directory, creating the directory if needed, and then for a `.env` in the
/// working directory. Missing files are fine; a file that cannot be parsed
/// is an error.
///
/// - Linux: `~/.local/share/musicadvisor/.env`
/// - macOS: `~/Library/Application Support/musicadvisor/.env`
/// - Windows: `%LOCALAPPDATA%/musicadvisor/.env`
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::Env(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Env(e.to_string()))?;
    }

    // a local .env is a convenience for development only
    let _ = dotenv::dotenv();
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("musicadvisor/.env");
    path
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Client id registered with the authorization server.
pub fn client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Client secret used for the Basic auth header of the token exchange.
///
/// Keep it out of logs and version control.
pub fn client_secret() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Port of the local redirect listener, `SPOTIFY_CALLBACK_PORT` or 8080.
pub fn callback_port() -> u16 {
    match env::var("SPOTIFY_CALLBACK_PORT") {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warning!(
                "Invalid SPOTIFY_CALLBACK_PORT '{}', using {}.",
                raw,
                DEFAULT_CALLBACK_PORT
            );
            DEFAULT_CALLBACK_PORT
        }),
        Err(_) => DEFAULT_CALLBACK_PORT,
    }
}

/// Parses a page size argument.
///
/// Anything that is not a positive integer falls back to
/// [`DEFAULT_PAGE_SIZE`] with a warning.
pub fn page_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_PAGE_SIZE;
    };

    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => {
            warning!("Falling back to default page size. Page argument is invalid.");
            DEFAULT_PAGE_SIZE
        }
    }
}

/// Everything the handshake and the browsing session need at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_point: String,
    pub resource_point: String,
    pub page_size: usize,
    pub client_id: String,
    pub client_secret: String,
    pub callback_port: u16,
}

impl Config {
    /// Reads the credentials and port from the environment; endpoints and
    /// page size come from the caller (usually the parsed flags).
    pub fn from_env(
        access_point: String,
        resource_point: String,
        page_size: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            access_point,
            resource_point,
            page_size,
            client_id: client_id()?,
            client_secret: client_secret()?,
            callback_port: callback_port(),
        })
    }

    /// Redirect URI registered with the authorization server.
    pub fn redirect_uri(&self) -> String {
        format!("http://localhost:{}", self.callback_port)
    }
}
