#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use musicadvisor::{
    error::TransportError,
    render::Renderer,
    spotify::{ApiClient, ApiRequest},
    types::DisplayItem,
};
use serde_json::{Value, json};

pub const RESOURCE_POINT: &str = "http://api.test";
pub const ACCESS_POINT: &str = "http://accounts.test";

/// Answers requests from a url -> body table and remembers what was sent.
#[derive(Default)]
pub struct FakeClient {
    responses: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, url: &str, body: impl Into<String>) -> Self {
        self.set(url, body);
        self
    }

    pub fn set(&self, url: &str, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body.into());
    }

    pub fn remove(&self, url: &str) {
        self.responses.lock().unwrap().remove(url);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }
}

impl ApiClient for FakeClient {
    async fn send(&self, request: ApiRequest) -> Result<String, TransportError> {
        let body = self.responses.lock().unwrap().get(&request.url).cloned();
        self.requests.lock().unwrap().push(request.clone());
        body.ok_or_else(|| TransportError::new(format!("connection refused: {}", request.url)))
    }
}

/// Keeps every page and line instead of printing them.
#[derive(Default)]
pub struct RecordingRenderer {
    pub pages: Vec<Vec<DisplayItem>>,
    pub lines: Vec<String>,
}

impl RecordingRenderer {
    pub fn last_page(&self) -> &[DisplayItem] {
        self.pages.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or("")
    }

    pub fn last_page_names(&self) -> Vec<String> {
        self.last_page()
            .iter()
            .map(|item| match item {
                DisplayItem::Album(a) => a.name.clone(),
                DisplayItem::Category(c) => c.name.clone(),
                DisplayItem::Playlist(p) => p.name.clone(),
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_items(&mut self, items: &[DisplayItem]) {
        self.pages.push(items.to_vec());
    }

    fn render_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

pub fn browse_url(path: &str) -> String {
    format!("{RESOURCE_POINT}/v1/browse/{path}")
}

pub fn albums_body(count: usize) -> String {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "album_type": "album",
                "name": format!("Album {i}"),
                "artists": [
                    { "name": format!("Artist {i}"), "id": format!("artist-{i}") },
                    { "name": "Guest", "id": "guest" }
                ],
                "external_urls": { "spotify": format!("https://open.spotify.com/album/{i}") }
            })
        })
        .collect();
    json!({ "albums": { "items": items, "total": count } }).to_string()
}

pub fn playlists_body(prefix: &str, count: usize) -> String {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "name": format!("{prefix} {i}"),
                "external_urls": { "spotify": format!("https://open.spotify.com/playlist/{prefix}-{i}") }
            })
        })
        .collect();
    json!({ "message": "Editor's picks", "playlists": { "items": items } }).to_string()
}

pub fn categories_body(categories: &[(&str, &str)]) -> String {
    let items: Vec<Value> = categories
        .iter()
        .map(|(name, id)| json!({ "name": name, "id": id, "href": format!("{RESOURCE_POINT}/v1/browse/categories/{id}") }))
        .collect();
    json!({ "categories": { "items": items } }).to_string()
}

pub fn error_body(status: u16, message: &str) -> String {
    json!({ "error": { "status": status, "message": message } }).to_string()
}
