//! Maps browse response bodies onto display records.
//!
//! Every function fails with [`CatalogError::MalformedPayload`] when a field
//! it needs is missing or has the wrong type.

use serde_json::Value;

use crate::{
    error::CatalogError,
    types::{
        AlbumItem, CategoriesResponse, CategoryItem, ErrorResponse, NewReleasesResponse,
        PlaylistItem, PlaylistsResponse, TokenResponse,
    },
};

pub fn parse_albums(body: &str) -> Result<Vec<AlbumItem>, CatalogError> {
    let response: NewReleasesResponse = serde_json::from_str(body)?;
    Ok(response
        .albums
        .items
        .into_iter()
        .map(|album| AlbumItem {
            name: album.name,
            artists: album.artists.into_iter().map(|a| a.name).collect(),
            uri: album.external_urls.spotify,
        })
        .collect())
}

pub fn parse_categories(body: &str) -> Result<Vec<CategoryItem>, CatalogError> {
    let response: CategoriesResponse = serde_json::from_str(body)?;
    Ok(response
        .categories
        .items
        .into_iter()
        .map(|category| CategoryItem {
            name: category.name,
            id: category.id,
        })
        .collect())
}

pub fn parse_playlists(body: &str) -> Result<Vec<PlaylistItem>, CatalogError> {
    let response: PlaylistsResponse = serde_json::from_str(body)?;
    Ok(response
        .playlists
        .items
        .into_iter()
        .map(|playlist| PlaylistItem {
            name: playlist.name,
            url: playlist.external_urls.spotify,
        })
        .collect())
}

/// True if the body carries a top-level `error` field.
pub fn has_error(body: &str) -> Result<bool, CatalogError> {
    let json: Value = serde_json::from_str(body)?;
    Ok(json.get("error").is_some())
}

/// The `error.message` string of an API error body.
pub fn parse_error_message(body: &str) -> Result<String, CatalogError> {
    let response: ErrorResponse = serde_json::from_str(body)?;
    Ok(response.error.message)
}

pub fn parse_access_token(body: &str) -> Result<String, CatalogError> {
    let response: TokenResponse = serde_json::from_str(body)?;
    Ok(response.access_token)
}
