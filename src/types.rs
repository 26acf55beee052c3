use std::fmt;

use serde::{Deserialize, Serialize};

/// A new release as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumItem {
    pub name: String,
    pub artists: Vec<String>,
    pub uri: String,
}

/// A browse category. The id is what the playlists endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub name: String,
    pub url: String,
}

/// Anything the renderer knows how to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Album(AlbumItem),
    Category(CategoryItem),
    Playlist(PlaylistItem),
}

impl From<AlbumItem> for DisplayItem {
    fn from(item: AlbumItem) -> Self {
        DisplayItem::Album(item)
    }
}

impl From<CategoryItem> for DisplayItem {
    fn from(item: CategoryItem) -> Self {
        DisplayItem::Category(item)
    }
}

impl From<PlaylistItem> for DisplayItem {
    fn from(item: PlaylistItem) -> Self {
        DisplayItem::Playlist(item)
    }
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayItem::Album(album) => write!(
                f,
                "{}\n[{}]\n{}\n",
                album.name,
                album.artists.join(", "),
                album.uri
            ),
            DisplayItem::Category(category) => write!(f, "{}", category.name),
            DisplayItem::Playlist(playlist) => write!(f, "{}\n{}\n", playlist.name, playlist.url),
        }
    }
}

// Wire shapes of the browse endpoints. Only the fields we show are mapped.

#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: Paging<AlbumObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
    pub name: String,
    pub artists: Vec<ArtistObject>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Paging<CategoryObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsResponse {
    pub playlists: Paging<PlaylistObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistObject {
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorObject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorObject {
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}
