use std::fmt;

use crate::spotify::{
    ApiRequest,
    requests::{self, BrowseEndpoint},
};

/// Category id sent when a label matches no known category. The API answers
/// with an error body, which is shown to the user.
pub const UNKNOWN_CATEGORY_ID: &str = "none";

/// The kind of listing currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Featured,
    NewReleases,
    Categories,
    Playlists,
}

impl ViewKind {
    /// Cacheable kinds are fetched once and then paged from memory; the
    /// others are fetched again for every page.
    pub fn cacheable(self) -> bool {
        matches!(self, ViewKind::NewReleases | ViewKind::Categories)
    }

    /// Builds the request listing this kind. Only `Playlists` uses
    /// `category_id`.
    pub fn request(self, resource_point: &str, token: &str, category_id: Option<&str>) -> ApiRequest {
        match self {
            ViewKind::Featured => {
                requests::browse_request(resource_point, token, BrowseEndpoint::FeaturedPlaylists)
            }
            ViewKind::NewReleases => {
                requests::browse_request(resource_point, token, BrowseEndpoint::NewReleases)
            }
            ViewKind::Categories => {
                requests::browse_request(resource_point, token, BrowseEndpoint::Categories)
            }
            ViewKind::Playlists => requests::category_playlists_request(
                resource_point,
                token,
                category_id.unwrap_or(UNKNOWN_CATEGORY_ID),
            ),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Featured => "featured",
            ViewKind::NewReleases => "new",
            ViewKind::Categories => "categories",
            ViewKind::Playlists => "playlists",
        };
        f.write_str(name)
    }
}
