//! Builders for every request the client makes.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::{spotify::ApiRequest, utils};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Browse endpoints under `/v1/browse/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseEndpoint {
    FeaturedPlaylists,
    NewReleases,
    Categories,
}

impl BrowseEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            BrowseEndpoint::FeaturedPlaylists => "featured-playlists",
            BrowseEndpoint::NewReleases => "new-releases",
            BrowseEndpoint::Categories => "categories",
        }
    }
}

/// URL the user opens to grant access.
pub fn authorize_url(access_point: &str, client_id: &str, redirect_uri: &str) -> String {
    format!(
        "{access_point}/authorize?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}",
        access_point = access_point.trim_end_matches('/'),
    )
}

/// Exchanges an authorization code for an access token.
pub fn token_request(
    access_point: &str,
    code: &str,
    redirect_uri: &str,
    client_id: &str,
    client_secret: &str,
) -> ApiRequest {
    ApiRequest::post_form(
        format!("{}/api/token", access_point.trim_end_matches('/')),
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ],
    )
    .header(
        AUTHORIZATION,
        utils::basic_auth_header(client_id, client_secret),
    )
    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
}

pub fn browse_request(resource_point: &str, token: &str, endpoint: BrowseEndpoint) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/v1/browse/{}",
        resource_point.trim_end_matches('/'),
        endpoint.path()
    ))
    .header(AUTHORIZATION, utils::bearer_auth_header(token))
}

pub fn category_playlists_request(
    resource_point: &str,
    token: &str,
    category_id: &str,
) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/v1/browse/categories/{category_id}/playlists",
        resource_point.trim_end_matches('/'),
    ))
    .header(AUTHORIZATION, utils::bearer_auth_header(token))
}
