use std::collections::HashMap;

use musicadvisor::management::ResultSet;
use musicadvisor::spotify::HttpClient;
use musicadvisor::spotify::requests::*;
use musicadvisor::utils::*;

#[test]
fn test_basic_auth_header() {
    assert_eq!(
        basic_auth_header("client", "secret"),
        "Basic Y2xpZW50OnNlY3JldA=="
    );

    // standard alphabet with padding, not the URL-safe one
    let header = basic_auth_header("a?b", ">>");
    assert!(header.starts_with("Basic "));
    assert!(!header.contains('_') && !header.contains('-'));
}

#[test]
fn test_bearer_auth_header() {
    assert_eq!(bearer_auth_header("abc"), "Bearer abc");
}

#[test]
fn test_page_count() {
    for page_size in 1..=7 {
        for total in 0..=40 {
            let expected = if total == 0 {
                1
            } else {
                (total + page_size - 1) / page_size
            };
            assert_eq!(
                page_count(total, page_size),
                expected,
                "total={total} page_size={page_size}"
            );
        }
    }
}

#[test]
fn test_page_footer() {
    assert_eq!(page_footer(0, 12, 5), "---PAGE 1 OF 3---");
    assert_eq!(page_footer(10, 12, 5), "---PAGE 3 OF 3---");
    assert_eq!(page_footer(0, 0, 5), "---PAGE 1 OF 1---");
    assert_eq!(page_footer(5, 10, 5), "---PAGE 2 OF 2---");
}

#[test]
fn test_split_command() {
    assert_eq!(split_command("featured"), ("featured", ""));
    assert_eq!(split_command("  playlists   Hip Hop  "), ("playlists", "Hip Hop"));
    assert_eq!(split_command(""), ("", ""));
}

#[test]
fn test_result_set_window() {
    let set = ResultSet::new((1..=12).collect::<Vec<u32>>());

    assert_eq!(set.window(0, 5), &[1, 2, 3, 4, 5]);
    assert_eq!(set.window(10, 5), &[11, 12]);
    assert!(set.window(15, 5).is_empty());

    assert!(!set.is_last_page(5, 5));
    assert!(set.is_last_page(10, 5));

    let empty: ResultSet<u32> = ResultSet::default();
    assert!(empty.window(0, 5).is_empty());
    assert!(empty.is_last_page(0, 5));
}

#[test]
fn test_authorize_url() {
    assert_eq!(
        authorize_url("https://accounts.spotify.com", "abc", "http://localhost:8080"),
        "https://accounts.spotify.com/authorize?client_id=abc&response_type=code&redirect_uri=http://localhost:8080"
    );
}

#[test]
fn test_browse_requests() {
    let request = browse_request("http://127.0.0.1:9000/", "tok", BrowseEndpoint::NewReleases);
    assert_eq!(request.url, "http://127.0.0.1:9000/v1/browse/new-releases");
    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.header_value("Authorization"), Some("Bearer tok"));
    assert!(request.form.is_none());

    assert_eq!(
        browse_request("http://x", "tok", BrowseEndpoint::FeaturedPlaylists).url,
        "http://x/v1/browse/featured-playlists"
    );
    assert_eq!(
        category_playlists_request("http://x", "tok", "pop-id").url,
        "http://x/v1/browse/categories/pop-id/playlists"
    );
}

#[test]
fn test_token_request() {
    let request = token_request(
        "https://accounts.spotify.com",
        "code-1",
        "http://localhost:8080",
        "client",
        "secret",
    );

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.url, "https://accounts.spotify.com/api/token");
    assert_eq!(request.form_value("grant_type"), Some("authorization_code"));
    assert_eq!(request.form_value("code"), Some("code-1"));
    assert_eq!(request.form_value("redirect_uri"), Some("http://localhost:8080"));
    assert_eq!(
        request.header_value("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        request.header_value("Authorization"),
        Some("Basic Y2xpZW50OnNlY3JldA==")
    );
}

#[test]
fn test_token_request_body_is_url_encoded() {
    let code = "ab+c&d=e%";
    let request = token_request(
        "https://accounts.spotify.com",
        code,
        "http://localhost:8080",
        "client",
        "secret",
    );

    let built = HttpClient::new().unwrap().build(&request).unwrap();
    let body = built.body().and_then(|b| b.as_bytes()).unwrap();
    let body = std::str::from_utf8(body).unwrap();
    assert!(!body.contains("ab+c&d"));

    let url = reqwest::Url::parse(&format!("http://decode.test/?{body}")).unwrap();
    let fields: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["code"], code);
    assert_eq!(fields["redirect_uri"], "http://localhost:8080");
    assert_eq!(fields["grant_type"], "authorization_code");

    assert_eq!(
        built.headers()[reqwest::header::CONTENT_TYPE],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(
        built.headers()[reqwest::header::AUTHORIZATION],
        "Basic Y2xpZW50OnNlY3JldA=="
    );
}

#[test]
fn test_normalize_flags() {
    let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        normalize_flags(args(&[
            "musicadvisor",
            "-access",
            "http://127.0.0.1:8090",
            "-resource=http://127.0.0.1:8091",
            "-page",
            "10",
            "-browser",
        ])),
        args(&[
            "musicadvisor",
            "--access",
            "http://127.0.0.1:8090",
            "--resource=http://127.0.0.1:8091",
            "--page",
            "10",
            "--browser",
        ])
    );

    // already-long flags, unknown flags, values and subcommands are kept
    let untouched = args(&["musicadvisor", "--page", "-3", "-h", "-pages", "completions", "bash"]);
    assert_eq!(normalize_flags(untouched.clone()), untouched);
}
