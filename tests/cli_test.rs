mod common;

use common::{FakeClient, RESOURCE_POINT, RecordingRenderer, browse_url, categories_body, playlists_body};
use musicadvisor::{
    cli::{Command, GOODBYE, browse, run_session},
    config::{self, Config, DEFAULT_PAGE_SIZE},
    error::BrowseError,
    management::{SessionController, ViewKind},
};

#[test]
fn test_parse_commands() {
    assert_eq!(Command::parse("auth"), Command::Auth);
    assert_eq!(Command::parse("featured"), Command::Featured);
    assert_eq!(Command::parse("new"), Command::New);
    assert_eq!(Command::parse("categories"), Command::Categories);
    assert_eq!(Command::parse("next"), Command::Next);
    assert_eq!(Command::parse("prev"), Command::Prev);
    assert_eq!(Command::parse("exit"), Command::Exit);
    assert_eq!(Command::parse("   "), Command::Empty);
}

#[test]
fn test_parse_playlists_keeps_full_label() {
    assert_eq!(
        Command::parse("playlists Hip Hop"),
        Command::Playlists("Hip Hop".to_string())
    );
    assert_eq!(
        Command::parse("playlists   Top Lists  "),
        Command::Playlists("Top Lists".to_string())
    );
    assert_eq!(Command::parse("playlists"), Command::Playlists(String::new()));
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(Command::parse("Featured"), Command::Unknown("Featured".to_string()));
    assert_eq!(Command::parse("  nxt 2 "), Command::Unknown("nxt 2".to_string()));
}

#[tokio::test]
async fn test_unknown_command_before_auth_asks_for_access() {
    let mut c = SessionController::new(FakeClient::new(), RecordingRenderer::default(), RESOURCE_POINT, 5);

    let err = browse(&mut c, &Command::parse("hello")).await.unwrap_err();
    assert!(matches!(err, BrowseError::Unauthenticated));
    assert_eq!(err.to_string(), "Please, provide access for application.");
}

#[tokio::test]
async fn test_unknown_command_after_auth_is_invalid() {
    let mut c = SessionController::new(FakeClient::new(), RecordingRenderer::default(), RESOURCE_POINT, 5);
    c.authenticate("token".to_string());

    let err = browse(&mut c, &Command::parse("hello")).await.unwrap_err();
    assert!(matches!(err, BrowseError::InvalidCommand(_)));
    assert_eq!(err.to_string(), "Invalid option inputted. Try again.");
    assert!(c.client().requests().is_empty());
}

#[tokio::test]
async fn test_browse_dispatches_to_session() {
    let client = FakeClient::new()
        .with(&browse_url("categories"), categories_body(&[("Hip Hop", "hiphop")]))
        .with(&browse_url("categories/hiphop/playlists"), playlists_body("Beats", 3));
    let mut c = SessionController::new(client, RecordingRenderer::default(), RESOURCE_POINT, 5);
    c.authenticate("token".to_string());

    browse(&mut c, &Command::parse("playlists hip hop")).await.unwrap();
    assert_eq!(c.session().last_action(), Some(ViewKind::Playlists));
    assert_eq!(c.renderer().last_page_names(), vec!["Beats 1", "Beats 2", "Beats 3"]);

    let err = browse(&mut c, &Command::Next).await.unwrap_err();
    assert_eq!(err.to_string(), "No more pages.");

    // loop-level commands are no-ops here
    browse(&mut c, &Command::Exit).await.unwrap();
    browse(&mut c, &Command::Empty).await.unwrap();
}

#[test]
fn test_page_size_argument() {
    assert_eq!(config::page_size(None), DEFAULT_PAGE_SIZE);
    assert_eq!(config::page_size(Some("3")), 3);
    assert_eq!(config::page_size(Some(" 10 ")), 10);
    assert_eq!(config::page_size(Some("0")), DEFAULT_PAGE_SIZE);
    assert_eq!(config::page_size(Some("-2")), DEFAULT_PAGE_SIZE);
    assert_eq!(config::page_size(Some("five")), DEFAULT_PAGE_SIZE);
}

fn test_config() -> Config {
    Config {
        access_point: config::DEFAULT_ACCESS_POINT.to_string(),
        resource_point: config::DEFAULT_RESOURCE_POINT.to_string(),
        page_size: DEFAULT_PAGE_SIZE,
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
        callback_port: 8123,
    }
}

#[test]
fn test_redirect_uri_uses_callback_port() {
    assert_eq!(test_config().redirect_uri(), "http://localhost:8123");
}

#[tokio::test]
async fn test_exit_prints_bare_goodbye_and_stops() {
    let client = FakeClient::new().with(&browse_url("categories"), categories_body(&[("Pop", "pop")]));
    let mut c = SessionController::new(client, RecordingRenderer::default(), RESOURCE_POINT, 5);
    c.authenticate("token".to_string());

    let input: &[u8] = b"categories\n\nexit\nnew\n";
    run_session(&mut c, &test_config(), false, input).await.unwrap();

    assert_eq!(GOODBYE, "---GOODBYE!---");
    assert_eq!(c.renderer().lines, vec!["---PAGE 1 OF 1---", GOODBYE]);
    // nothing after exit is read
    assert_eq!(c.client().requests().len(), 1);
}

#[tokio::test]
async fn test_end_of_input_ends_session_quietly() {
    let mut c = SessionController::new(FakeClient::new(), RecordingRenderer::default(), RESOURCE_POINT, 5);

    let input: &[u8] = b"featured\nbogus";
    run_session(&mut c, &test_config(), false, input).await.unwrap();

    assert!(c.renderer().lines.is_empty());
    assert!(c.client().requests().is_empty());
}
