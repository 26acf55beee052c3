//! # CLI Module
//!
//! The interactive command loop. Input is read from stdin one line at a
//! time and each command is handled to completion before the next line is
//! read, so the session never sees two commands at once.
//!
//! ## Commands
//!
//! ```text
//! auth                 authorize with the Spotify account service
//! featured             featured playlists (fetched every time)
//! new                  new releases (fetched once)
//! categories           browse categories (fetched once)
//! playlists <label>    playlists of the category named <label>
//! next | prev          page through the current listing
//! exit                 leave the program
//! ```
//!
//! Every command but `auth` and `exit` needs a successful `auth` first.
//! Failures are printed as a single warning line and the loop goes on.

mod auth;
mod browse;

pub use auth::auth;
pub use browse::browse;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    Res,
    config::Config,
    management::SessionController,
    render::{ConsoleRenderer, Renderer},
    spotify::ApiClient,
    utils, warning,
};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Auth,
    Featured,
    New,
    Categories,
    /// Category label, may contain spaces.
    Playlists(String),
    Next,
    Prev,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let (word, rest) = utils::split_command(line);
        match word {
            "" => Command::Empty,
            "auth" => Command::Auth,
            "featured" => Command::Featured,
            "new" => Command::New,
            "categories" => Command::Categories,
            "playlists" => Command::Playlists(rest.to_string()),
            "next" => Command::Next,
            "prev" => Command::Prev,
            "exit" => Command::Exit,
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

/// Printed when the user leaves with `exit`.
pub const GOODBYE: &str = "---GOODBYE!---";

/// Reads commands from stdin until `exit` or end of input.
pub async fn run<C: ApiClient>(config: &Config, client: C, open_browser: bool) -> Res<()> {
    let mut controller = SessionController::new(
        client,
        ConsoleRenderer,
        config.resource_point.clone(),
        config.page_size,
    );
    let input = BufReader::new(tokio::io::stdin());
    run_session(&mut controller, config, open_browser, input).await
}

/// The command loop over any line source.
pub async fn run_session<C, R, I>(
    controller: &mut SessionController<C, R>,
    config: &Config,
    open_browser: bool,
    input: I,
) -> Res<()>
where
    C: ApiClient,
    R: Renderer,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        tracing::debug!(?command, "command received");

        match command {
            Command::Exit => {
                controller.renderer_mut().render_line(GOODBYE);
                break;
            }
            Command::Empty => continue,
            Command::Auth => auth(controller, config, open_browser).await,
            command => {
                if let Err(e) = browse(controller, &command).await {
                    warning!("{}", e);
                }
            }
        }
    }

    Ok(())
}
