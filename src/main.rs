use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use musicadvisor::{
    cli,
    config::{self, Config},
    error, logging,
    spotify::HttpClient,
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the authorization server
    #[clap(long, env = "SPOTIFY_ACCESS_POINT", default_value = config::DEFAULT_ACCESS_POINT)]
    access: String,

    /// Base URL of the Web API
    #[clap(long, env = "SPOTIFY_RESOURCE_POINT", default_value = config::DEFAULT_RESOURCE_POINT)]
    resource: String,

    /// Items per page (positive integer, defaults to 5)
    #[clap(long, env = "SPOTIFY_PAGE_SIZE")]
    page: Option<String>,

    /// Open the authorization link in the default browser
    #[clap(long)]
    browser: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(e) = config::load_env().await {
        error!("{}", e);
    }

    let cli = Cli::parse_from(utils::normalize_flags(std::env::args()));

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let page_size = config::page_size(cli.page.as_deref());
    let config = match Config::from_env(cli.access, cli.resource, page_size) {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let client = match HttpClient::new() {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    if let Err(e) = cli::run(&config, client, cli.browser).await {
        error!("Cannot read input. Err: {}", e);
    }
}
