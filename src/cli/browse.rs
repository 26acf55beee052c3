use crate::{
    cli::Command,
    error::BrowseError,
    management::SessionController,
    render::Renderer,
    spotify::ApiClient,
};

/// Runs one browsing command against the session.
///
/// `auth`, `exit` and blank lines are the loop's business and do nothing
/// here. An unknown command is [`BrowseError::InvalidCommand`] once
/// authenticated and [`BrowseError::Unauthenticated`] before.
pub async fn browse<C: ApiClient, R: Renderer>(
    controller: &mut SessionController<C, R>,
    command: &Command,
) -> Result<(), BrowseError> {
    match command {
        Command::Featured => controller.show_featured().await,
        Command::New => controller.show_new_releases().await,
        Command::Categories => controller.show_categories().await,
        Command::Playlists(label) => controller.show_playlists(label).await,
        Command::Next => controller.next().await,
        Command::Prev => controller.prev().await,
        Command::Unknown(input) => {
            if controller.session().is_authenticated() {
                Err(BrowseError::InvalidCommand(input.clone()))
            } else {
                Err(BrowseError::Unauthenticated)
            }
        }
        Command::Auth | Command::Exit | Command::Empty => Ok(()),
    }
}
