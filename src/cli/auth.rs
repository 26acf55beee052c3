use crate::{
    config::Config,
    management::SessionController,
    render::Renderer,
    spotify::{self, ApiClient},
    success, warning,
};

pub async fn auth<C: ApiClient, R: Renderer>(
    controller: &mut SessionController<C, R>,
    config: &Config,
    open_browser: bool,
) {
    match spotify::auth::authorize(controller.client(), config, open_browser).await {
        Ok(token) => {
            controller.authenticate(token);
            success!("Success!");
        }
        Err(e) => {
            tracing::warn!(error = %e, "authorization failed");
            warning!("{}", e);
        }
    }
}
