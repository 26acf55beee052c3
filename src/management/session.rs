use crate::{
    error::BrowseError,
    management::{ResultSet, UNKNOWN_CATEGORY_ID, ViewKind},
    render::Renderer,
    spotify::{ApiClient, ApiRequest, catalog},
    types::{AlbumItem, CategoryItem, DisplayItem, PlaylistItem},
    utils,
};

/// Per-process browsing state. Only [`SessionController`] mutates it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    last_action: Option<ViewKind>,
    cursor: usize,
    selected_category: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn last_action(&self) -> Option<ViewKind> {
        self.last_action
    }

    /// Offset of the first item on the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }
}

/// Drives browsing: fetches listings, keeps the caches and the shared page
/// cursor, and renders one page at a time.
///
/// A single cursor serves every kind of listing. It is not reset when the
/// user switches from one listing to another, so e.g. `new`, `next`,
/// `categories` shows the second page of categories.
pub struct SessionController<C, R> {
    client: C,
    renderer: R,
    resource_point: String,
    page_size: usize,
    session: Session,
    albums: ResultSet<AlbumItem>,
    categories: ResultSet<CategoryItem>,
    // shared by featured playlists and category playlists
    playlists: ResultSet<PlaylistItem>,
}

impl<C: ApiClient, R: Renderer> SessionController<C, R> {
    pub fn new(client: C, renderer: R, resource_point: impl Into<String>, page_size: usize) -> Self {
        Self {
            client,
            renderer,
            resource_point: resource_point.into(),
            page_size: page_size.max(1),
            session: Session::default(),
            albums: ResultSet::default(),
            categories: ResultSet::default(),
            playlists: ResultSet::default(),
        }
    }

    /// Stores the bearer token obtained by the handshake.
    pub fn authenticate(&mut self, token: String) {
        self.session.token = Some(token);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Always fetches featured playlists anew and shows the current page.
    pub async fn show_featured(&mut self) -> Result<(), BrowseError> {
        let body = self.fetch_kind(ViewKind::Featured, None).await?;
        self.playlists.replace(catalog::parse_playlists(&body)?);
        self.session.last_action = Some(ViewKind::Featured);
        self.render_kind(ViewKind::Featured);
        Ok(())
    }

    /// Shows new releases, fetching them only the first time.
    pub async fn show_new_releases(&mut self) -> Result<(), BrowseError> {
        self.require_auth()?;
        if self.needs_fetch(ViewKind::NewReleases) {
            let body = self.fetch_kind(ViewKind::NewReleases, None).await?;
            self.albums.replace(catalog::parse_albums(&body)?);
        }
        self.session.last_action = Some(ViewKind::NewReleases);
        self.render_kind(ViewKind::NewReleases);
        Ok(())
    }

    /// Shows categories, fetching them only the first time.
    pub async fn show_categories(&mut self) -> Result<(), BrowseError> {
        self.require_auth()?;
        self.ensure_categories().await?;
        self.session.last_action = Some(ViewKind::Categories);
        self.render_kind(ViewKind::Categories);
        Ok(())
    }

    /// Shows the playlists of the category named `label` (case-insensitive).
    ///
    /// An unknown label is sent as [`UNKNOWN_CATEGORY_ID`]; the resulting API
    /// error is returned as [`BrowseError::Upstream`].
    pub async fn show_playlists(&mut self, label: &str) -> Result<(), BrowseError> {
        self.require_auth()?;
        self.ensure_categories().await?;

        let wanted = label.to_lowercase();
        let category_id = self
            .categories
            .items()
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| UNKNOWN_CATEGORY_ID.to_string());
        tracing::debug!(label, category_id = %category_id, "resolved category");

        let body = self
            .fetch_kind(ViewKind::Playlists, Some(&category_id))
            .await?;
        self.playlists.replace(catalog::parse_playlists(&body)?);
        self.session.selected_category = Some(label.to_string());
        self.session.last_action = Some(ViewKind::Playlists);
        self.render_kind(ViewKind::Playlists);
        Ok(())
    }

    /// Moves to the following page of the current listing.
    pub async fn next(&mut self) -> Result<(), BrowseError> {
        self.require_auth()?;
        let kind = self.session.last_action.ok_or(BrowseError::NoActiveView)?;

        let cursor = self.session.cursor;
        if self.is_last_page(kind, cursor) {
            return Err(BrowseError::PagingBoundary);
        }

        self.session.cursor = cursor + self.page_size;
        tracing::debug!(%kind, cursor = self.session.cursor, "next page");
        self.show_or_restore(kind, cursor).await
    }

    /// Moves to the preceding page of the current listing.
    pub async fn prev(&mut self) -> Result<(), BrowseError> {
        self.require_auth()?;
        let kind = self.session.last_action.ok_or(BrowseError::NoActiveView)?;

        let cursor = self.session.cursor;
        if cursor == 0 {
            return Err(BrowseError::PagingBoundary);
        }

        self.session.cursor = cursor.saturating_sub(self.page_size);
        tracing::debug!(%kind, cursor = self.session.cursor, "previous page");
        self.show_or_restore(kind, cursor).await
    }

    /// Re-runs the handler of `kind`, putting the cursor back on failure.
    async fn show_or_restore(&mut self, kind: ViewKind, cursor: usize) -> Result<(), BrowseError> {
        let result = match kind {
            ViewKind::Featured => self.show_featured().await,
            ViewKind::NewReleases => self.show_new_releases().await,
            ViewKind::Categories => self.show_categories().await,
            ViewKind::Playlists => {
                let label = self.session.selected_category.clone().unwrap_or_default();
                self.show_playlists(&label).await
            }
        };

        if result.is_err() {
            self.session.cursor = cursor;
        }
        result
    }

    fn require_auth(&self) -> Result<&str, BrowseError> {
        self.session
            .token
            .as_deref()
            .ok_or(BrowseError::Unauthenticated)
    }

    async fn ensure_categories(&mut self) -> Result<(), BrowseError> {
        if self.needs_fetch(ViewKind::Categories) {
            let body = self.fetch_kind(ViewKind::Categories, None).await?;
            self.categories.replace(catalog::parse_categories(&body)?);
        }
        Ok(())
    }

    fn needs_fetch(&self, kind: ViewKind) -> bool {
        !kind.cacheable() || self.len_of(kind) == 0
    }

    fn len_of(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::NewReleases => self.albums.len(),
            ViewKind::Categories => self.categories.len(),
            ViewKind::Featured | ViewKind::Playlists => self.playlists.len(),
        }
    }

    fn is_last_page(&self, kind: ViewKind, cursor: usize) -> bool {
        match kind {
            ViewKind::NewReleases => self.albums.is_last_page(cursor, self.page_size),
            ViewKind::Categories => self.categories.is_last_page(cursor, self.page_size),
            ViewKind::Featured | ViewKind::Playlists => {
                self.playlists.is_last_page(cursor, self.page_size)
            }
        }
    }

    async fn fetch_kind(
        &self,
        kind: ViewKind,
        category_id: Option<&str>,
    ) -> Result<String, BrowseError> {
        let token = self.require_auth()?;
        let request = kind.request(&self.resource_point, token, category_id);
        self.fetch(request).await
    }

    /// Sends `request` and turns an API error body into
    /// [`BrowseError::Upstream`].
    async fn fetch(&self, request: ApiRequest) -> Result<String, BrowseError> {
        let body = self.client.send(request).await?;
        if catalog::has_error(&body)? {
            let message = catalog::parse_error_message(&body)?;
            tracing::debug!(%message, "API returned an error body");
            return Err(BrowseError::Upstream(message));
        }
        Ok(body)
    }

    fn render_kind(&mut self, kind: ViewKind) {
        let cursor = self.session.cursor;
        let page_size = self.page_size;
        match kind {
            ViewKind::NewReleases => render_page(&mut self.renderer, &self.albums, cursor, page_size),
            ViewKind::Categories => {
                render_page(&mut self.renderer, &self.categories, cursor, page_size)
            }
            ViewKind::Featured | ViewKind::Playlists => {
                render_page(&mut self.renderer, &self.playlists, cursor, page_size)
            }
        }
    }
}

fn render_page<R, T>(renderer: &mut R, set: &ResultSet<T>, cursor: usize, page_size: usize)
where
    R: Renderer,
    T: Clone + Into<DisplayItem>,
{
    let items: Vec<DisplayItem> = set
        .window(cursor, page_size)
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    renderer.render_items(&items);
    renderer.render_line(&utils::page_footer(cursor, set.len(), page_size));
}
