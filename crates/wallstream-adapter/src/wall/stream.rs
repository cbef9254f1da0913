/*
[INPUT]:  Graph credentials, wall identifiers, and stored page cursors
[OUTPUT]: Keyed post pages and forward/backward navigation
[POS]:    Wall layer - stateful wall-stream client
[UPDATE]: When the pagination contract or masking behavior changes
*/

use tracing::warn;

use crate::http::{Credentials, GraphClient, Result, WallStreamError};
use crate::types::{FeedResponse, FieldSet, PageDirection, PostPage};

use super::cursors::PageCursors;

/// Page limit used when the caller has no preference
pub const DEFAULT_WALL_LIMIT: u32 = 50;

/// Client for walking a wall's post feed page by page.
///
/// Holds one mutable cursor state, unsynchronized; interleaving calls on a
/// shared instance is the caller's responsibility. Each successful fetch
/// replaces the stored cursors wholesale; a failed one leaves them untouched.
#[derive(Debug)]
pub struct WallStreamClient {
    client: GraphClient,
    response_fields: FieldSet,
    cursors: Option<PageCursors>,
}

impl WallStreamClient {
    /// Create a client from raw credentials with default HTTP configuration.
    ///
    /// Construction fails only when the transport cannot be built; that
    /// failure propagates.
    pub fn new(
        api_key: impl Into<String>,
        app_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(api_key, app_secret, access_token);
        Ok(Self::with_client(GraphClient::new(credentials)?))
    }

    /// Wrap an already-configured transport client
    pub fn with_client(client: GraphClient) -> Self {
        Self {
            client,
            response_fields: FieldSet::default(),
            cursors: None,
        }
    }

    /// Fields requested on subsequent `fetch_wall` calls
    pub fn response_fields(&self) -> &FieldSet {
        &self.response_fields
    }

    /// Replace the requested fields.
    ///
    /// Affects subsequent `fetch_wall` calls only; cursors from an earlier
    /// fetch keep the field list they were derived with.
    pub fn set_response_fields(&mut self, fields: FieldSet) {
        self.response_fields = fields;
    }

    /// Cursor state from the most recent successful fetch, if any
    pub fn cursors(&self) -> Option<&PageCursors> {
        self.cursors.as_ref()
    }

    /// Fetch one page of posts for `wall_id`, keyed by post id
    pub async fn try_fetch_wall(&mut self, wall_id: &str, limit: u32) -> Result<PostPage> {
        let response = self
            .client
            .fetch_posts(wall_id, limit, &self.response_fields)
            .await?;
        Ok(self.store(response))
    }

    /// Fetch the page after the most recent one
    pub async fn try_next(&mut self) -> Result<PostPage> {
        let cursors = self.cursors.clone().ok_or(WallStreamError::NoPriorFetch)?;
        self.try_page(&cursors, PageDirection::Next).await
    }

    /// Fetch the page before the most recent one
    pub async fn try_previous(&mut self) -> Result<PostPage> {
        let cursors = self.cursors.clone().ok_or(WallStreamError::NoPriorFetch)?;
        self.try_page(&cursors, PageDirection::Previous).await
    }

    /// Navigate from an explicit cursor state.
    ///
    /// The derived URL is executed as-is; on success the stored cursors are
    /// replaced with the new page's.
    pub async fn try_page(
        &mut self,
        cursors: &PageCursors,
        direction: PageDirection,
    ) -> Result<PostPage> {
        let url = cursors
            .url_for(direction)
            .ok_or(WallStreamError::CursorExhausted { direction })?;
        let response = self.client.fetch_page_url(url).await?;
        Ok(self.store(response))
    }

    /// Fetch a wall page, masking failures to an empty page.
    ///
    /// Callers cannot distinguish "no posts" from "request failed" by the
    /// return value; the failure is logged. Use `try_fetch_wall` to observe
    /// errors.
    pub async fn fetch_wall(&mut self, wall_id: &str, limit: u32) -> PostPage {
        match self.try_fetch_wall(wall_id, limit).await {
            Ok(page) => page,
            Err(error) => {
                warn!(wall_id, limit, error = %error, "wall fetch failed");
                PostPage::new()
            }
        }
    }

    /// Fetch the next page, masking fetch failures to an empty page.
    ///
    /// Calling this before any successful fetch is a programming error and
    /// surfaces as `NoPriorFetch` instead of being masked.
    pub async fn next(&mut self) -> Result<PostPage> {
        self.masked_page(PageDirection::Next).await
    }

    /// Fetch the previous page, masking fetch failures to an empty page.
    ///
    /// Same precondition contract as `next`.
    pub async fn previous(&mut self) -> Result<PostPage> {
        self.masked_page(PageDirection::Previous).await
    }

    async fn masked_page(&mut self, direction: PageDirection) -> Result<PostPage> {
        let result = match direction {
            PageDirection::Next => self.try_next().await,
            PageDirection::Previous => self.try_previous().await,
        };
        match result {
            Ok(page) => Ok(page),
            Err(error @ WallStreamError::NoPriorFetch) => Err(error),
            Err(error) => {
                warn!(%direction, error = %error, "page navigation failed");
                Ok(PostPage::new())
            }
        }
    }

    fn store(&mut self, response: FeedResponse) -> PostPage {
        self.cursors = Some(PageCursors::from_paging(response.paging.as_ref()));
        PostPage::from_records(response.data)
    }
}
