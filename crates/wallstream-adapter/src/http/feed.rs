/*
[INPUT]:  Wall identifiers, page limits, and requested field names
[OUTPUT]: Feed pages with posts and pagination descriptors
[POS]:    HTTP layer - feed endpoints
[UPDATE]: When adding new feed endpoints or changing query parameters
*/

use reqwest::{Method, Url};

use crate::http::{GraphClient, Result};
use crate::types::{FeedResponse, FieldSet};

impl GraphClient {
    /// Fetch one page of posts for a wall
    ///
    /// GET /{wall_id}/posts?limit={limit}&fields={csv}
    pub async fn fetch_posts(
        &self,
        wall_id: &str,
        limit: u32,
        fields: &FieldSet,
    ) -> Result<FeedResponse> {
        let endpoint = format!("{wall_id}/posts");
        let builder = self
            .graph_request(Method::GET, &endpoint)?
            .query(&[("limit", limit.to_string()), ("fields", fields.to_query())]);
        self.send_json(builder).await
    }

    /// Execute a pagination URL taken from a previous response.
    ///
    /// The derived URL already carries the original query string (limit,
    /// fields, credentials); nothing is re-applied here.
    pub async fn fetch_page_url(&self, page_url: &str) -> Result<FeedResponse> {
        let url = Url::parse(page_url)?;
        let builder = self.absolute_request(Method::GET, url);
        self.send_json(builder).await
    }
}
