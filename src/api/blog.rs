//! Blog Endpoints
//!
//! Posts plus the append-only comment sub-collection. Post writes go through
//! the generic resource calls.

use portfolio_core::endpoints;
use portfolio_core::models::{BlogPost, NewComment};
use portfolio_core::RequestError;
use serde::de::IgnoredAny;

use super::{resource, ApiClient};

pub async fn list_posts(client: &ApiClient) -> Result<Vec<BlogPost>, RequestError> {
    resource::list::<BlogPost>(client).await
}

pub async fn get_post(client: &ApiClient, id: &str) -> Result<BlogPost, RequestError> {
    resource::fetch::<BlogPost>(client, id).await
}

/// Append a comment; the page re-fetches the post afterwards
pub async fn add_comment(client: &ApiClient, post_id: &str, comment: &NewComment) -> Result<(), RequestError> {
    client
        .post::<_, IgnoredAny>(&endpoints::blog_comments(post_id), comment)
        .await
        .map(|_| ())
}
