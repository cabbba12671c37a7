//! Generic Resource Calls
//!
//! List/read/create/update/delete over any `Resource`, shared by the public
//! pages and the admin console.

use portfolio_core::admin::Mutation;
use portfolio_core::{PayloadOf, RequestError, Resource};
use serde::de::IgnoredAny;

use super::ApiClient;

/// GET the whole collection
pub async fn list<R: Resource>(client: &ApiClient) -> Result<Vec<R>, RequestError> {
    client.get(R::COLLECTION).await
}

/// GET one record
pub async fn fetch<R: Resource>(client: &ApiClient, id: &str) -> Result<R, RequestError> {
    client.get(&R::member_path(id)).await
}

/// POST a new record; the created record is not needed since the list is re-fetched
pub async fn create<R: Resource>(client: &ApiClient, payload: &PayloadOf<R>) -> Result<(), RequestError> {
    client.post::<_, IgnoredAny>(R::COLLECTION, payload).await.map(|_| ())
}

/// PUT a full replacement of one record
pub async fn update<R: Resource>(
    client: &ApiClient,
    id: &str,
    payload: &PayloadOf<R>,
) -> Result<(), RequestError> {
    client.put::<_, IgnoredAny>(&R::member_path(id), payload).await.map(|_| ())
}

/// DELETE one record
pub async fn remove<R: Resource>(client: &ApiClient, id: &str) -> Result<(), RequestError> {
    client.delete::<IgnoredAny>(&R::member_path(id)).await.map(|_| ())
}

/// Perform whichever request a console mutation describes
pub async fn apply<R: Resource>(
    client: &ApiClient,
    mutation: &Mutation<PayloadOf<R>>,
) -> Result<(), RequestError> {
    match mutation {
        Mutation::Create(payload) => create::<R>(client, payload).await,
        Mutation::Update { id, payload } => update::<R>(client, id, payload).await,
        Mutation::Delete { id } => remove::<R>(client, id).await,
    }
}
