//! Contact Endpoint

use portfolio_core::endpoints;
use portfolio_core::models::ContactMessage;
use portfolio_core::RequestError;
use serde::de::IgnoredAny;

use super::ApiClient;

pub async fn send_contact(client: &ApiClient, message: &ContactMessage) -> Result<(), RequestError> {
    client.post::<_, IgnoredAny>(endpoints::CONTACT, message).await.map(|_| ())
}
