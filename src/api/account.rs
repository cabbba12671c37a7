//! Account Endpoints
//!
//! Both calls answer with a session `{token, user}`.

use portfolio_core::endpoints;
use portfolio_core::models::{Credentials, Registration, Session};
use portfolio_core::RequestError;

use super::ApiClient;

pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<Session, RequestError> {
    client.post(endpoints::LOGIN, credentials).await
}

pub async fn register(client: &ApiClient, registration: &Registration) -> Result<Session, RequestError> {
    client.post(endpoints::REGISTER, registration).await
}
