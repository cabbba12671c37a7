//! Project Endpoints

use portfolio_core::models::Project;
use portfolio_core::RequestError;

use super::{resource, ApiClient};

pub async fn list_projects(client: &ApiClient) -> Result<Vec<Project>, RequestError> {
    resource::list::<Project>(client).await
}
