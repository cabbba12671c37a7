//! HTTP Client Adapter
//!
//! Frontend bindings to the REST API, organized by domain. Every call is one
//! fresh round trip: no retries, no caching, no timeout policy beyond the
//! browser's.

mod account;
mod blog;
mod contact;
mod projects;
mod resource;

use portfolio_core::{ApiConfig, RequestError};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use account::*;
pub use blog::*;
pub use contact::*;
pub use projects::*;
pub use resource::*;

/// Base origin plus optional session credential
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Attach a bearer credential to every request made through this client
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let text = self.execute::<()>(Method::GET, path, None).await?;
        decode(&text)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.execute(Method::POST, path, Some(body)).await?;
        decode(&text)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.execute(Method::PUT, path, Some(body)).await?;
        decode(&text)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let text = self.execute::<()>(Method::DELETE, path, None).await?;
        decode(&text)
    }

    /// Perform one request; non-2xx responses become `RequestError::Status`
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, RequestError> {
        let url = self.config.url(path);
        log::debug!("[Api] {} {}", method, url);

        let mut request: RequestBuilder = self.http.request(method.clone(), url.as_str());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("[Api] {} {} failed: {}", method, url, e);
            RequestError::Transport(e.to_string())
        })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(text)
        } else {
            log::warn!("[Api] {} {} -> {}", method, url, status);
            Err(RequestError::from_response(status.as_u16(), &text))
        }
    }
}

/// Decode a success body; an empty body reads as JSON `null`
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, RequestError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::models::Project;
    use serde::de::IgnoredAny;

    #[test]
    fn test_decode_list() {
        let projects: Vec<Project> = decode(r#"[{"_id":"1","title":"A"}]"#).unwrap();
        assert_eq!(projects[0].id(), "1");
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let err = decode::<Vec<Project>>("<html>").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
        assert_eq!(err.display_message("fallback"), "fallback");
    }

    #[test]
    fn test_ignored_body_accepts_empty_and_json() {
        assert!(decode::<IgnoredAny>("").is_ok());
        assert!(decode::<IgnoredAny>(r#"{"message":"Project deleted"}"#).is_ok());
        assert!(decode::<Option<Project>>(" ").unwrap().is_none());
        assert!(matches!(decode::<IgnoredAny>("not json"), Err(RequestError::Decode(_))));
    }
}
