//! Application Context
//!
//! Session capability provided via Leptos Context API. Pages read the current
//! user and obtain API clients from here; nothing else holds the credential.

use leptos::prelude::*;
use portfolio_core::models::{Session, User};
use portfolio_core::ApiConfig;

use crate::api::ApiClient;

/// localStorage key holding the serialized session
pub const SESSION_KEY: &str = "portfolio.session";

/// API origin resolved at build time
pub fn api_config() -> ApiConfig {
    ApiConfig::from_env_value(option_env!("PORTFOLIO_API_URL"))
}

/// Auth capability provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Restore any persisted session
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(load_session()),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Store a session returned by login/register
    pub fn sign_in(&self, session: Session) {
        log::info!("[Auth] signed in as {}", session.user.email);
        save_session(Some(&session));
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        log::info!("[Auth] signed out");
        save_session(None);
        self.session.set(None);
    }

    /// API client carrying the current credential, if any
    pub fn client(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(api_config()).with_token(token)
    }
}

/// Get the auth capability from context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

// ========================
// Persistence
// ========================

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn load_session() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match decode_session(&raw) {
        Some(session) => Some(session),
        None => {
            log::warn!("[Auth] discarding unreadable stored session");
            if let Some(storage) = storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
            None
        }
    }
}

fn save_session(session: Option<&Session>) {
    let Some(storage) = storage() else {
        log::warn!("[Auth] localStorage unavailable; session not persisted");
        return;
    };
    let result = match session.and_then(|s| serde_json::to_string(s).ok()) {
        Some(raw) => storage.set_item(SESSION_KEY, &raw),
        None => storage.remove_item(SESSION_KEY),
    };
    if result.is_err() {
        log::warn!("[Auth] failed to update stored session");
    }
}

fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_session() {
        let raw = r#"{"token":"t","user":{"_id":"u1","name":"Ada","email":"ada@x.io"}}"#;
        let session = decode_session(raw).unwrap();
        assert_eq!(session.token, "t");
        assert_eq!(session.user.display_name(), Some("Ada"));
    }

    #[test]
    fn test_decode_session_rejects_garbage() {
        assert!(decode_session("not json").is_none());
        assert!(decode_session(r#"{"user":{}}"#).is_none());
    }
}
