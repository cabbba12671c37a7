//! Fetch State Machine
//!
//! Single tagged value per fetched slot: `Idle -> Loading -> {Ready, Errored}`.
//! Loading and errored can never be true at the same time, and every settled
//! request leaves `Loading`.

use crate::error::RequestError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is outstanding
    Loading,
    /// Last request succeeded; data stored verbatim
    Ready(T),
    /// Last request failed; display message (server's or fallback)
    Errored(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Enter `Loading`, discarding whatever was held
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    /// Settle with the outcome of the request
    pub fn resolve(&mut self, result: Result<T, RequestError>, fallback: &str) {
        *self = match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => {
                log::debug!("fetch failed: {}", err);
                FetchState::Errored(err.display_message(fallback))
            }
        };
    }

    /// Idle counts as loading: the view is mounted and about to fetch
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// Render classification of a list slot
#[derive(Debug, PartialEq)]
pub enum ListPhase<'a, T> {
    Loading,
    /// Fetched successfully but nothing there yet
    Empty,
    Items(&'a [T]),
    Errored(&'a str),
}

impl<T> FetchState<Vec<T>> {
    pub fn phase(&self) -> ListPhase<'_, T> {
        match self {
            FetchState::Idle | FetchState::Loading => ListPhase::Loading,
            FetchState::Ready(items) if items.is_empty() => ListPhase::Empty,
            FetchState::Ready(items) => ListPhase::Items(items),
            FetchState::Errored(message) => ListPhase::Errored(message),
        }
    }

    pub fn len(&self) -> usize {
        self.data().map_or(0, Vec::len)
    }
}
