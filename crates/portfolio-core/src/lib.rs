//! Portfolio Core
//!
//! Target-independent layer of the portfolio client:
//! - models: records exchanged with the REST API
//! - forms: editable buffers and payload conversion
//! - fetch / submission / comments: view state machines
//! - admin: the two-panel CRUD console
//!
//! Nothing here touches the DOM or the network; the UI crate performs the
//! round trips and feeds the results back in.

pub mod admin;
pub mod comments;
pub mod config;
pub mod copy;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod forms;
pub mod models;
pub mod resource;
pub mod submission;
pub mod text;

pub use config::ApiConfig;
pub use error::{RequestError, ValidationError};
pub use fetch::{FetchState, ListPhase};
pub use resource::{PayloadOf, Resource};
pub use submission::{Banner, FormFlow, Submission};
