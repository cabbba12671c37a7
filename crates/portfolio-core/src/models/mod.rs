//! Models
//!
//! Records exchanged with the REST API. The client only caches transient
//! copies; identity and lifecycle belong to the server.

mod account;
mod blog;
mod id;
mod project;

pub use account::{ContactMessage, Credentials, Registration, Session, User};
pub use blog::{BlogPost, BlogPostPayload, Comment, NewComment, ANONYMOUS};
pub use id::{Identity, RecordId};
pub use project::{Project, ProjectPayload};
