//! Form Buffers
//!
//! Editable scratch copies of records, shaped for text inputs. Multi-valued
//! fields are edited as one comma-delimited string and converted at the
//! boundaries: joined when a record is loaded, split when a payload is built.

mod account;
mod blog;
mod contact;
mod project;

use std::fmt::Debug;

use serde::Serialize;

use crate::error::ValidationError;

pub use account::{LoginForm, RegisterForm, MIN_PASSWORD_LEN};
pub use blog::BlogPostForm;
pub use contact::ContactForm;
pub use project::ProjectForm;

/// Separator used when joining a list for editing
const LIST_JOIN: &str = ", ";

/// Editable copy of a record that produces a request payload
pub trait FormBuffer: Clone + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Record type this buffer edits
    type Record;
    /// Body sent on create/update
    type Payload: Serialize + Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Copy a record's fields into a fresh buffer (edit mode)
    fn from_record(record: &Self::Record) -> Self;

    /// Client-side required-field check, run before any request
    fn validate(&self) -> Result<(), ValidationError>;

    /// Build the submission payload
    fn to_payload(&self) -> Self::Payload;
}

/// Split a comma-delimited string into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a sequence into the comma-delimited editing form
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_JOIN)
}
