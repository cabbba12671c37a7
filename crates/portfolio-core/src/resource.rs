//! Resource Trait
//!
//! A server-managed record type exposed through a list + member REST
//! contract. Generic over Project and BlogPost so the admin console and the
//! HTTP adapter share one implementation for both.

use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::copy::{self, PanelCopy};
use crate::endpoints;
use crate::forms::{BlogPostForm, FormBuffer, ProjectForm};
use crate::models::{BlogPost, Project};

pub trait Resource: Clone + PartialEq + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Editable buffer for this record type
    type Form: FormBuffer<Record = Self>;

    /// Collection path, e.g. `/api/projects`
    const COLLECTION: &'static str;

    /// Admin console wording
    const COPY: PanelCopy;

    /// Server-assigned identifier
    fn record_id(&self) -> &str;

    /// Path addressing one record
    fn member_path(id: &str) -> String {
        endpoints::member(Self::COLLECTION, id)
    }
}

/// Payload type produced by a resource's form buffer
pub type PayloadOf<R> = <<R as Resource>::Form as FormBuffer>::Payload;

impl Resource for Project {
    type Form = ProjectForm;
    const COLLECTION: &'static str = endpoints::PROJECTS;
    const COPY: PanelCopy = copy::PROJECT_PANEL;

    fn record_id(&self) -> &str {
        self.id()
    }
}

impl Resource for BlogPost {
    type Form = BlogPostForm;
    const COLLECTION: &'static str = endpoints::BLOG;
    const COPY: PanelCopy = copy::POST_PANEL;

    fn record_id(&self) -> &str {
        self.id()
    }
}
