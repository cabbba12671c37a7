//! Project Entity
//!
//! Portfolio project as returned by `/api/projects`.

use serde::{Deserialize, Serialize};

use super::id::Identity;
use crate::text::{non_blank, preview};

/// Characters of description shown in the admin table
const ADMIN_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub identity: Identity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Free-text technology tags, in display order
    #[serde(default)]
    pub technologies: Vec<String>,
    /// External link (repository, live demo)
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn id(&self) -> &str {
        self.identity.as_str()
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image)
    }

    pub fn link_url(&self) -> Option<&str> {
        non_blank(&self.link)
    }

    /// Description cut for the admin table
    pub fn admin_preview(&self) -> String {
        preview(&self.description, ADMIN_PREVIEW_CHARS)
    }
}

/// Body of a create/update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_from_api() {
        let project: Project = serde_json::from_value(json!({
            "_id": "64f0",
            "title": "Portfolio",
            "description": "My site",
            "image": "",
            "technologies": ["Rust", "Leptos"],
            "link": "https://example.com",
            "createdAt": "2024-01-05T10:00:00.000Z",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(project.id(), "64f0");
        assert_eq!(project.image_url(), None);
        assert_eq!(project.link_url(), Some("https://example.com"));
        assert_eq!(project.technologies, vec!["Rust", "Leptos"]);
    }

    #[test]
    fn test_project_missing_optionals() {
        let project: Project = serde_json::from_value(json!({"id": "1", "title": "T"})).unwrap();
        assert!(project.technologies.is_empty());
        assert_eq!(project.description, "");
        assert_eq!(project.link_url(), None);
    }

    #[test]
    fn test_admin_preview() {
        let mut project = Project::default();
        project.description = "x".repeat(51);
        assert_eq!(project.admin_preview(), format!("{}...", "x".repeat(50)));
        project.description = "y".repeat(50);
        assert_eq!(project.admin_preview(), "y".repeat(50));
    }
}
