//! Blog Entities
//!
//! Blog posts and their embedded comments, as returned by `/api/blog`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::Identity;
use crate::text::{non_blank, prefix_chars, preview, ELLIPSIS};

/// Characters of content used on a card when a post has no excerpt
const CARD_SUMMARY_CHARS: usize = 150;
/// Characters shown in the admin table
const ADMIN_PREVIEW_CHARS: usize = 50;
/// Display name for comments without an author
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(flatten)]
    pub identity: Identity,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl BlogPost {
    pub fn id(&self) -> &str {
        self.identity.as_str()
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image)
    }

    pub fn author_name(&self) -> Option<&str> {
        non_blank(&self.author)
    }

    pub fn excerpt_text(&self) -> Option<&str> {
        non_blank(&self.excerpt)
    }

    /// Card text: the excerpt, else a content prefix with the ellipsis always appended
    pub fn summary(&self) -> String {
        match self.excerpt_text() {
            Some(excerpt) => excerpt.to_string(),
            None => format!("{}{}", prefix_chars(&self.content, CARD_SUMMARY_CHARS), ELLIPSIS),
        }
    }

    /// Excerpt-or-content cut for the admin table
    pub fn admin_preview(&self) -> String {
        preview(self.excerpt_text().unwrap_or(&self.content), ADMIN_PREVIEW_CHARS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn display_author(&self) -> &str {
        non_blank(&self.author).unwrap_or(ANONYMOUS)
    }
}

/// Body of `POST /api/blog/{id}/comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
    pub author: String,
}

/// Body of a blog post create/update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogPostPayload {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub tags: Vec<String>,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_with(content: &str, excerpt: Option<&str>) -> BlogPost {
        BlogPost {
            content: content.to_string(),
            excerpt: excerpt.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_post_from_api() {
        let post: BlogPost = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Hello",
            "content": "Body",
            "tags": ["rust"],
            "author": "Ada",
            "createdAt": "2024-03-02T08:00:00.000Z",
            "comments": [
                {"content": "Nice", "author": "", "createdAt": "2024-03-03T08:00:00Z"},
                {"content": "Thanks", "author": "Ada"}
            ]
        }))
        .unwrap();
        assert_eq!(post.id(), "p1");
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[0].display_author(), "Anonymous");
        assert_eq!(post.comments[1].display_author(), "Ada");
        assert_eq!(post.created_at.map(|d| crate::text::format_date(&d)).as_deref(), Some("March 2, 2024"));
    }

    #[test]
    fn test_summary_prefers_excerpt() {
        assert_eq!(post_with("long body", Some("Short")).summary(), "Short");
    }

    #[test]
    fn test_summary_truncates_mid_word_and_always_appends_ellipsis() {
        let content = "word ".repeat(40);
        let summary = post_with(&content, None).summary();
        assert_eq!(summary, format!("{}...", &content[..150]));
        assert_eq!(post_with("tiny", Some("  ")).summary(), "tiny...");
    }

    #[test]
    fn test_admin_preview_uses_excerpt_or_content() {
        assert_eq!(post_with(&"c".repeat(60), None).admin_preview(), format!("{}...", "c".repeat(50)));
        assert_eq!(post_with(&"c".repeat(60), Some("ex")).admin_preview(), "ex");
    }
}
