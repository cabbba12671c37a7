//! Blog Post Form Buffer

use super::{join_list, split_list, FormBuffer};
use crate::error::{require, ValidationError};
use crate::models::{BlogPost, BlogPostPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostForm {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    /// Comma-delimited while editing
    pub tags: String,
    pub author: String,
}

impl FormBuffer for BlogPostForm {
    type Record = BlogPost;
    type Payload = BlogPostPayload;

    fn from_record(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            image: post.image.clone().unwrap_or_default(),
            tags: join_list(&post.tags),
            author: post.author.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "Title")?;
        require(&self.content, "Content")
    }

    fn to_payload(&self) -> BlogPostPayload {
        BlogPostPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            image: self.image.clone(),
            tags: split_list(&self.tags),
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_joins_tags() {
        let post = BlogPost {
            title: "Hello".to_string(),
            content: "Body".to_string(),
            tags: vec!["rust".to_string(), "wasm".to_string()],
            author: Some("Ada".to_string()),
            ..Default::default()
        };
        let form = BlogPostForm::from_record(&post);
        assert_eq!(form.tags, "rust, wasm");
        assert_eq!(form.author, "Ada");
        assert_eq!(form.excerpt, "");
        assert_eq!(form.to_payload().tags, post.tags);
    }

    #[test]
    fn test_validate_requires_content() {
        let form = BlogPostForm { title: "T".to_string(), content: " ".to_string(), ..Default::default() };
        assert_eq!(form.validate(), Err(ValidationError::Required("Content")));
    }
}
