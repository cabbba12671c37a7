//! Comment Composer
//!
//! Sub-flow of the blog detail view. Only authenticated viewers can post;
//! blank text never reaches the network. A successful post asks the caller to
//! re-fetch the whole post so the new comment comes from the server copy.

use crate::copy;
use crate::error::RequestError;
use crate::models::{NewComment, User, ANONYMOUS};
use crate::submission::{Banner, Submission};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentComposer {
    text: String,
    status: Submission,
}

impl CommentComposer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn status(&self) -> &Submission {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.status.banner()
    }

    /// Comment to post, or `None` when nothing should be sent
    pub fn submit(&mut self, viewer: Option<&User>) -> Option<NewComment> {
        let viewer = viewer?;
        if self.text.trim().is_empty() || !self.status.begin() {
            return None;
        }
        Some(NewComment {
            content: self.text.clone(),
            author: viewer.display_name().unwrap_or(ANONYMOUS).to_string(),
        })
    }

    /// Settle; returns true when the post should be re-fetched
    pub fn finish(&mut self, result: Result<(), RequestError>) -> bool {
        let ok = self.status.finish(result, &copy::COMMENT);
        if ok {
            self.text.clear();
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(name: &str) -> User {
        User { name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_whitespace_comment_sends_nothing() {
        let mut composer = CommentComposer::default();
        composer.set_text(" \n\t ");
        assert_eq!(composer.submit(Some(&viewer("Ada"))), None);
        assert_eq!(composer.status(), &Submission::Idle);
        assert_eq!(composer.banner(), None);
    }

    #[test]
    fn test_unauthenticated_viewer_sends_nothing() {
        let mut composer = CommentComposer::default();
        composer.set_text("Great post");
        assert_eq!(composer.submit(None), None);
        assert!(!composer.is_submitting());
    }

    #[test]
    fn test_author_falls_back_to_anonymous() {
        let mut composer = CommentComposer::default();
        composer.set_text("Hi");
        let comment = composer.submit(Some(&viewer(""))).unwrap();
        assert_eq!(comment.author, "Anonymous");
        assert_eq!(comment.content, "Hi");
    }

    #[test]
    fn test_success_clears_text_and_requests_refetch() {
        let mut composer = CommentComposer::default();
        composer.set_text("Hi");
        composer.submit(Some(&viewer("Ada"))).unwrap();
        assert!(composer.submit(Some(&viewer("Ada"))).is_none());
        assert!(composer.finish(Ok(())));
        assert_eq!(composer.text(), "");
        assert_eq!(composer.banner(), Some(Banner::Success("Comment posted successfully!".into())));
    }

    #[test]
    fn test_failure_keeps_text() {
        let mut composer = CommentComposer::default();
        composer.set_text("Hi");
        composer.submit(Some(&viewer("Ada"))).unwrap();
        let refetch = composer.finish(Err(RequestError::from_response(401, r#"{"message":"Not authorized"}"#)));
        assert!(!refetch);
        assert_eq!(composer.text(), "Hi");
        assert_eq!(composer.banner(), Some(Banner::Error("Not authorized".into())));
    }
}
