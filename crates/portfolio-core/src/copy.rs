//! User-Facing Messages
//!
//! Banner, empty-state and fallback wording, kept per call site.

/// Messages of one admin console panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCopy {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
}

/// Messages of a read-only list or detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCopy {
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
}

/// Banners of a one-shot form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowCopy {
    pub success: &'static str,
    pub failure: &'static str,
}

pub const PROJECT_PANEL: PanelCopy = PanelCopy {
    created: "Project created successfully!",
    updated: "Project updated successfully!",
    deleted: "Project deleted successfully!",
    save_failed: "Failed to save project. Please try again.",
    delete_failed: "Failed to delete project. Please try again.",
    confirm_delete: "Are you sure you want to delete this project?",
    empty: "No projects yet. Create your first project!",
    load_failed: "Failed to load data. Please try again.",
};

pub const POST_PANEL: PanelCopy = PanelCopy {
    created: "Blog post created successfully!",
    updated: "Blog post updated successfully!",
    deleted: "Blog post deleted successfully!",
    save_failed: "Failed to save blog post. Please try again.",
    delete_failed: "Failed to delete blog post. Please try again.",
    confirm_delete: "Are you sure you want to delete this blog post?",
    empty: "No blog posts yet. Create your first post!",
    load_failed: "Failed to load data. Please try again.",
};

pub const PROJECTS_PAGE: PageCopy = PageCopy {
    loading: "Loading projects...",
    empty: "No projects to display yet.",
    load_failed: "Failed to load projects. Please try again later.",
};

pub const BLOG_PAGE: PageCopy = PageCopy {
    loading: "Loading blog posts...",
    empty: "No blog posts to display yet.",
    load_failed: "Failed to load blog posts. Please try again later.",
};

pub const BLOG_DETAIL: PageCopy = PageCopy {
    loading: "Loading blog post...",
    empty: "Blog post not found.",
    load_failed: "Failed to load blog post. Please try again later.",
};

pub const COMMENT: FlowCopy = FlowCopy {
    success: "Comment posted successfully!",
    failure: "Failed to post comment. Please try again.",
};

pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

pub const CONTACT: FlowCopy = FlowCopy {
    success: "Message sent successfully! I will get back to you soon.",
    failure: "Failed to send message. Please try again.",
};

pub const LOGIN: FlowCopy = FlowCopy {
    success: "Welcome back!",
    failure: "Login failed. Please check your credentials.",
};

pub const REGISTER: FlowCopy = FlowCopy {
    success: "Account created successfully!",
    failure: "Registration failed. Please try again.",
};
