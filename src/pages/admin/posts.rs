//! Blog Posts Tab

use leptos::prelude::*;
use portfolio_core::forms::join_list;
use portfolio_core::models::BlogPost;

use super::panel::{resource_panel, PanelLabels};
use crate::components::TextField;
use crate::context::use_auth;
use crate::store::{use_admin_store, AdminStore};

const LABELS: PanelLabels = PanelLabels {
    heading: "Blog Posts",
    add: "Add New Post",
    add_heading: "Add New Blog Post",
    edit_heading: "Edit Blog Post",
    create: "Create Post",
    update: "Update Post",
    columns: ["Title", "Excerpt", "Tags"],
};

#[component]
pub fn PostsPanel() -> impl IntoView {
    resource_panel::<BlogPost>(use_admin_store(), use_auth(), &LABELS, fields, cells)
}

fn cells(post: &BlogPost) -> [String; 3] {
    [post.title.clone(), post.admin_preview(), join_list(&post.tags)]
}

fn fields(store: AdminStore) -> AnyView {
    let (title, set_title) = panel_field!(store, BlogPost, title);
    let (content, set_content) = panel_field!(store, BlogPost, content);
    let (excerpt, set_excerpt) = panel_field!(store, BlogPost, excerpt);
    let (image, set_image) = panel_field!(store, BlogPost, image);
    let (tags, set_tags) = panel_field!(store, BlogPost, tags);
    let (author, set_author) = panel_field!(store, BlogPost, author);

    view! {
        <TextField label="Title *" value=title on_input=set_title />
        <TextField label="Content *" value=content on_input=set_content rows=6 />
        <TextField
            label="Excerpt"
            value=excerpt
            on_input=set_excerpt
            placeholder="Short summary for the blog list"
            rows=2
        />
        <TextField label="Image URL" value=image on_input=set_image />
        <TextField
            label="Tags (comma-separated)"
            value=tags
            on_input=set_tags
            placeholder="JavaScript, Tutorial, Web Development"
        />
        <TextField label="Author" value=author on_input=set_author />
    }
    .into_any()
}
