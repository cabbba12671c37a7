//! Blog Post Card Component
//!
//! Summary card on the blog list: excerpt (or truncated content), date, tags
//! and a link to the detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use portfolio_core::models::BlogPost;
use portfolio_core::text::format_date;

use super::TagList;

#[component]
pub fn BlogPostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id());
    let summary = post.summary();
    let image = post.image_url().map(str::to_string);
    let date = post.created_at.as_ref().map(format_date);
    let BlogPost { title, tags, .. } = post;
    let alt = title.clone();

    view! {
        <div class="blog-card">
            {image.map(|src| view! { <img src=src alt=alt class="blog-image" /> })}
            <div class="blog-content">
                <h3>{title}</h3>
                {date.map(|date| view! { <p class="blog-date">{date}</p> })}
                <p class="blog-excerpt">{summary}</p>
                <TagList tags=tags class="blog-tags" />
                <A href=href>"Read More"</A>
            </div>
        </div>
    }
}
