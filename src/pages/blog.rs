//! Blog Page
//!
//! Public list of posts as summary cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::copy::BLOG_PAGE;
use portfolio_core::models::BlogPost;
use portfolio_core::FetchState;

use crate::api;
use crate::components::{render_list, BlogPostCard};
use crate::context::use_auth;

#[component]
pub fn BlogPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(FetchState::<Vec<BlogPost>>::default());

    Effect::new(move |_| {
        state.update(FetchState::begin);
        let client = auth.client();
        spawn_local(async move {
            let result = api::list_posts(&client).await;
            match &result {
                Ok(posts) => log::debug!("[Blog] loaded {} posts", posts.len()),
                Err(e) => log::warn!("[Blog] load failed: {}", e),
            }
            state.update(|s| s.resolve(result, BLOG_PAGE.load_failed));
        });
    });

    view! {
        <div class="blog-page">
            <div class="page-header">
                <h1>"Blog"</h1>
                <p>"Thoughts, tutorials, and insights about web development and technology."</p>
            </div>
            {move || state.with(|s| {
                render_list(s.phase(), &BLOG_PAGE, "blog-grid", |post| view! {
                    <BlogPostCard post=post />
                })
            })}
        </div>
    }
}
