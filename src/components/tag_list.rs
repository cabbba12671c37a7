//! Tag List Component
//!
//! Renders a sequence of free-text tags as chips; nothing when empty.

use leptos::prelude::*;

#[component]
pub fn TagList(tags: Vec<String>, #[prop(default = "tags")] class: &'static str) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div class=class>
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
        }
    })
}
