//! Banner Component
//!
//! Transient success/error message shown after a submission or mutation.

use leptos::prelude::*;
use portfolio_core::Banner;

#[component]
pub fn BannerMessage(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|banner| {
            let class = if banner.is_error() { "alert alert-error" } else { "alert alert-success" };
            view! { <div class=class role="status">{banner.message().to_string()}</div> }
        })
    }
}
