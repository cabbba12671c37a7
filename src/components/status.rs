//! Loading / Error Placeholders

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="loading">{message}</div> }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-message">{message}</div> }
}
