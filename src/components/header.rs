//! Site Header Component
//!
//! Navigation bar; the account links depend on the session.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_: leptos::ev::MouseEvent| {
        auth.logout();
        navigate("/", Default::default());
    };

    let account_links = move || {
        if auth.is_authenticated() {
            let logout = logout.clone();
            view! {
                <li><A href="/admin">"Admin Dashboard"</A></li>
                <li><button class="logout-btn" on:click=logout>"Logout"</button></li>
            }
            .into_any()
        } else {
            view! {
                <li><A href="/login">"Login"</A></li>
                <li><A href="/register">"Register"</A></li>
            }
            .into_any()
        }
    };

    view! {
        <header class="header">
            <nav class="navbar">
                <div class="nav-brand">
                    <A href="/">"My Portfolio"</A>
                </div>
                <ul class="nav-links">
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/projects">"Projects"</A></li>
                    <li><A href="/blog">"Blog"</A></li>
                    <li><A href="/contact">"Contact"</A></li>
                    {account_links}
                </ul>
            </nav>
        </header>
    }
}
