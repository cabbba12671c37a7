//! Admin Dashboard
//!
//! Guarded CRUD console: a tab selector over the projects and blog posts
//! panels, with one shared banner.

mod actions;
mod panel;
mod posts;
mod projects;

use leptos::prelude::*;
use leptos_router::components::A;
use portfolio_core::admin::{AdminConsoleStoreFields, AdminTab};

use crate::components::BannerMessage;
use crate::context::use_auth;
use crate::store::provide_admin_store;
use posts::PostsPanel;
use projects::ProjectsPanel;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();

    move || {
        if auth.is_authenticated() {
            view! { <AdminConsoleView /> }.into_any()
        } else {
            view! {
                <div class="admin-guard">
                    <h1>"Admin Dashboard"</h1>
                    <p>
                        "Please "
                        <A href="/login">"log in"</A>
                        " to manage projects and blog posts."
                    </p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn AdminConsoleView() -> impl IntoView {
    let auth = use_auth();
    let store = provide_admin_store();

    // Fetch the initially active tab
    if let Some(tab) = store.try_update(|c| c.mount()) {
        actions::fetch_tab(store, auth, tab);
    }

    let active = Memo::new(move |_| store.tab().get());
    let banner = Memo::new(move |_| store.banner().get());

    view! {
        <div class="admin-dashboard">
            <h1>"Admin Dashboard"</h1>
            <BannerMessage banner=banner />

            <div class="admin-tabs">
                {AdminTab::ALL.into_iter().map(|tab| view! {
                    <button
                        class=move || if active.get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| actions::select_tab(store, auth, tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match active.get() {
                AdminTab::Projects => view! { <ProjectsPanel /> }.into_any(),
                AdminTab::Posts => view! { <PostsPanel /> }.into_any(),
            }}
        </div>
    }
}
