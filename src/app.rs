//! Portfolio Frontend App
//!
//! Router shell: header plus one page per route. The auth capability is
//! provided here for every page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Header;
use crate::context::AuthContext;
use crate::pages::{
    AdminDashboard, BlogDetailPage, BlogPage, ContactPage, HomePage, LoginPage, NotFoundPage, ProjectsPage,
    RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AuthContext::new());

    view! {
        <Router>
            <Header />
            <main class="main-content">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:id") view=BlogDetailPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/admin") view=AdminDashboard />
                </Routes>
            </main>
            <footer class="footer">
                <p>"© My Portfolio. All rights reserved."</p>
            </footer>
        </Router>
    }
}
