//! Projects Page
//!
//! Public list of projects, fetched once per mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::copy::PROJECTS_PAGE;
use portfolio_core::models::Project;
use portfolio_core::FetchState;

use crate::api;
use crate::components::{render_list, ProjectCard};
use crate::context::use_auth;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(FetchState::<Vec<Project>>::default());

    // Load on mount
    Effect::new(move |_| {
        state.update(FetchState::begin);
        let client = auth.client();
        spawn_local(async move {
            let result = api::list_projects(&client).await;
            match &result {
                Ok(projects) => log::debug!("[Projects] loaded {} projects", projects.len()),
                Err(e) => log::warn!("[Projects] load failed: {}", e),
            }
            state.update(|s| s.resolve(result, PROJECTS_PAGE.load_failed));
        });
    });

    view! {
        <div class="projects-page">
            <div class="page-header">
                <h1>"My Projects"</h1>
                <p>
                    "Here are some of the projects I've worked on. "
                    "Each project showcases different skills and technologies."
                </p>
            </div>
            {move || state.with(|s| {
                render_list(s.phase(), &PROJECTS_PAGE, "projects-grid", |project| view! {
                    <ProjectCard project=project />
                })
            })}
        </div>
    }
}
