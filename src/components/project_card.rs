//! Project Card Component

use leptos::prelude::*;
use portfolio_core::models::Project;

use super::TagList;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let image = project.image_url().map(str::to_string);
    let link = project.link_url().map(str::to_string);
    let Project { title, description, technologies, .. } = project;
    let alt = title.clone();

    view! {
        <div class="project-card">
            {image.map(|src| view! { <img src=src alt=alt class="project-image" /> })}
            <div class="project-content">
                <h3>{title}</h3>
                <p>{description}</p>
                <TagList tags=technologies class="project-technologies" />
                {link.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="project-link">
                        "View Project"
                    </a>
                })}
            </div>
        </div>
    }
}
