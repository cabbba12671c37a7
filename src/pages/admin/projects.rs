//! Projects Tab

use leptos::prelude::*;
use portfolio_core::forms::join_list;
use portfolio_core::models::Project;

use super::panel::{resource_panel, PanelLabels};
use crate::components::TextField;
use crate::context::use_auth;
use crate::store::{use_admin_store, AdminStore};

const LABELS: PanelLabels = PanelLabels {
    heading: "Projects",
    add: "Add New Project",
    add_heading: "Add New Project",
    edit_heading: "Edit Project",
    create: "Create Project",
    update: "Update Project",
    columns: ["Title", "Description", "Technologies"],
};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    resource_panel::<Project>(use_admin_store(), use_auth(), &LABELS, fields, cells)
}

fn cells(project: &Project) -> [String; 3] {
    [project.title.clone(), project.admin_preview(), join_list(&project.technologies)]
}

fn fields(store: AdminStore) -> AnyView {
    let (title, set_title) = panel_field!(store, Project, title);
    let (description, set_description) = panel_field!(store, Project, description);
    let (image, set_image) = panel_field!(store, Project, image);
    let (technologies, set_technologies) = panel_field!(store, Project, technologies);
    let (link, set_link) = panel_field!(store, Project, link);

    view! {
        <TextField label="Title *" value=title on_input=set_title />
        <TextField label="Description *" value=description on_input=set_description rows=3 />
        <TextField label="Image URL" value=image on_input=set_image />
        <TextField
            label="Technologies (comma-separated)"
            value=technologies
            on_input=set_technologies
            placeholder="React, Node.js, MongoDB"
        />
        <TextField label="Project Link" value=link on_input=set_link />
    }
    .into_any()
}
