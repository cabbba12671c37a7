//! Admin Console Scenario Tests
//!
//! Multi-step create/update/delete cycles against the console state.

#[cfg(test)]
mod tests {
    use crate::admin::{AdminConsole, AdminTab, Editor, Mutation, MutationKind};
    use crate::error::{RequestError, ValidationError};
    use crate::fetch::{FetchState, ListPhase};
    use crate::forms::ProjectForm;
    use crate::models::{BlogPost, Identity, Project, ProjectPayload};
    use crate::submission::Banner;

    fn project(id: &str, techs: &[&str]) -> Project {
        Project {
            identity: Identity::new(id),
            title: format!("Project {}", id),
            description: "Description".to_string(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn post(id: &str) -> BlogPost {
        BlogPost {
            identity: Identity::new(id),
            title: format!("Post {}", id),
            content: "Body".to_string(),
            ..Default::default()
        }
    }

    fn mounted_with_projects(projects: Vec<Project>) -> AdminConsole {
        let mut console = AdminConsole::new();
        assert_eq!(console.mount(), AdminTab::Projects);
        console.finish_fetch::<Project>(Ok(projects));
        console
    }

    fn server_error(message: &str) -> RequestError {
        RequestError::Status { status: 500, message: Some(message.to_string()) }
    }

    #[test]
    fn test_mount_fetches_projects_only() {
        let mut console = AdminConsole::new();
        console.mount();
        assert_eq!(console.projects.list(), &FetchState::Loading);
        assert_eq!(console.posts.list(), &FetchState::Idle);
    }

    #[test]
    fn test_create_builds_split_payload() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.open_create();
        console.projects.edit(|form| {
            form.title = "A".to_string();
            form.description = "B".to_string();
            form.technologies = "x, y , z".to_string();
        });

        let mutation = console.submit::<Project>().expect("create issued");
        assert_eq!(
            mutation,
            Mutation::Create(ProjectPayload {
                title: "A".to_string(),
                description: "B".to_string(),
                technologies: vec!["x".to_string(), "y".to_string(), "z".to_string()],
                ..Default::default()
            })
        );
        assert!(console.projects.is_pending());
    }

    #[test]
    fn test_successful_create_resets_editor_and_refetches() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.open_create();
        console.projects.edit(|form| {
            form.title = "A".to_string();
            form.description = "B".to_string();
        });
        let mutation = console.submit::<Project>().unwrap();

        let refetch = console.finish_mutation::<Project>(mutation.kind(), Ok(()));
        assert!(refetch);
        assert_eq!(console.projects.editor(), &Editor::Hidden);
        assert_eq!(console.projects.list(), &FetchState::Loading);
        assert!(!console.projects.is_pending());
        assert_eq!(console.banner, Some(Banner::Success("Project created successfully!".to_string())));

        console.finish_fetch::<Project>(Ok(vec![project("1", &[])]));
        assert_eq!(console.projects.list().len(), 1);
    }

    #[test]
    fn test_edit_round_trip_updates_target() {
        let existing = project("42", &["a", "b"]);
        let mut console = mounted_with_projects(vec![existing.clone()]);

        console.projects.begin_edit(&existing);
        assert_eq!(console.projects.editor().target(), Some("42"));
        assert_eq!(console.projects.editor().form().map(|f| f.technologies.as_str()), Some("a, b"));

        match console.submit::<Project>() {
            Some(Mutation::Update { id, payload }) => {
                assert_eq!(id, "42");
                assert_eq!(payload.technologies, vec!["a", "b"]);
            }
            other => panic!("expected update, got {:?}", other),
        }

        assert!(console.finish_mutation::<Project>(MutationKind::Update, Ok(())));
        assert_eq!(console.banner.as_ref().map(Banner::message), Some("Project updated successfully!"));
        assert_eq!(console.projects.editor().target(), None);
        assert!(!console.projects.editor().is_visible());
    }

    #[test]
    fn test_failed_save_preserves_buffer_and_target() {
        let existing = project("7", &["rust"]);
        let mut console = mounted_with_projects(vec![existing.clone()]);
        console.projects.begin_edit(&existing);
        console.projects.edit(|form| form.title = "Renamed".to_string());
        console.submit::<Project>().unwrap();

        let refetch = console.finish_mutation::<Project>(MutationKind::Update, Err(server_error("Title taken")));
        assert!(!refetch);
        assert_eq!(console.banner, Some(Banner::Error("Title taken".to_string())));
        assert_eq!(console.projects.editor().target(), Some("7"));
        assert_eq!(console.projects.editor().form().map(|f| f.title.as_str()), Some("Renamed"));
        assert_eq!(console.projects.list().len(), 1);

        // retry without re-entering data
        assert!(console.submit::<Project>().is_some());
        assert_eq!(console.banner, None);
    }

    #[test]
    fn test_failed_save_without_message_uses_fallback() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.open_create();
        console.projects.edit(|form| {
            form.title = "A".to_string();
            form.description = "B".to_string();
        });
        console.submit::<Project>().unwrap();
        console.finish_mutation::<Project>(MutationKind::Create, Err(RequestError::Transport("offline".into())));
        assert_eq!(console.banner, Some(Banner::Error("Failed to save project. Please try again.".to_string())));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut console = mounted_with_projects(vec![project("1", &[])]);
        assert_eq!(console.delete::<Project>("1", false), None);
        assert!(!console.projects.is_pending());

        let mutation = console.delete::<Project>("1", true);
        assert_eq!(mutation, Some(Mutation::Delete { id: "1".to_string() }));
    }

    #[test]
    fn test_delete_success_and_failure() {
        let mut console = mounted_with_projects(vec![project("1", &[])]);
        console.delete::<Project>("1", true).unwrap();
        assert!(console.finish_mutation::<Project>(MutationKind::Delete, Ok(())));
        assert_eq!(console.banner.as_ref().map(Banner::message), Some("Project deleted successfully!"));
        assert_eq!(console.projects.list(), &FetchState::Loading);

        console.finish_fetch::<Project>(Ok(vec![project("2", &[])]));
        console.delete::<Project>("2", true).unwrap();
        assert!(!console.finish_mutation::<Project>(MutationKind::Delete, Err(RequestError::Transport("x".into()))));
        assert_eq!(
            console.banner,
            Some(Banner::Error("Failed to delete project. Please try again.".to_string()))
        );
        assert_eq!(console.projects.list().len(), 1);
    }

    #[test]
    fn test_successful_delete_resets_editor() {
        let existing = project("1", &[]);
        let mut console = mounted_with_projects(vec![existing.clone(), project("2", &[])]);
        console.projects.begin_edit(&existing);
        console.delete::<Project>("2", true).unwrap();
        console.finish_mutation::<Project>(MutationKind::Delete, Ok(()));
        assert_eq!(console.projects.editor(), &Editor::Hidden);
    }

    #[test]
    fn test_validation_blocks_submit_and_skips_banner() {
        let mut console = mounted_with_projects(Vec::new());
        console.banner = Some(Banner::Success("Project created successfully!".to_string()));
        console.projects.open_create();
        console.projects.edit(|form| form.title = "Only title".to_string());

        assert!(console.submit::<Project>().is_none());
        assert_eq!(console.projects.invalid(), Some(&ValidationError::Required("Description")));
        assert!(!console.projects.is_pending());
        assert_eq!(console.banner.as_ref().map(Banner::is_error), Some(false));
    }

    #[test]
    fn test_no_duplicate_submit_while_pending() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.open_create();
        console.projects.edit(|form| {
            form.title = "A".to_string();
            form.description = "B".to_string();
        });
        assert!(console.submit::<Project>().is_some());
        assert!(console.submit::<Project>().is_none());
        assert!(console.delete::<Project>("1", true).is_none());
    }

    #[test]
    fn test_submit_without_form_does_nothing() {
        let mut console = mounted_with_projects(Vec::new());
        assert!(console.submit::<Project>().is_none());
    }

    #[test]
    fn test_cancel_clears_without_request() {
        let existing = project("3", &["a"]);
        let mut console = mounted_with_projects(vec![existing.clone()]);
        console.projects.begin_edit(&existing);
        console.projects.edit(|form| form.title = "changed".to_string());
        console.projects.cancel();
        assert_eq!(console.projects.editor(), &Editor::Hidden);
        assert!(!console.projects.is_pending());

        console.projects.open_create();
        assert_eq!(console.projects.editor(), &Editor::Creating(ProjectForm::default()));
    }

    #[test]
    fn test_toggle_form_acts_as_cancel_when_visible() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.toggle_form();
        assert!(console.projects.editor().is_visible());
        console.projects.edit(|form| form.title = "draft".to_string());
        console.projects.toggle_form();
        assert!(!console.projects.editor().is_visible());
        console.projects.toggle_form();
        assert_eq!(console.projects.editor().form(), Some(&ProjectForm::default()));
    }

    #[test]
    fn test_tab_switch_keeps_inactive_list() {
        let mut console = mounted_with_projects(vec![project("1", &[]), project("2", &[])]);

        assert_eq!(console.select_tab(AdminTab::Posts), AdminTab::Posts);
        assert_eq!(console.posts.list(), &FetchState::Loading);
        assert_eq!(console.projects.list().len(), 2);

        console.finish_fetch::<BlogPost>(Ok(vec![post("p1")]));
        assert!(matches!(console.posts.list().phase(), ListPhase::Items(items) if items.len() == 1));
        assert_eq!(console.projects.list().len(), 2);

        console.select_tab(AdminTab::Projects);
        assert_eq!(console.posts.list().len(), 1);
        assert_eq!(console.projects.list(), &FetchState::Loading);
    }

    #[test]
    fn test_tab_switch_clears_error_banner_only() {
        let mut console = mounted_with_projects(Vec::new());
        console.banner = Some(Banner::Error("boom".to_string()));
        console.select_tab(AdminTab::Posts);
        assert_eq!(console.banner, None);

        console.banner = Some(Banner::Success("ok".to_string()));
        console.select_tab(AdminTab::Projects);
        assert_eq!(console.banner, Some(Banner::Success("ok".to_string())));
    }

    #[test]
    fn test_panels_are_independent() {
        let mut console = mounted_with_projects(Vec::new());
        console.projects.open_create();
        console.select_tab(AdminTab::Posts);
        console.finish_fetch::<BlogPost>(Ok(vec![post("p1")]));
        console.posts.begin_edit(&post("p1"));

        assert!(matches!(console.projects.editor(), Editor::Creating(_)));
        assert_eq!(console.posts.editor().target(), Some("p1"));

        let mutation = console.submit::<BlogPost>().unwrap();
        assert_eq!(mutation.kind(), MutationKind::Update);
        console.finish_mutation::<BlogPost>(MutationKind::Update, Ok(()));
        assert_eq!(console.banner.as_ref().map(Banner::message), Some("Blog post updated successfully!"));
        assert!(console.projects.editor().is_visible());
    }

    #[test]
    fn test_record_without_id_cannot_be_edited_or_deleted() {
        let orphan: Project = serde_json::from_str(r#"{"title":"No id","description":"x"}"#).unwrap();
        assert_eq!(orphan.id(), "");
        let mut console = mounted_with_projects(vec![orphan.clone()]);

        console.projects.begin_edit(&orphan);
        assert_eq!(console.projects.editor(), &Editor::Hidden);

        assert_eq!(console.delete::<Project>("", true), None);
        assert_eq!(console.delete::<Project>("  ", true), None);
        assert!(!console.projects.is_pending());
    }

    #[test]
    fn test_mutation_finishing_on_inactive_tab_skips_refetch() {
        let mut console = mounted_with_projects(vec![project("1", &[]), project("2", &[])]);
        console.delete::<Project>("1", true).unwrap();
        console.select_tab(AdminTab::Posts);
        console.finish_fetch::<BlogPost>(Ok(vec![post("p1")]));

        assert!(!console.finish_mutation::<Project>(MutationKind::Delete, Ok(())));
        assert_eq!(console.banner.as_ref().map(Banner::message), Some("Project deleted successfully!"));
        assert_eq!(console.projects.list().len(), 2);
        assert!(!console.projects.is_pending());
        assert_eq!(console.posts.list().len(), 1);

        // switching back fetches fresh data
        console.select_tab(AdminTab::Projects);
        assert_eq!(console.projects.list(), &FetchState::Loading);
    }

    #[test]
    fn test_editor_locked_while_mutation_pending() {
        let existing = project("1", &[]);
        let mut console = mounted_with_projects(vec![existing.clone(), project("2", &[])]);
        console.delete::<Project>("2", true).unwrap();

        console.projects.begin_edit(&existing);
        assert_eq!(console.projects.editor(), &Editor::Hidden);
        console.projects.open_create();
        console.projects.toggle_form();
        assert_eq!(console.projects.editor(), &Editor::Hidden);

        console.finish_mutation::<Project>(MutationKind::Delete, Ok(()));
        console.projects.begin_edit(&existing);
        assert_eq!(console.projects.editor().target(), Some("1"));
    }

    #[test]
    fn test_admin_list_error_uses_admin_fallback() {
        let mut console = AdminConsole::new();
        console.mount();
        console.finish_fetch::<Project>(Err(RequestError::Transport("offline".into())));
        assert_eq!(console.projects.list().error(), Some("Failed to load data. Please try again."));
        assert!(console.banner.is_none());
    }
}
