//! Project Form Buffer

use super::{join_list, split_list, FormBuffer};
use crate::error::{require, ValidationError};
use crate::models::{Project, ProjectPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Comma-delimited while editing
    pub technologies: String,
    pub link: String,
}

impl FormBuffer for ProjectForm {
    type Record = Project;
    type Payload = ProjectPayload;

    fn from_record(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone().unwrap_or_default(),
            technologies: join_list(&project.technologies),
            link: project.link.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "Title")?;
        require(&self.description, "Description")
    }

    fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            technologies: split_list(&self.technologies),
            link: self.link.clone(),
        }
    }
}
