//! Contact Form Buffer

use crate::error::{require, require_email, ValidationError};
use crate::models::ContactMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Name")?;
        require_email(&self.email)?;
        require(&self.subject, "Subject")?;
        require(&self.message, "Message")
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: " ada@example.com ".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_message() {
        let form = filled();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_message().email, "ada@example.com");
    }

    #[test]
    fn test_each_field_is_required() {
        let mut form = filled();
        form.subject.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Subject")));
        let mut form = filled();
        form.email = "nope".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }
}
