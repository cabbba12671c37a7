//! Login / Register Form Buffers

use crate::error::{require, require_email, ValidationError};
use crate::models::{Credentials, Registration};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email(&self.email)?;
        require(&self.password, "Password")
    }

    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Name")?;
        require_email(&self.email)?;
        require(&self.password, "Password")?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn to_registration(&self) -> Registration {
        Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let form = LoginForm { email: "a@b.c".to_string(), password: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::Required("Password")));
    }

    #[test]
    fn test_register_password_rules() {
        let mut form = RegisterForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "12345".to_string(),
            confirm_password: "12345".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort(6)));
        form.password = "123456".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm_password = "123456".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_registration().name, "Ada");
    }
}
