//! Submission State Machine
//!
//! One-shot outbound form flows (contact, comment, login, register):
//! `Idle -> Submitting -> {Succeeded(banner), Failed(banner)}`. A settled
//! flow can be submitted again; a submitting one can't.

use crate::copy::FlowCopy;
use crate::error::{RequestError, ValidationError};
use crate::forms::{ContactForm, LoginForm, RegisterForm};
use crate::models::{ContactMessage, Credentials, Registration};

/// Transient message shown after a mutation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success(m) | Banner::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl Submission {
    /// Enter `Submitting`; false when a submission is already in flight
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Submission::Submitting;
        true
    }

    /// Settle, returning whether the request succeeded
    pub fn finish(&mut self, result: Result<(), RequestError>, copy: &FlowCopy) -> bool {
        match result {
            Ok(()) => {
                *self = Submission::Succeeded(copy.success.to_string());
                true
            }
            Err(err) => {
                log::debug!("submission failed: {}", err);
                *self = Submission::Failed(err.display_message(copy.failure));
                false
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn banner(&self) -> Option<Banner> {
        match self {
            Submission::Succeeded(m) => Some(Banner::Success(m.clone())),
            Submission::Failed(m) => Some(Banner::Error(m.clone())),
            _ => None,
        }
    }
}

/// A form that validates locally and produces a request body
pub trait OutboundForm: Clone + Default + PartialEq {
    type Body;

    fn validate(&self) -> Result<(), ValidationError>;
    fn body(&self) -> Self::Body;
}

impl OutboundForm for ContactForm {
    type Body = ContactMessage;

    fn validate(&self) -> Result<(), ValidationError> {
        ContactForm::validate(self)
    }

    fn body(&self) -> ContactMessage {
        self.to_message()
    }
}

impl OutboundForm for LoginForm {
    type Body = Credentials;

    fn validate(&self) -> Result<(), ValidationError> {
        LoginForm::validate(self)
    }

    fn body(&self) -> Credentials {
        self.to_credentials()
    }
}

impl OutboundForm for RegisterForm {
    type Body = Registration;

    fn validate(&self) -> Result<(), ValidationError> {
        RegisterForm::validate(self)
    }

    fn body(&self) -> Registration {
        self.to_registration()
    }
}

/// Form buffer plus its submission state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFlow<F> {
    pub form: F,
    status: Submission,
    invalid: Option<ValidationError>,
}

impl<F: OutboundForm> FormFlow<F> {
    pub fn status(&self) -> &Submission {
        &self.status
    }

    /// Validation problem from the last submit attempt
    pub fn invalid(&self) -> Option<&ValidationError> {
        self.invalid.as_ref()
    }

    /// Body to send, or `None` when invalid or already submitting
    pub fn submit(&mut self) -> Option<F::Body> {
        if self.status.is_submitting() {
            return None;
        }
        if let Err(err) = self.form.validate() {
            self.invalid = Some(err);
            return None;
        }
        self.invalid = None;
        self.status.begin();
        Some(self.form.body())
    }

    /// Settle; a success clears the buffer, a failure keeps it for retry
    pub fn finish(&mut self, result: Result<(), RequestError>, copy: &FlowCopy) -> bool {
        let ok = self.status.finish(result, copy);
        if ok {
            self.form = F::default();
        }
        ok
    }
}
