//! Resource Panel
//!
//! One resource's slice of the admin console: list cache, editor and the
//! mutation currently in flight.

use crate::error::{RequestError, ValidationError};
use crate::fetch::FetchState;
use crate::forms::FormBuffer;
use crate::resource::{PayloadOf, Resource};
use crate::submission::Banner;

/// Form visibility and edit mode, as one value
#[derive(Debug, Clone, PartialEq)]
pub enum Editor<F> {
    Hidden,
    /// Form shown, no edit target: submit creates
    Creating(F),
    /// Form shown for an existing record: submit updates `target`
    Editing { target: String, form: F },
}

impl<F> Default for Editor<F> {
    fn default() -> Self {
        Editor::Hidden
    }
}

impl<F> Editor<F> {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Editor::Hidden)
    }

    /// Edit target, `None` in create mode or when hidden
    pub fn target(&self) -> Option<&str> {
        match self {
            Editor::Editing { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Editor::Hidden => None,
            Editor::Creating(form) | Editor::Editing { form, .. } => Some(form),
        }
    }

    fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            Editor::Hidden => None,
            Editor::Creating(form) | Editor::Editing { form, .. } => Some(form),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Write request to issue against a resource
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<P> {
    Create(P),
    Update { id: String, payload: P },
    Delete { id: String },
}

impl<P> Mutation<P> {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update { .. } => MutationKind::Update,
            Mutation::Delete { .. } => MutationKind::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePanel<R: Resource> {
    list: FetchState<Vec<R>>,
    editor: Editor<R::Form>,
    invalid: Option<ValidationError>,
    pending: Option<MutationKind>,
}

impl<R: Resource> Default for ResourcePanel<R> {
    fn default() -> Self {
        Self {
            list: FetchState::Idle,
            editor: Editor::Hidden,
            invalid: None,
            pending: None,
        }
    }
}

impl<R: Resource> ResourcePanel<R> {
    pub fn list(&self) -> &FetchState<Vec<R>> {
        &self.list
    }

    pub fn editor(&self) -> &Editor<R::Form> {
        &self.editor
    }

    /// Validation problem from the last submit attempt
    pub fn invalid(&self) -> Option<&ValidationError> {
        self.invalid.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin_fetch(&mut self) {
        self.list.begin();
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<R>, RequestError>) {
        self.list.resolve(result, R::COPY.load_failed);
    }

    /// Reveal an empty create form; no-op when a form is already shown or a
    /// mutation is in flight
    pub fn open_create(&mut self) {
        if !self.editor.is_visible() && self.pending.is_none() {
            self.editor = Editor::Creating(R::Form::default());
        }
    }

    /// Header button: opens the create form, or cancels when one is shown
    pub fn toggle_form(&mut self) {
        if self.editor.is_visible() {
            self.cancel();
        } else {
            self.open_create();
        }
    }

    /// Load a record into the buffer and make it the edit target.
    ///
    /// Refused while a mutation is in flight and for records without an id.
    pub fn begin_edit(&mut self, record: &R) {
        if self.pending.is_some() {
            return;
        }
        let target = record.record_id();
        if target.trim().is_empty() {
            log::warn!("cannot edit {} record without id", R::COLLECTION);
            return;
        }
        self.invalid = None;
        self.editor = Editor::Editing {
            target: target.to_string(),
            form: R::Form::from_record(record),
        };
    }

    /// Apply a keystroke-level change to the visible buffer
    pub fn edit(&mut self, change: impl FnOnce(&mut R::Form)) {
        if let Some(form) = self.editor.form_mut() {
            change(form);
        }
    }

    /// Drop buffer and edit target without any request
    pub fn cancel(&mut self) {
        self.editor = Editor::Hidden;
        self.invalid = None;
    }

    /// Create or update request for the visible buffer.
    ///
    /// `None` when no form is shown, the buffer fails validation, or a
    /// mutation is already in flight.
    pub fn submit(&mut self) -> Option<Mutation<PayloadOf<R>>> {
        if self.pending.is_some() {
            return None;
        }
        let form = self.editor.form()?;
        if let Err(err) = form.validate() {
            self.invalid = Some(err);
            return None;
        }
        self.invalid = None;
        let payload = form.to_payload();
        let mutation = match self.editor.target() {
            Some(id) => Mutation::Update { id: id.to_string(), payload },
            None => Mutation::Create(payload),
        };
        self.pending = Some(mutation.kind());
        Some(mutation)
    }

    /// Delete request, only after an affirmative confirmation and for a
    /// non-empty id
    pub fn delete(&mut self, id: &str, confirmed: bool) -> Option<Mutation<PayloadOf<R>>> {
        if !confirmed || self.pending.is_some() {
            return None;
        }
        if id.trim().is_empty() {
            log::warn!("cannot delete {} record without id", R::COLLECTION);
            return None;
        }
        self.pending = Some(MutationKind::Delete);
        Some(Mutation::Delete { id: id.to_string() })
    }

    /// Settle a mutation.
    ///
    /// Success resets the editor; re-fetching the list is up to the caller.
    /// Failure keeps buffer and edit target.
    pub fn finish_mutation(&mut self, kind: MutationKind, result: Result<(), RequestError>) -> Banner {
        self.pending = None;
        let copy = R::COPY;
        match result {
            Ok(()) => {
                self.cancel();
                Banner::Success(
                    match kind {
                        MutationKind::Create => copy.created,
                        MutationKind::Update => copy.updated,
                        MutationKind::Delete => copy.deleted,
                    }
                    .to_string(),
                )
            }
            Err(err) => {
                log::debug!("{:?} against {} failed: {}", kind, R::COLLECTION, err);
                let fallback = match kind {
                    MutationKind::Delete => copy.delete_failed,
                    _ => copy.save_failed,
                };
                Banner::Error(err.display_message(fallback))
            }
        }
    }
}
