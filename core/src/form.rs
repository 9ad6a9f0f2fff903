//! Form state and validation for the post editor.
//!
//! # Design
//! `FormState` is a plain value with pure transition methods; nothing here
//! touches the network. The controller calls `prepare_submit` to learn what
//! to send and `reset` once the call has been attempted.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Post, PostId, PostInput, PostPatch};

/// Editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Judul,
    Deskripsi,
}

impl Field {
    /// Wire/field name as used in request bodies and error maps.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Judul => "judul",
            Field::Deskripsi => "deskripsi",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const JUDUL_REQUIRED: &str = "Judul tidak boleh kosong";
pub const DESKRIPSI_REQUIRED: &str = "Deskripsi tidak boleh kosong";

/// Field name → human-readable message. Empty means valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Which verb a submit triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Replace,
    PartialUpdate,
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Post",
            FormMode::Replace => "Update Post",
            FormMode::PartialUpdate => "Update Post Partially",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Replace => "Update",
            FormMode::PartialUpdate => "Update Partially",
        }
    }
}

/// In-progress copy of a post held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Absent in create mode.
    pub id: Option<PostId>,
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            title: post.title.clone(),
            description: post.description.clone(),
        }
    }

    fn to_input(&self) -> PostInput {
        PostInput {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Presence check only. Whitespace counts as content.
pub fn validate(draft: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.title.is_empty() {
        errors.insert(Field::Judul, JUDUL_REQUIRED.to_string());
    }
    if draft.description.is_empty() {
        errors.insert(Field::Deskripsi, DESKRIPSI_REQUIRED.to_string());
    }
    errors
}

/// A network mutation, planned but not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(PostInput),
    Replace(PostId, PostInput),
    Patch(PostId, PostPatch),
    Delete(PostId),
}

impl Mutation {
    /// Short verb used in log lines.
    pub fn action(&self) -> &'static str {
        match self {
            Mutation::Create(_) => "create",
            Mutation::Replace(..) => "update",
            Mutation::Patch(..) => "partially update",
            Mutation::Delete(_) => "delete",
        }
    }
}

/// Rejected submit: validation failed, or an edit mode lost its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    Invalid(FieldErrors),
    MissingId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: Draft,
    pub errors: FieldErrors,
}

impl FormState {
    /// Create mode, empty draft, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Judul => self.draft.title = value,
            Field::Deskripsi => self.draft.description = value,
        }
    }

    /// Seed the draft from a list entry and switch to an edit mode.
    pub fn select(&mut self, post: &Post, mode: FormMode) {
        self.mode = mode;
        self.draft = Draft::from_post(post);
        self.errors.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate the draft and plan the mutation for the current mode.
    ///
    /// On rejection the errors are stored on the form and nothing else
    /// changes. On success the errors are cleared; the draft and mode stay
    /// until the caller resets after the call.
    pub fn prepare_submit(&mut self) -> Result<Mutation, SubmitRejection> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejection::Invalid(errors));
        }
        self.errors.clear();

        let input = self.draft.to_input();
        match self.mode {
            FormMode::Create => Ok(Mutation::Create(input)),
            FormMode::Replace => {
                let id = self.draft.id.clone().ok_or(SubmitRejection::MissingId)?;
                Ok(Mutation::Replace(id, input))
            }
            FormMode::PartialUpdate => {
                let id = self.draft.id.clone().ok_or(SubmitRejection::MissingId)?;
                Ok(Mutation::Patch(id, PostPatch::from(input)))
            }
        }
    }
}
