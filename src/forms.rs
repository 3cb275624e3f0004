//! Form types and validation for the share and comment endpoints.
//!
//! Fields are `Option<String>` so that a missing or blank submission
//! produces a field-level "required" error rather than a deserialization
//! failure; handlers re-render the page with [`FieldErrors`] attached.

use crate::models::NewComment;
use serde::Deserialize;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Share-a-post form: sender, recipient, optional free-text comment.
/// Transient; never persisted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EmailPostForm {
    #[validate(
        required(message = "This field is required."),
        length(max = 25, message = "Ensure this value has at most 25 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,

    /// Recipient address
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub to: Option<String>,

    /// Optional note included in the email body
    pub comments: Option<String>,
}

/// Comment submission form, mirroring the Comment entity's constraints.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(
        required(message = "This field is required."),
        length(max = 80, message = "Ensure this value has at most 80 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub body: Option<String>,
}

impl EmailPostForm {
    /// Trim whitespace and demote blank fields to missing, then validate.
    pub fn validated(self) -> (Self, Option<FieldErrors>) {
        let form = Self {
            name: normalize(self.name),
            email: normalize(self.email),
            to: normalize(self.to),
            comments: normalize(self.comments),
        };
        let errors = form.validate().err().map(collect_errors);
        (form, errors)
    }
}

impl CommentForm {
    /// Trim whitespace and demote blank fields to missing, then validate.
    pub fn validated(self) -> (Self, Option<FieldErrors>) {
        let form = Self {
            name: normalize(self.name),
            email: normalize(self.email),
            body: normalize(self.body),
        };
        let errors = form.validate().err().map(collect_errors);
        (form, errors)
    }

    /// Insert payload for a form that passed validation.
    ///
    /// Returns `None` if any required field is still missing.
    pub fn into_new_comment(self) -> Option<NewComment> {
        Some(NewComment {
            name: self.name?,
            email: self.email?,
            body: self.body?,
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn collect_errors(errors: ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = out.entry(field.to_string()).or_default();
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            messages.push(message);
        }
    }
    out
}
