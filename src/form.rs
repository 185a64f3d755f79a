//! Email check on form submission with inline status reporting.
//!
//! The check is deliberately shallow: `local@domain.tld` shape, no spaces.
//! What happens to a valid submission is decided by [`SubmitPolicy`], which
//! is chosen once in configuration and never mixed.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Deserialize;

use crate::consts::{COLOR_PROPERTY, INVALID_EMAIL_MESSAGE, SENT_MESSAGE, SUCCESS_COLOR, WARNING_COLOR};
use crate::dom::{DomNode, EmailForm};

/// What to do with a submission that passes validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Let the browser submit to the form's `action` endpoint.
    #[default]
    PassThrough,
    /// Keep the data local: cancel the submission, report success, reset.
    Simulate,
}

/// Outcome of one submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Email failed validation; nothing was sent.
    Rejected,
    /// Email passed; the browser carries on with the real submission.
    Forwarded,
    /// Email passed; the submission was cancelled and the form reset.
    Simulated,
}

impl Submission {
    /// Whether the host must cancel the browser's default submit action.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Forwarded)
    }
}

/// Whether `input` looks like `local@domain.tld`.
///
/// Every character must be non-whitespace, and there must be an `@` with at
/// least one character before it, followed later by a `.` with at least one
/// character on each side.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    // Earliest usable '@' leaves the most room for "domain.tld".
    let Some(at) = input.char_indices().skip(1).find(|&(_, c)| c == '@').map(|(i, _)| i) else {
        return false;
    };
    let domain = &input[at + 1..];
    domain
        .char_indices()
        .skip(1)
        .any(|(i, c)| c == '.' && i + 1 < domain.len())
}

pub struct FormValidator<F, N> {
    form: F,
    status: N,
    policy: SubmitPolicy,
}

impl<F: EmailForm, N: DomNode> FormValidator<F, N> {
    pub fn new(form: F, status: N, policy: SubmitPolicy) -> Self {
        Self { form, status, policy }
    }

    #[must_use]
    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    /// Validate the email field and report the result in the status slot.
    pub fn on_submit(&self) -> Submission {
        let raw = self.form.email_value().unwrap_or_default();
        let email = raw.trim();
        if !is_valid_email(email) {
            self.report(INVALID_EMAIL_MESSAGE, WARNING_COLOR);
            return Submission::Rejected;
        }
        self.report(SENT_MESSAGE, SUCCESS_COLOR);
        match self.policy {
            SubmitPolicy::PassThrough => Submission::Forwarded,
            SubmitPolicy::Simulate => {
                self.form.reset();
                Submission::Simulated
            }
        }
    }

    fn report(&self, message: &str, color: &str) {
        self.status.write_text(message);
        self.status.write_style(COLOR_PROPERTY, color);
    }
}
