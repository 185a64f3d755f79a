use super::*;
use crate::fake::{FakeForm, FakeNode};

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn accepts_common_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(is_valid_email("x@y.z"));
}

#[test]
fn rejects_missing_at() {
    assert!(!is_valid_email("not-an-email"));
}

#[test]
fn rejects_missing_tld_segment() {
    assert!(!is_valid_email("user@domain"));
    assert!(!is_valid_email("user@domain."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn rejects_empty_local_part() {
    assert!(!is_valid_email("@domain.com"));
}

#[test]
fn rejects_inner_whitespace() {
    assert!(!is_valid_email("us er@domain.com"));
    assert!(!is_valid_email("user@do main.com"));
    assert!(!is_valid_email(" a@b.co"));
}

#[test]
fn rejects_empty_input() {
    assert!(!is_valid_email(""));
}

#[test]
fn extra_at_signs_are_tolerated() {
    assert!(is_valid_email("@a@b.c"));
    assert!(is_valid_email("a@b@c.d"));
}

#[test]
fn dot_before_at_does_not_count_as_tld() {
    assert!(!is_valid_email("first.last@domain"));
}

#[test]
fn non_ascii_characters_are_allowed() {
    assert!(is_valid_email("josé@exämple.com"));
    assert!(!is_valid_email("josé@exämple"));
}

// =============================================================
// FormValidator
// =============================================================

fn validator(form: &FakeForm, policy: SubmitPolicy) -> (FakeNode, FormValidator<FakeForm, FakeNode>) {
    let status = FakeNode::detached("formMsg");
    let v = FormValidator::new(form.clone(), status.clone(), policy);
    (status, v)
}

#[test]
fn invalid_email_is_rejected_with_warning() {
    let form = FakeForm::with_email("not-an-email");
    let (status, v) = validator(&form, SubmitPolicy::PassThrough);

    let outcome = v.on_submit();

    assert_eq!(outcome, Submission::Rejected);
    assert!(outcome.prevents_default());
    assert_eq!(status.text(), "Please enter a valid email.");
    assert_eq!(status.style("color").as_deref(), Some("var(--warning)"));
    assert_eq!(form.resets(), 0);
}

#[test]
fn missing_tld_is_rejected() {
    let form = FakeForm::with_email("user@domain");
    let (status, v) = validator(&form, SubmitPolicy::Simulate);
    assert_eq!(v.on_submit(), Submission::Rejected);
    assert_eq!(status.text(), INVALID_EMAIL_MESSAGE);
    assert_eq!(form.email().as_deref(), Some("user@domain"));
}

#[test]
fn form_without_email_field_is_rejected() {
    let form = FakeForm::without_email();
    let (status, v) = validator(&form, SubmitPolicy::PassThrough);
    assert_eq!(v.on_submit(), Submission::Rejected);
    assert_eq!(status.text(), INVALID_EMAIL_MESSAGE);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let form = FakeForm::with_email("   a@b.co \n");
    let (_, v) = validator(&form, SubmitPolicy::PassThrough);
    assert_eq!(v.on_submit(), Submission::Forwarded);
}

#[test]
fn pass_through_lets_browser_submit() {
    let form = FakeForm::with_email("a@b.co");
    let (status, v) = validator(&form, SubmitPolicy::PassThrough);

    let outcome = v.on_submit();

    assert_eq!(outcome, Submission::Forwarded);
    assert!(!outcome.prevents_default());
    assert_eq!(status.text(), "Message sent! ✅");
    assert_eq!(status.style("color").as_deref(), Some("var(--success)"));
    assert_eq!(form.resets(), 0);
    assert_eq!(form.email().as_deref(), Some("a@b.co"));
}

#[test]
fn simulate_cancels_and_resets() {
    let form = FakeForm::with_email("a@b.co");
    let (status, v) = validator(&form, SubmitPolicy::Simulate);

    let outcome = v.on_submit();

    assert_eq!(outcome, Submission::Simulated);
    assert!(outcome.prevents_default());
    assert_eq!(status.text(), SENT_MESSAGE);
    assert_eq!(form.resets(), 1);
    assert_eq!(form.email().as_deref(), Some(""));
}

#[test]
fn retry_after_failure_succeeds() {
    let form = FakeForm::with_email("oops");
    let (status, v) = validator(&form, SubmitPolicy::PassThrough);
    assert_eq!(v.on_submit(), Submission::Rejected);
    assert_eq!(v.on_submit(), Submission::Rejected);

    form.set_email("a@b.co");
    assert_eq!(v.on_submit(), Submission::Forwarded);
    assert_eq!(status.text(), SENT_MESSAGE);
    assert_eq!(status.style("color").as_deref(), Some(SUCCESS_COLOR));
}

#[test]
fn validator_reports_policy() {
    let form = FakeForm::with_email("a@b.co");
    let (_, v) = validator(&form, SubmitPolicy::Simulate);
    assert_eq!(v.policy(), SubmitPolicy::Simulate);
}

// =============================================================
// SubmitPolicy
// =============================================================

#[test]
fn submit_policy_default_is_pass_through() {
    assert_eq!(SubmitPolicy::default(), SubmitPolicy::PassThrough);
}

#[test]
fn submit_policy_deserializes_snake_case() {
    assert_eq!(serde_json::from_str::<SubmitPolicy>("\"simulate\"").unwrap(), SubmitPolicy::Simulate);
    assert_eq!(
        serde_json::from_str::<SubmitPolicy>("\"pass_through\"").unwrap(),
        SubmitPolicy::PassThrough
    );
    assert!(serde_json::from_str::<SubmitPolicy>("\"Simulate\"").is_err());
}
