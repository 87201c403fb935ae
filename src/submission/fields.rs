use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::Language;

/// Per-field validation failures, keyed by the incoming form field name.
/// BTreeMap keeps the key order deterministic for clients and tests.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw form fields of one application, exactly as posted.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFields {
    pub name: String,
    pub email: String,
    pub instagram: String,
    pub age: String,
    pub status: String,
    pub message: String,
    pub is_adult: bool,
    pub honeypot: String,
}

/// Where the applicant currently stands. Closed set; anything else is a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Beginner,
    Experienced,
    Pro,
}

impl Status {
    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "beginner" => Some(Status::Beginner),
            "experienced" => Some(Status::Experienced),
            "pro" => Some(Status::Pro),
            _ => None,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validate all fields, accumulating every violation instead of stopping
/// at the first. Pure function of its input: the same fields produce the
/// same errors every time.
///
/// `age` is deliberately only checked for presence. The form's 18+ gate is
/// the explicit attestation checkbox, not this free-text field.
pub fn validate(fields: &SubmissionFields, lang: Language) -> FieldErrors {
    let s = lang.strings();
    let mut errors = FieldErrors::new();

    if fields.name.chars().count() < 2 {
        push(&mut errors, "name", s.name_too_short);
    }
    if !EMAIL_RE.is_match(&fields.email) {
        push(&mut errors, "email", s.email_invalid);
    }
    if fields.instagram.is_empty() {
        push(&mut errors, "instagram", s.instagram_required);
    }
    if fields.age.is_empty() {
        push(&mut errors, "age", s.age_required);
    }
    if Status::parse(&fields.status).is_none() {
        push(&mut errors, "status", s.status_required);
    }
    if fields.message.chars().count() < 10 {
        push(&mut errors, "message", s.message_too_short);
    }
    if !fields.is_adult {
        push(&mut errors, "isAdult", s.adult_required);
    }

    errors
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
