use std::collections::BTreeMap;

use serde::Serialize;

use crate::email::{OutgoingEmail, templates};
use crate::i18n::Language;
use crate::state::SharedState;
use crate::submission::attachments::{self, Attachment};
use crate::submission::fields::{self, FieldErrors, SubmissionFields};
use crate::submission::honeypot;
use crate::submission::metadata::ClientMeta;

/// The outcome of one application run. Exactly one of these is produced
/// per request; nothing else leaves the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResult {
    pub succeeded: bool,
    pub message: String,
    pub field_errors: FieldErrors,
}

impl SubmissionResult {
    fn success(lang: Language) -> Self {
        Self {
            succeeded: true,
            message: lang.strings().success.to_string(),
            field_errors: BTreeMap::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    fn invalid(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            field_errors,
        }
    }
}

/// Run one application through the pipeline: honeypot gate, field
/// validation, batch policy, photo uploads, notification email. Each
/// stage either proceeds or returns; no stage is retried.
pub async fn run(
    state: &SharedState,
    meta: &ClientMeta,
    lang: Language,
    fields: SubmissionFields,
    attachments: Vec<Attachment>,
) -> SubmissionResult {
    let s = lang.strings();

    // Trap field filled: answer exactly like a success and do nothing.
    if honeypot::is_spam(&fields.honeypot) {
        tracing::warn!(
            ip = %meta.ip,
            user_agent = %meta.user_agent,
            "Honeypot triggered, returning faked success"
        );
        return SubmissionResult::success(lang);
    }

    // Accumulate every field violation, never just the first.
    let errors = fields::validate(&fields, lang);
    if !errors.is_empty() {
        return SubmissionResult::invalid(s.missing_fields, errors);
    }

    // The whole batch is checked before any byte goes out.
    if let Err(violation) = attachments::check_batch(&attachments, &state.config.upload, lang) {
        let mut field_errors = FieldErrors::new();
        field_errors.insert("photo".to_string(), vec![violation.field_error]);
        return SubmissionResult::invalid(violation.message, field_errors);
    }

    let mut uploaded_urls = Vec::with_capacity(attachments.len());
    if !attachments.is_empty() {
        let Some(store) = &state.content_store else {
            tracing::error!("Content store not configured, cannot accept photo uploads");
            return SubmissionResult::failure(s.server_error);
        };

        // Sequential, in input order. A failure aborts the rest and the
        // email stage; assets already stored are not rolled back.
        for attachment in &attachments {
            match store
                .upload_image(
                    &attachment.filename,
                    &attachment.content_type,
                    attachment.content.clone(),
                )
                .await
            {
                Ok(asset) => uploaded_urls.push(asset.url),
                Err(e) => {
                    tracing::error!(
                        filename = %attachment.filename,
                        "Photo upload failed: {e}"
                    );
                    return SubmissionResult::failure(s.upload_failed);
                }
            }
        }
    }

    let Some(mailer) = &state.mailer else {
        tracing::error!("Email dispatcher not configured, application cannot be delivered");
        return SubmissionResult::failure(s.server_error);
    };

    let email = OutgoingEmail {
        to: state.config.admin_email.clone(),
        reply_to: Some(fields.email.clone()),
        subject: format!("Bewerbung: {} (18+ confirmed)", fields.name),
        html: templates::render_application(&fields, &uploaded_urls),
    };

    if let Err(e) = mailer.send(&email).await {
        tracing::error!("Failed to dispatch application email: {e}");
        return SubmissionResult::failure(s.send_failed);
    }

    tracing::info!(
        ip = %meta.ip,
        photos = uploaded_urls.len(),
        "Application forwarded to {}",
        state.config.admin_email
    );
    SubmissionResult::success(lang)
}
