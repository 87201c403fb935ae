use bytes::Bytes;

use crate::config::UploadPolicy;
use crate::i18n::Language;

/// One posted photo. Owned by the pipeline for the duration of the
/// request; after a successful upload only the store's URL is kept.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub content: Bytes,
}

impl Attachment {
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A batch-policy violation, reported as one error under the `photo`
/// field plus a top-level user message.
#[derive(Debug)]
pub struct PolicyViolation {
    pub message: String,
    pub field_error: String,
}

/// Check the whole batch against the upload policy: count, then each
/// file's type, then the summed size. Nothing may be uploaded until all
/// three checks pass, so a rejection can never leave partial uploads
/// behind.
pub fn check_batch(
    attachments: &[Attachment],
    policy: &UploadPolicy,
    lang: Language,
) -> Result<(), PolicyViolation> {
    let s = lang.strings();

    if attachments.is_empty() {
        return Ok(());
    }

    if attachments.len() > policy.max_files {
        return Err(PolicyViolation {
            message: s.too_many_files.to_string(),
            field_error: s.max_images.to_string(),
        });
    }

    for attachment in attachments {
        if !policy.accepts(&attachment.content_type) {
            return Err(PolicyViolation {
                message: format!("{}: {}", s.unsupported_type, attachment.filename),
                field_error: s.only_images.to_string(),
            });
        }
    }

    let total: u64 = attachments.iter().map(Attachment::size).sum();
    if total > policy.max_total_bytes {
        return Err(PolicyViolation {
            message: s.total_too_large.to_string(),
            field_error: s.max_total_size.to_string(),
        });
    }

    Ok(())
}
