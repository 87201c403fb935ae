use std::collections::HashMap;

use axum::http::HeaderMap;
use serde_json::Value;

use super::attachments::Attachment;
use super::fields::SubmissionFields;

/// Form field carrying the photo file parts.
pub const PHOTO_FIELD: &str = "photo";

/// Hidden trap field. Real browsers never fill it.
pub const HONEYPOT_FIELD: &str = "company_website";

#[derive(Debug, Default)]
pub struct ParsedSubmission {
    pub fields: SubmissionFields,
    pub attachments: Vec<Attachment>,
}

/// Parse a non-multipart request body based on Content-Type. JSON and
/// urlencoded submissions carry no attachments.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<ParsedSubmission, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        parse_json(body)
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        parse_json(body).or_else(|_| parse_form_urlencoded(body))
    }
}

fn parse_json(body: &[u8]) -> Result<ParsedSubmission, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "Expected a JSON object".to_string())?;

    let mut fields = SubmissionFields::default();
    for (key, value) in obj {
        match value {
            Value::String(s) => assign(&mut fields, key, s.clone()),
            Value::Bool(b) => assign(&mut fields, key, b.to_string()),
            Value::Number(n) => assign(&mut fields, key, n.to_string()),
            _ => {}
        }
    }

    Ok(ParsedSubmission {
        fields,
        attachments: Vec::new(),
    })
}

fn parse_form_urlencoded(body: &[u8]) -> Result<ParsedSubmission, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut fields = SubmissionFields::default();
    for (key, value) in pairs {
        assign(&mut fields, &key, value);
    }

    Ok(ParsedSubmission {
        fields,
        attachments: Vec::new(),
    })
}

/// Parse multipart form data using multer. Text parts become fields,
/// `photo` file parts become attachments; empty file parts (a file input
/// submitted with nothing selected) are discarded.
pub async fn parse_multipart(
    headers: &HeaderMap,
    body: bytes::Bytes,
) -> Result<ParsedSubmission, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut parsed = ParsedSubmission::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();

        if name == PHOTO_FIELD && field.file_name().is_some() {
            let filename = field.file_name().unwrap_or(PHOTO_FIELD).to_string();
            let content_type = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let content = field
                .bytes()
                .await
                .map_err(|e| format!("File read error: {e}"))?;
            if content.is_empty() {
                continue;
            }
            parsed.attachments.push(Attachment {
                filename,
                content_type,
                content,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| format!("Field read error: {e}"))?;
            assign(&mut parsed.fields, &name, value);
        }
    }

    Ok(parsed)
}

fn assign(fields: &mut SubmissionFields, name: &str, value: String) {
    match name {
        "name" => fields.name = value,
        "email" => fields.email = value,
        "instagram" => fields.instagram = value,
        "age" => fields.age = value,
        "status" => fields.status = value,
        "message" => fields.message = value,
        // Checkbox: present as "on" in form posts, true in JSON
        "isAdult" => fields.is_adult = matches!(value.as_str(), "on" | "true" | "1"),
        HONEYPOT_FIELD => fields.honeypot = value,
        // Unknown fields are ignored
        _ => {}
    }
}
