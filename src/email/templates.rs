use chrono::Utc;

use crate::submission::fields::SubmissionFields;

/// Render the notification mail for one application. Photo links are the
/// asset store URLs collected during upload, in submission order.
pub fn render_application(fields: &SubmissionFields, photo_urls: &[String]) -> String {
    let photos = if photo_urls.is_empty() {
        "<p><em>Keine Fotos angehängt.</em></p>".to_string()
    } else {
        let links: String = photo_urls
            .iter()
            .enumerate()
            .map(|(i, url)| format!(r#"<p><a href="{url}">Foto {n}</a></p>"#, n = i + 1))
            .collect();
        format!("<h3>Fotos:</h3>\n    {links}")
    };

    let received_at = Utc::now().format("%Y-%m-%d %H:%M UTC");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Neue Bewerbung</h2>
    <p>&#9989; <strong>Alter bestätigt (18+)</strong></p>
    <hr/>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Instagram:</strong> {instagram}</p>
    <p><strong>Status:</strong> {status}</p>
    <p><strong>Alter:</strong> {age}</p>
    <br/>
    <h3>Nachricht:</h3>
    <p>{message}</p>
    {photos}
    <p style="color: #666; font-size: 12px;">Eingegangen am {received_at}</p>
</body>
</html>"#,
        name = esc(&fields.name),
        email = esc(&fields.email),
        instagram = esc(&fields.instagram),
        status = esc(&fields.status),
        age = esc(&fields.age),
        message = esc(&fields.message),
    )
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
