pub mod resend;
pub mod templates;

pub use resend::ResendMailer;

use async_trait::async_trait;

/// One notification message to the agency inbox.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// The hosted transactional email service. Exactly one send is attempted
/// per successful pipeline run; failures are terminal for that request.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String>;
}
