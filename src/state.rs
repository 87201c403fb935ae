use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::email::EmailDispatcher;

pub type SharedState = Arc<AppState>;

/// Collaborators are injected at construction, never reached through
/// globals. A `None` means the credentials were absent at startup; the
/// pipeline reports that as a generic internal error without touching
/// user data.
pub struct AppState {
    pub config: Config,
    pub content_store: Option<Arc<dyn ContentStore>>,
    pub mailer: Option<Arc<dyn EmailDispatcher>>,
}
