use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use talentform::config::{Config, UploadPolicy};
use talentform::content::{ContentStore, Model, Post, StoredAsset};
use talentform::email::{EmailDispatcher, OutgoingEmail};

/// A running test server with recording stand-ins for the content store
/// and the mailer.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<RecordingStore>,
    pub mailer: Arc<RecordingMailer>,
}

/// Content store double: records every upload call and can be told to
/// start failing at a given call index.
pub struct RecordingStore {
    /// (filename, content_type, size) per upload call, in call order
    pub uploads: Mutex<Vec<(String, String, usize)>>,
    fail_from: AtomicUsize,
    pub models: Mutex<Vec<Model>>,
    pub posts: Mutex<Vec<Post>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_from: AtomicUsize::new(usize::MAX),
            models: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    /// Fail every upload call whose zero-based index is >= `index`.
    pub fn fail_from(&self, index: usize) {
        self.fail_from.store(index, Ordering::SeqCst);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentStore for RecordingStore {
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<StoredAsset, String> {
        let index = {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push((filename.to_string(), content_type.to_string(), content.len()));
            uploads.len() - 1
        };
        if index >= self.fail_from.load(Ordering::SeqCst) {
            return Err("induced upload failure".to_string());
        }
        Ok(StoredAsset {
            id: format!("image-{index}"),
            url: format!("https://cdn.test/image-{index}.jpg"),
        })
    }

    async fn list_models(&self) -> Result<Vec<Model>, String> {
        Ok(self.models.lock().unwrap().clone())
    }

    async fn get_model(&self, slug: &str) -> Result<Option<Model>, String> {
        Ok(self
            .models
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.slug == slug)
            .cloned())
    }

    async fn list_posts(&self, language: Option<&str>) -> Result<Vec<Post>, String> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| language.is_none() || p.language.as_deref() == language)
            .cloned()
            .collect())
    }

    async fn get_post(&self, slug: &str) -> Result<Option<Post>, String> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }
}

/// Mailer double: records sent messages, or fails on demand.
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailDispatcher for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("induced send failure".to_string());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 30 * 1024 * 1024,
        trusted_proxies: Vec::new(),
        log_level: "info".to_string(),
        admin_email: "agency@test.com".to_string(),
        upload: UploadPolicy::default(),
        sanity: None,
        resend: None,
    }
}

/// Spawn the app with both collaborators wired to recording doubles.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(RecordingStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    spawn(
        Some(store.clone() as Arc<dyn ContentStore>),
        Some(mailer.clone() as Arc<dyn EmailDispatcher>),
        store,
        mailer,
    )
    .await
}

/// Spawn the app with no collaborators at all, as when credentials are
/// missing from the environment.
pub async fn spawn_app_unconfigured() -> TestApp {
    let store = Arc::new(RecordingStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    spawn(None, None, store, mailer).await
}

/// Spawn the app with a mailer but no content store.
pub async fn spawn_app_without_store() -> TestApp {
    let store = Arc::new(RecordingStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    spawn(
        None,
        Some(mailer.clone() as Arc<dyn EmailDispatcher>),
        store,
        mailer,
    )
    .await
}

async fn spawn(
    content_store: Option<Arc<dyn ContentStore>>,
    dispatcher: Option<Arc<dyn EmailDispatcher>>,
    store: Arc<RecordingStore>,
    mailer: Arc<RecordingMailer>,
) -> TestApp {
    let app = talentform::build_app(test_config(), content_store, dispatcher);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
        mailer,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// A complete, valid set of form fields.
    pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Jo"),
            ("email", "jo@example.com"),
            ("instagram", "@jo"),
            ("age", "19"),
            ("status", "beginner"),
            ("message", "I would love to work with your agency."),
            ("isAdult", "on"),
        ]
    }

    /// Post a multipart application. `files` are (filename, content type,
    /// content) triples attached as `photo` parts.
    pub async fn submit(
        &self,
        fields: &[(&str, &str)],
        files: &[(&str, &str, Vec<u8>)],
    ) -> (Value, StatusCode) {
        self.submit_lang(None, fields, files).await
    }

    pub async fn submit_lang(
        &self,
        lang: Option<&str>,
        fields: &[(&str, &str)],
        files: &[(&str, &str, Vec<u8>)],
    ) -> (Value, StatusCode) {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }
        for (filename, content_type, content) in files {
            let part = Part::bytes(content.clone())
                .file_name(filename.to_string())
                .mime_str(content_type)
                .expect("valid mime type");
            form = form.part("photo", part);
        }

        let mut url = self.url("/api/v1/applications");
        if let Some(lang) = lang {
            url = format!("{url}?lang={lang}");
        }

        let resp = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }
}
