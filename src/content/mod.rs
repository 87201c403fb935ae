pub mod sanity;

pub use sanity::SanityClient;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A stored binary asset and the durable URL it can be reached at. Once
/// uploaded, the asset belongs to the store; we keep only the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredAsset {
    pub id: String,
    pub url: String,
}

/// A model profile from the CMS, as projected by the directory query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub instagram: Option<String>,
    pub main_image: Option<String>,
    // The projection yields null, not a missing key, for an empty gallery
    pub gallery: Option<Vec<String>>,
    pub stats: Option<ModelStats>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStats {
    pub age: Option<u32>,
    pub height: Option<String>,
    pub bust: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
}

/// A blog post from the CMS. The body is Portable Text, passed through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published_at: Option<String>,
    pub main_image: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<serde_json::Value>,
    pub language: Option<String>,
}

/// The hosted content platform: binary asset uploads for the application
/// form, document queries for the model directory and blog.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<StoredAsset, String>;

    async fn list_models(&self) -> Result<Vec<Model>, String>;

    async fn get_model(&self, slug: &str) -> Result<Option<Model>, String>;

    async fn list_posts(&self, language: Option<&str>) -> Result<Vec<Post>, String>;

    async fn get_post(&self, slug: &str) -> Result<Option<Post>, String>;
}
