use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{ContentStore, Model, Post, StoredAsset};
use crate::config::SanityConfig;

const MODEL_PROJECTION: &str = r#"{ _id, name, "slug": slug.current, instagram, "mainImage": mainImage.asset->url, "gallery": gallery[].asset->url, stats, bio }"#;

const POST_PROJECTION: &str = r#"{ _id, title, "slug": slug.current, publishedAt, "mainImage": mainImage.asset->url, excerpt, body, language }"#;

/// Client for the Sanity HTTP API: GROQ queries for documents, the asset
/// endpoint for image uploads.
pub struct SanityClient {
    client: reqwest::Client,
    base_url: String,
    dataset: String,
    token: String,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, String> {
        let base_url = format!(
            "https://{}.api.sanity.io/v{}",
            config.project_id, config.api_version
        );
        Self::with_base_url(base_url, config.dataset.clone(), config.token.clone())
    }

    /// Point the client at an explicit base URL. Used by tests and
    /// API-compatible endpoints.
    pub fn with_base_url(
        base_url: String,
        dataset: String,
        token: String,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url,
            dataset,
            token,
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, String> {
        let url = format!("{}/data/query/{}", self.base_url, self.dataset);

        let mut request = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("query", groq)]);

        // GROQ parameters travel as $name query args with JSON-encoded values
        for (name, value) in params {
            let encoded = serde_json::to_string(value)
                .map_err(|e| format!("Failed to encode query param {name}: {e}"))?;
            request = request.query(&[(format!("${name}"), encoded)]);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| format!("Sanity query request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = truncate_body(resp.text().await.unwrap_or_default());
            return Err(format!("Sanity query returned {status}: {body}"));
        }

        let body: QueryResponse<T> = resp
            .json()
            .await
            .map_err(|e| format!("Failed to decode Sanity response: {e}"))?;
        Ok(body.result)
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<StoredAsset, String> {
        let url = format!("{}/assets/images/{}", self.base_url, self.dataset);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("content-type", content_type)
            .query(&[("filename", filename)])
            .body(content)
            .send()
            .await
            .map_err(|e| format!("Sanity upload request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = truncate_body(resp.text().await.unwrap_or_default());
            return Err(format!("Sanity upload returned {status}: {body}"));
        }

        let body: UploadResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to decode Sanity upload response: {e}"))?;

        Ok(StoredAsset {
            id: body.document.id,
            url: body.document.url,
        })
    }

    async fn list_models(&self) -> Result<Vec<Model>, String> {
        let groq = format!(r#"*[_type == "model"] | order(name asc) {MODEL_PROJECTION}"#);
        self.query(&groq, &[]).await
    }

    async fn get_model(&self, slug: &str) -> Result<Option<Model>, String> {
        let groq =
            format!(r#"*[_type == "model" && slug.current == $slug][0] {MODEL_PROJECTION}"#);
        self.query(&groq, &[("slug", slug)]).await
    }

    async fn list_posts(&self, language: Option<&str>) -> Result<Vec<Post>, String> {
        match language {
            Some(lang) => {
                let groq = format!(
                    r#"*[_type == "post" && language == $lang] | order(publishedAt desc) {POST_PROJECTION}"#
                );
                self.query(&groq, &[("lang", lang)]).await
            }
            None => {
                let groq =
                    format!(r#"*[_type == "post"] | order(publishedAt desc) {POST_PROJECTION}"#);
                self.query(&groq, &[]).await
            }
        }
    }

    async fn get_post(&self, slug: &str) -> Result<Option<Post>, String> {
        let groq = format!(r#"*[_type == "post" && slug.current == $slug][0] {POST_PROJECTION}"#);
        self.query(&groq, &[("slug", slug)]).await
    }
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct UploadResponse {
    document: AssetDocument,
}

#[derive(Deserialize)]
struct AssetDocument {
    #[serde(rename = "_id")]
    id: String,
    url: String,
}

fn truncate_body(body: String) -> String {
    body.chars().take(1024).collect()
}
