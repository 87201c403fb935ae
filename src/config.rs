use std::net::IpAddr;

use ipnet::IpNet;

/// Image types the application form accepts.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
    pub admin_email: String,
    pub upload: UploadPolicy,
    pub sanity: Option<SanityConfig>,
    pub resend: Option<ResendConfig>,
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
}

/// Limits applied to one application's photo batch. The whole batch is
/// checked against these before any upload starts.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_total_bytes: u64,
    pub accepted_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: 4,
            max_total_bytes: 25 * 1024 * 1024,
            accepted_types: ACCEPTED_IMAGE_TYPES,
        }
    }
}

impl UploadPolicy {
    pub fn accepts(&self, content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        self.accepted_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(essence))
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("TALENTFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TALENTFORM_HOST: {e}"))?;

        let port: u16 = env_or("TALENTFORM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid TALENTFORM_PORT: {e}"))?;

        // Must admit a full 25 MiB photo batch plus multipart framing.
        let max_body_size: usize = env_or("TALENTFORM_MAX_BODY_SIZE", "31457280")
            .parse()
            .map_err(|e| format!("Invalid TALENTFORM_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("TALENTFORM_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid TALENTFORM_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("TALENTFORM_LOG_LEVEL", "info");

        let admin_email = env_or("ADMIN_EMAIL", "onboarding@resend.dev");

        let sanity = match (
            std::env::var("SANITY_PROJECT_ID").ok(),
            std::env::var("SANITY_API_TOKEN").ok(),
        ) {
            (Some(project_id), Some(token)) => Some(SanityConfig {
                project_id,
                dataset: env_or("SANITY_DATASET", "production"),
                api_version: env_or("SANITY_API_VERSION", "2024-01-01"),
                token,
            }),
            _ => None,
        };

        let resend = std::env::var("RESEND_API_KEY")
            .ok()
            .map(|api_key| ResendConfig {
                api_key,
                from: env_or("RESEND_FROM", "Talentform <onboarding@resend.dev>"),
            });

        Ok(Config {
            host,
            port,
            max_body_size,
            trusted_proxies,
            log_level,
            admin_email,
            upload: UploadPolicy::default(),
            sanity,
            resend,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
