use anyhow::{bail, Context, Result};

const DEFAULT_LOCATION: &str = "us-central1";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Application configuration loaded from environment variables.
///
/// Vertex AI settings are optional: without them the service still starts and
/// every product is scored by the keyword heuristic.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub vertex: Option<VertexConfig>,
    /// Max products evaluated at once. 1 means strictly sequential.
    pub annotation_concurrency: usize,
    pub model_timeout_secs: u64,
}

/// Out-of-band settings for the Vertex AI generative model.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    pub project_id: String,
    pub location: String,
    pub access_token: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let annotation_concurrency = parse_env("ANNOTATION_CONCURRENCY", 1usize)?;
        if annotation_concurrency == 0 {
            bail!("ANNOTATION_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vertex: VertexConfig::from_env(),
            annotation_concurrency,
            model_timeout_secs: parse_env("MODEL_TIMEOUT_SECS", 60u64)?,
        })
    }
}

impl VertexConfig {
    /// Returns `None` when the project or credentials are missing.
    pub fn from_env() -> Option<Self> {
        let project_id = optional_env("GOOGLE_CLOUD_PROJECT");
        let access_token = optional_env("GOOGLE_ACCESS_TOKEN");

        let (Some(project_id), Some(access_token)) = (project_id, access_token) else {
            return None;
        };

        let location =
            optional_env("GOOGLE_CLOUD_LOCATION").unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let api_base = optional_env("VERTEX_API_BASE")
            .unwrap_or_else(|| format!("https://{location}-aiplatform.googleapis.com"));

        Some(VertexConfig {
            project_id,
            access_token,
            model: optional_env("VERTEX_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base,
            location,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
