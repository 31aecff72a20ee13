//! Model gateway — one bounded call to the generative model per product.
//!
//! The gateway is built once at startup and injected into the pipeline as
//! `Arc<dyn ModelGateway>`. Initialization never fails: a missing or invalid
//! Vertex AI configuration leaves the gateway in the unavailable state, which
//! callers treat as "use the heuristic".

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::VertexConfig;
use crate::llm_client::prompts::JSON_ONLY_DIRECTIVE;
use crate::llm_client::{LlmError, VertexClient};
use crate::stylist::models::{Product, StyleContext};
use crate::stylist::prompts::{STYLIST_SYSTEM, STYLIST_USER_TEMPLATE};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Model call failed: {0}")]
    Call(#[from] LlmError),
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Cached result of startup initialization.
    fn is_available(&self) -> bool;

    /// Returns the model's raw, unmodified reply for one product.
    async fn generate(&self, ctx: &StyleContext, product: &Product)
        -> Result<String, GatewayError>;
}

/// Gateway backed by Vertex AI Gemini.
pub struct VertexGateway {
    client: Result<VertexClient, String>,
    timeout: Duration,
}

impl VertexGateway {
    pub fn initialize(config: Option<&VertexConfig>, timeout: Duration) -> Self {
        let client = match config {
            Some(config) => VertexClient::new(config, timeout).map_err(|e| e.to_string()),
            None => Err("GOOGLE_CLOUD_PROJECT / GOOGLE_ACCESS_TOKEN not set".to_string()),
        };

        match (&client, config) {
            (Ok(c), Some(config)) => info!(
                "Vertex AI initialized for project {} in {} (model: {})",
                config.project_id,
                config.location,
                c.model()
            ),
            (Err(reason), _) => warn!(
                "Vertex AI initialization failed: {reason}. Falling back to heuristic scoring."
            ),
            _ => {}
        }

        Self { client, timeout }
    }
}

#[async_trait]
impl ModelGateway for VertexGateway {
    fn is_available(&self) -> bool {
        self.client.is_ok()
    }

    async fn generate(
        &self,
        ctx: &StyleContext,
        product: &Product,
    ) -> Result<String, GatewayError> {
        let client = self
            .client
            .as_ref()
            .map_err(|reason| GatewayError::Unavailable(reason.clone()))?;

        let prompt = build_prompt(ctx, product);

        match tokio::time::timeout(self.timeout, client.generate(&prompt)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(GatewayError::Call(LlmError::Timeout(self.timeout))),
        }
    }
}

/// Combines the system instruction, the per-product instruction and the JSON directive.
pub fn build_prompt(ctx: &StyleContext, product: &Product) -> String {
    let user_prompt = fill_template(
        STYLIST_USER_TEMPLATE,
        &[
            ("style_profile", ctx.style_profile.as_str()),
            ("wardrobe", ctx.wardrobe.as_str()),
            ("product_name", product.name.as_str()),
            ("product_description", product.description.as_str()),
        ],
    );

    format!("{STYLIST_SYSTEM}\n\n{user_prompt}\n\n{JSON_ONLY_DIRECTIVE}")
}

/// Single-pass placeholder substitution, so user text containing `{...}` is
/// embedded verbatim and never re-expanded.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replaced = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
