//! Turns a free-form model reply into a validated `Assessment`.
//!
//! `parse_assessment` is the pure extraction step and reports failure;
//! `interpret` owns the fallback decision and always yields an assessment.

use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::stylist::gateway::{GatewayError, ModelGateway};
use crate::stylist::heuristic;
use crate::stylist::models::{Assessment, Product, Rating, StyleContext};

const FENCE: &str = "```";
const DEFAULT_REASON: &str = "Analysis completed.";

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("Malformed model output: {0}")]
    Malformed(String),
}

/// Asks the model for an assessment and falls back to the keyword heuristic on
/// any gateway failure or uninterpretable reply. Never fails.
pub async fn interpret(
    gateway: &dyn ModelGateway,
    ctx: &StyleContext,
    product: &Product,
) -> Assessment {
    if !gateway.is_available() {
        warn!(
            "Model not available, using fallback scoring for product {}",
            product.id
        );
        return heuristic::score(ctx, product);
    }

    let raw = match gateway.generate(ctx, product).await {
        Ok(raw) => raw,
        Err(GatewayError::Unavailable(reason)) => {
            warn!("Model unavailable ({reason}), using fallback scoring");
            return heuristic::score(ctx, product);
        }
        Err(e) => {
            warn!("Error calling model for product {}: {e}", product.id);
            return heuristic::score(ctx, product);
        }
    };

    match parse_assessment(&raw) {
        Ok(assessment) => assessment,
        Err(e) => {
            error!("{e}. Response text: {raw}");
            heuristic::score(ctx, product)
        }
    }
}

/// Strips fences, parses the JSON object and normalizes its fields.
///
/// Missing or out-of-range ratings become `Medium`; a missing reason becomes a
/// generic message. Anything that is not a JSON object is `Malformed`.
pub fn parse_assessment(raw: &str) -> Result<Assessment, InterpretError> {
    let cleaned = strip_code_fences(raw);

    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| InterpretError::Malformed(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| InterpretError::Malformed("expected a JSON object".to_string()))?;

    let reason = match object.get("reason") {
        None => DEFAULT_REASON.to_string(),
        Some(Value::String(reason)) => reason.clone(),
        Some(other) => {
            return Err(InterpretError::Malformed(format!(
                "reason must be a string, got {other}"
            )))
        }
    };

    Ok(Assessment {
        style_match: normalize_rating(object.get("style_match")),
        wardrobe_compatibility: normalize_rating(object.get("wardrobe_compatibility")),
        reason,
    })
}

fn normalize_rating(value: Option<&Value>) -> Rating {
    value
        .and_then(Value::as_str)
        .and_then(Rating::from_label)
        .unwrap_or(Rating::Medium)
}

/// Removes a surrounding ```lang ... ``` block, or a stray trailing fence.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        let body = match rest.find(FENCE) {
            Some(end) => &rest[..end],
            None => rest,
        };
        // language tag such as "json"
        let body = body.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        return body.trim();
    }

    text.strip_suffix(FENCE).map(str::trim).unwrap_or(text)
}
