use std::sync::Arc;

use crate::stylist::pipeline::AnnotationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the model gateway, initialized once at startup.
    pub pipeline: Arc<AnnotationPipeline>,
}
