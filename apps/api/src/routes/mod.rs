pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::stylist::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/personalize-with-wardrobe",
            post(handlers::handle_personalize),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::stylist::gateway::VertexGateway;
    use crate::stylist::pipeline::AnnotationPipeline;

    fn offline_router() -> Router {
        let gateway = Arc::new(VertexGateway::initialize(None, Duration::from_secs(1)));
        build_router(AppState {
            pipeline: Arc::new(AnnotationPipeline::new(gateway, 1)),
        })
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/personalize-with-wardrobe")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_uninitialized_model() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(offline_router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_initialized"], false);
    }

    #[tokio::test]
    async fn test_personalize_annotates_with_heuristic_when_offline() {
        let (status, body) = send(
            offline_router(),
            post_json(json!({
                "style_profile": "vintage bohemian",
                "wardrobe": "black denim pants",
                "product_list": [
                    {"id": 1, "name": "Floral Vintage Dress", "description": "bohemian style dress", "price": 59.5},
                    {"id": 2, "name": "Dark Selvedge Denim Jeans", "description": "Classic straight-fit jeans", "price": 89.99}
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["price"], 59.5);
        assert_eq!(items[0]["stylist_notes"]["style_match"], "High");
        assert_eq!(items[1]["id"], 2);
        // "denim" is 1 of 3 wardrobe tokens
        assert_eq!(items[1]["stylist_notes"]["style_match"], "Low");
        assert_eq!(items[1]["stylist_notes"]["wardrobe_compatibility"], "High");
    }

    #[tokio::test]
    async fn test_personalize_rejects_empty_product_list() {
        let (status, body) = send(
            offline_router(),
            post_json(json!({
                "style_profile": "minimal",
                "wardrobe": "white tee",
                "product_list": []
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "product_list cannot be empty");
    }

    #[tokio::test]
    async fn test_personalize_rejects_negative_price() {
        let (status, body) = send(
            offline_router(),
            post_json(json!({
                "style_profile": "minimal",
                "wardrobe": "white tee",
                "product_list": [{"id": 4, "name": "Tee", "description": "cotton", "price": -3.0}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
