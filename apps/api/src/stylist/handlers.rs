//! Axum route handlers for the stylist API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::stylist::models::{AnnotatedProduct, Product, StyleContext};

#[derive(Debug, Deserialize)]
pub struct PersonalizeRequest {
    pub style_profile: String,
    pub wardrobe: String,
    pub product_list: Vec<Product>,
}

/// POST /personalize-with-wardrobe
///
/// Annotates every product with a stylist assessment, in request order.
pub async fn handle_personalize(
    State(state): State<AppState>,
    Json(request): Json<PersonalizeRequest>,
) -> Result<Json<Vec<AnnotatedProduct>>, AppError> {
    validate_prices(&request.product_list)?;

    let ctx = StyleContext {
        style_profile: request.style_profile,
        wardrobe: request.wardrobe,
    };

    let annotated = state.pipeline.annotate(ctx, request.product_list).await?;

    Ok(Json(annotated))
}

fn validate_prices(products: &[Product]) -> Result<(), AppError> {
    match products
        .iter()
        .find(|p| !p.price.is_finite() || p.price < 0.0)
    {
        Some(p) => Err(AppError::Validation(format!(
            "product {} has an invalid price: {}",
            p.id, p.price
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: i64, price: f64) -> Product {
        Product {
            id,
            name: "Wool Beanie".to_string(),
            description: "Warm gray wool beanie".to_string(),
            price,
        }
    }

    #[test]
    fn test_validate_prices_accepts_zero_and_positive() {
        assert!(validate_prices(&[priced(1, 0.0), priced(2, 19.99)]).is_ok());
    }

    #[test]
    fn test_validate_prices_rejects_negative() {
        let err = validate_prices(&[priced(1, 5.0), priced(2, -1.0)]).unwrap_err();
        assert!(err.to_string().contains("product 2"));
    }

    #[test]
    fn test_request_deserialization() {
        let json = serde_json::json!({
            "style_profile": "vintage bohemian",
            "wardrobe": "black denim pants",
            "product_list": [
                {"id": 1, "name": "Floral Vintage Dress", "description": "bohemian style dress", "price": 59}
            ]
        });
        let request: PersonalizeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.product_list.len(), 1);
        assert_eq!(request.product_list[0].price, 59.0);
    }
}
