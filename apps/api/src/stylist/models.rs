use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalogue item supplied by the caller. Read-only inside the stylist core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// The shopper's free-text profile, shared by every product in a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleContext {
    pub style_profile: String,
    pub wardrobe: String,
}

/// Three-level verdict used for both style match and wardrobe compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    High,
    Medium,
    Low,
}

impl Rating {
    /// Exact, case-sensitive match against the three allowed labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "High" => Some(Rating::High),
            "Medium" => Some(Rating::Medium),
            "Low" => Some(Rating::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The stylist verdict attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub style_match: Rating,
    pub wardrobe_compatibility: Rating,
    pub reason: String,
}

/// A product paired with its assessment. Product fields are flattened so the
/// wire shape is `{id, name, description, price, stylist_notes}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub stylist_notes: Assessment,
}

impl AnnotatedProduct {
    pub fn new(product: Product, stylist_notes: Assessment) -> Self {
        Self {
            product,
            stylist_notes,
        }
    }
}
