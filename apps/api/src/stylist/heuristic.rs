//! Keyword-overlap scorer used whenever the model is unavailable or its reply
//! cannot be trusted.
//!
//! Pure and deterministic: no I/O, no clock, no randomness.
//!
//! Algorithm:
//! 1. Lower-case and whitespace-split the style profile, the wardrobe, and
//!    `"{name} {description}"` into token sets.
//! 2. style ratio = |style ∩ product| / max(|style|, 1)
//!    → High (> 0.3), Medium (> 0.1), Low otherwise.
//! 3. wardrobe ratio = |wardrobe ∩ product| / max(|wardrobe|, 1)
//!    → High (> 0.2), Medium (> 0.05), Low otherwise.

use std::collections::HashSet;

use crate::stylist::models::{Assessment, Product, Rating, StyleContext};

const STYLE_HIGH_THRESHOLD: f64 = 0.3;
const STYLE_MEDIUM_THRESHOLD: f64 = 0.1;
const WARDROBE_HIGH_THRESHOLD: f64 = 0.2;
const WARDROBE_MEDIUM_THRESHOLD: f64 = 0.05;

/// Scores a product against the shopper's profile by keyword overlap. Never fails.
pub fn score(ctx: &StyleContext, product: &Product) -> Assessment {
    let style_tokens = tokenize(&ctx.style_profile);
    let wardrobe_tokens = tokenize(&ctx.wardrobe);
    let product_tokens = tokenize(&format!("{} {}", product.name, product.description));

    let style_overlap = style_tokens.intersection(&product_tokens).count();
    let style_match = rate(
        overlap_ratio(style_overlap, style_tokens.len()),
        STYLE_HIGH_THRESHOLD,
        STYLE_MEDIUM_THRESHOLD,
    );

    let wardrobe_overlap = wardrobe_tokens.intersection(&product_tokens).count();
    let wardrobe_compatibility = rate(
        overlap_ratio(wardrobe_overlap, wardrobe_tokens.len()),
        WARDROBE_HIGH_THRESHOLD,
        WARDROBE_MEDIUM_THRESHOLD,
    );

    let reason = format!(
        "Style match: {style_match} (overlap: {style_overlap} keywords). \
         Wardrobe compatibility: {wardrobe_compatibility} (overlap: {wardrobe_overlap} keywords)."
    );

    Assessment {
        style_match,
        wardrobe_compatibility,
        reason,
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Denominator clamped to 1 so empty profiles score 0 instead of dividing by zero.
fn overlap_ratio(overlap: usize, total: usize) -> f64 {
    overlap as f64 / total.max(1) as f64
}

fn rate(ratio: f64, high: f64, medium: f64) -> Rating {
    if ratio > high {
        Rating::High
    } else if ratio > medium {
        Rating::Medium
    } else {
        Rating::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(style: &str, wardrobe: &str) -> StyleContext {
        StyleContext {
            style_profile: style.to_string(),
            wardrobe: wardrobe.to_string(),
        }
    }

    fn product(name: &str, description: &str) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            price: 49.0,
        }
    }

    #[test]
    fn test_vintage_bohemian_dress_scores_high_style() {
        let assessment = score(
            &ctx("vintage bohemian", "black denim pants"),
            &product("Floral Vintage Dress", "bohemian style dress"),
        );
        assert_eq!(assessment.style_match, Rating::High);
        assert_eq!(assessment.wardrobe_compatibility, Rating::Low);
        assert!(assessment.reason.contains("overlap: 2 keywords"));
        assert!(assessment.reason.contains("overlap: 0 keywords"));
    }

    #[test]
    fn test_empty_profile_and_wardrobe_score_low() {
        let assessment = score(&ctx("", ""), &product("Cargo Pants", "Olive green"));
        assert_eq!(assessment.style_match, Rating::Low);
        assert_eq!(assessment.wardrobe_compatibility, Rating::Low);
    }

    #[test]
    fn test_score_is_deterministic() {
        let c = ctx("minimal clean monochrome", "white sneakers grey hoodie");
        let p = product("Minimalist White Sneakers", "Clean, simple white canvas sneakers");
        assert_eq!(score(&c, &p), score(&c, &p));
    }

    #[test]
    fn test_tokens_are_case_insensitive_and_deduplicated() {
        let tokens = tokenize("Denim denim DENIM jacket");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("denim"));
    }

    #[test]
    fn test_style_thresholds_are_strict() {
        // 3 of 10 style tokens = 0.3, which is not > 0.3
        let style = "a b c d e f g h i j";
        let assessment = score(&ctx(style, ""), &product("a b c", ""));
        assert_eq!(assessment.style_match, Rating::Medium);

        // 1 of 10 = 0.1, which is not > 0.1
        let assessment = score(&ctx(style, ""), &product("a", ""));
        assert_eq!(assessment.style_match, Rating::Low);
    }

    #[test]
    fn test_wardrobe_medium_band() {
        // 1 of 10 wardrobe tokens = 0.1 → above 0.05, below 0.2
        let wardrobe = "a b c d e f g h i j";
        let assessment = score(&ctx("", wardrobe), &product("a", "z"));
        assert_eq!(assessment.wardrobe_compatibility, Rating::Medium);
    }

    #[test]
    fn test_punctuation_is_part_of_token() {
        // "denim," does not match "denim"
        let assessment = score(&ctx("denim", ""), &product("Jacket", "denim, blue"));
        assert_eq!(assessment.style_match, Rating::Low);
    }
}
