/**
 * Product Request and Response Types
 *
 * # Listing Rules
 *
 * - name is required
 * - description is required and 10 to 255 characters
 * - base price is strictly positive
 * - the auction must end at least two hours after the request is evaluated
 */

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::products::listings::Product;
use crate::backend::validation::{
    max_chars, min_chars, not_blank, Evaluator, ValidationContext, Validator,
};

/// Shortest auction a seller may open
pub const MIN_AUCTION_HOURS: i64 = 2;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub base_price: f64,
    /// Missing decodes as `None` and fails validation
    pub auction_end: Option<DateTime<Utc>>,
}

impl Validator for CreateProductRequest {
    fn validate(&self, ctx: &ValidationContext) -> Evaluator {
        let mut eval = Evaluator::new();
        eval.check_field(not_blank(&self.name), "name", "this field cannot be blank");
        eval.check_field(
            not_blank(&self.description),
            "description",
            "this field cannot be blank",
        );
        eval.check_field(
            min_chars(&self.description, 10) && max_chars(&self.description, 255),
            "description",
            "description must be between 10 and 255 characters",
        );
        eval.check_field(
            self.base_price > 0.0,
            "base_price",
            "base price must be greater than zero",
        );

        let earliest = ctx.now + Duration::hours(MIN_AUCTION_HOURS);
        eval.check_field(
            self.auction_end.is_some_and(|end| end >= earliest),
            "auction_end",
            "auction must end at least 2 hours from now",
        );
        eval
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateProductResponse {
    pub id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductEnvelope {
    pub product: Product,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductListEnvelope {
    pub products: Vec<Product>,
}
