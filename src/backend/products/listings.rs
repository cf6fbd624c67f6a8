//! Auction listing model and store contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// A product put up for auction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    /// Identity that listed the product
    pub seller_id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub auction_end: DateTime<Utc>,
    pub is_sold: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub seller_id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub auction_end: DateTime<Utc>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create_product(&self, new_product: NewProduct) -> Result<Uuid, StoreError>;

    async fn find_product(&self, id: Uuid) -> Result<Product, StoreError>;

    /// All listings, oldest first
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Remove every listing of `seller_id`, returning how many went
    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<u64, StoreError>;
}
