/**
 * In-Memory Stores
 *
 * Process-local implementations of the store contracts, used when no
 * database is configured and throughout the test suites.
 *
 * # Consistency
 *
 * Every operation takes the write (or read) lock once and completes inside
 * it, so check-then-insert sequences such as email uniqueness are atomic per
 * call. No lock is held across an await of anything else.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StoreError;
use crate::backend::auth::users::{NewUser, ProfileUpdate, User, UserStore};
use crate::backend::products::listings::{NewProduct, Product, ProductStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<Uuid, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        users.insert(
            id,
            User {
                id,
                username: new_user.username,
                email: new_user.email,
                password_hash: new_user.password_hash,
                bio: new_user.bio,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        if users.values().any(|u| u.id != id && u.email == update.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.username = update.username;
        user.email = update.email;
        user.bio = update.bio;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create_product(&self, new_product: NewProduct) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.products.write().await.push(Product {
            id,
            seller_id: new_product.seller_id,
            name: new_product.name,
            description: new_product.description,
            base_price: new_product.base_price,
            auction_end: new_product.auction_end,
            is_sold: false,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn find_product(&self, id: Uuid) -> Result<Product, StoreError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<u64, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.seller_id != seller_id);
        Ok((before - products.len()) as u64)
    }
}
