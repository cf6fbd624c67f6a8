/**
 * PostgreSQL Stores
 *
 * sqlx-backed implementations of `UserStore` and `ProductStore`.
 *
 * # Schema
 *
 * See `migrations/`. `users.email` carries a unique constraint; a violation
 * on insert or update is reported as `StoreError::DuplicateEmail`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::StoreError;
use crate::backend::auth::users::{NewUser, ProfileUpdate, User, UserStore};
use crate::backend::products::listings::{NewProduct, Product, ProductStore};

const USER_COLUMNS: &str = "id, username, email, password_hash, bio, created_at, updated_at";

const PRODUCT_COLUMNS: &str =
    "id, seller_id, name, description, base_price, auction_end, is_sold, created_at, updated_at";

/// Map an insert/update failure, turning unique violations into `DuplicateEmail`
fn map_write_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        other => StoreError::Database(other),
    }
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, bio, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.bio)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<User, StoreError> {
        let sql = format!(
            r#"
            UPDATE users
            SET username = $1, email = $2, bio = $3, updated_at = $4
            WHERE id = $5
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&update.username)
            .bind(&update.email)
            .bind(&update.bio)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create_product(&self, new_product: NewProduct) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO products
                (id, seller_id, name, description, base_price, auction_end, is_sold, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, $8)
            "#,
        )
        .bind(id)
        .bind(new_product.seller_id)
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.base_price)
        .bind(new_product.auction_end)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Seller row is gone.
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => StoreError::NotFound,
            other => StoreError::Database(other),
        })?;

        Ok(id)
    }

    async fn find_product(&self, id: Uuid) -> Result<Product, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE seller_id = $1")
            .bind(seller_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
