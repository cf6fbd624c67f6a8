//! Auction listing handlers.
//!
//! A listing can only be created by an identity that still exists.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::products::listings::{NewProduct, ProductStore};
use crate::backend::products::types::{
    CreateProductRequest, CreateProductResponse, ProductEnvelope, ProductListEnvelope,
};
use crate::backend::store::StoreError;
use crate::backend::users::handlers::{parse_id, user_store_error};
use crate::backend::validation::ValidatedJson;

/// POST /products
pub async fn create_product(
    State(users): State<Arc<dyn UserStore>>,
    State(products): State<Arc<dyn ProductStore>>,
    seller: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), BackendError> {
    // Always present once validation has passed.
    let auction_end = request
        .auction_end
        .ok_or_else(|| BackendError::BadRequest("auction_end is required".to_string()))?;

    // Tokens outlive deleted identities.
    users
        .find_by_id(seller.user_id())
        .await
        .map_err(user_store_error)?;

    let id = products
        .create_product(NewProduct {
            seller_id: seller.user_id(),
            name: request.name,
            description: request.description,
            base_price: request.base_price,
            auction_end,
        })
        .await
        .map_err(user_store_error)?;
    tracing::info!(product_id = %id, seller_id = %seller.user_id(), "listing created");

    Ok((StatusCode::CREATED, Json(CreateProductResponse { id })))
}

/// GET /products/{id}
pub async fn get_product(
    State(products): State<Arc<dyn ProductStore>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProductEnvelope>, BackendError> {
    let id = parse_id(&id)?;
    let product = products.find_product(id).await.map_err(|e| match e {
        StoreError::NotFound => BackendError::NotFound("product"),
        other => other.into(),
    })?;

    Ok(Json(ProductEnvelope { product }))
}

/// GET /products
pub async fn list_products(
    State(products): State<Arc<dyn ProductStore>>,
    _user: AuthUser,
) -> Result<Json<ProductListEnvelope>, BackendError> {
    let products = products.list_products().await?;
    Ok(Json(ProductListEnvelope { products }))
}
