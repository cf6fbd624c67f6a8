//! Products Module
//!
//! Auction listings. Every route is protected; the seller of a new listing is
//! always the authenticated identity.
//!
//! - **`listings`** - product record and the product-store contract
//! - **`types`** - request/response bodies and listing rules
//! - **`handlers`** - `POST /products`, `GET /products`, `GET /products/{id}`

pub mod listings;

pub mod types;

pub mod handlers;

pub use handlers::{create_product, get_product, list_products};
pub use listings::{NewProduct, Product, ProductStore};
pub use types::{CreateProductRequest, ProductEnvelope, ProductListEnvelope};
