//! Auction listing API integration tests

use auctionhouse::backend::products::ProductStore;
use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

fn listing(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Late 19th century, working order",
        "base_price": 120.5,
        "auction_end": (Utc::now() + Duration::days(2)).to_rfc3339(),
    })
}

#[tokio::test]
async fn test_create_and_fetch_product() {
    let app = TestApp::new();
    let seller = create_unique_test_user(&app).await;

    let created = app
        .send(
            Method::POST,
            "/api/v1/products",
            Some(listing("Brass sextant")),
            Some(&seller.token),
        )
        .await;
    assert_status!(created, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app
        .send(
            Method::GET,
            &format!("/api/v1/products/{id}"),
            None,
            Some(&seller.token),
        )
        .await;
    assert_status!(fetched, StatusCode::OK);

    let product = &fetched.body["product"];
    assert_eq!(product["id"], json!(id));
    assert_eq!(product["seller_id"], json!(seller.id));
    assert_eq!(product["name"], "Brass sextant");
    assert_eq!(product["base_price"], json!(120.5));
    assert_eq!(product["is_sold"], json!(false));
}

#[tokio::test]
async fn test_seller_comes_from_token_not_body() {
    let app = TestApp::new();
    let seller = create_unique_test_user(&app).await;

    let mut body = listing("Oil lamp");
    body["seller_id"] = json!(Uuid::new_v4());

    let created = app
        .send(Method::POST, "/api/v1/products", Some(body), Some(&seller.token))
        .await;
    assert_status!(created, StatusCode::CREATED);

    let listed = app
        .send(Method::GET, "/api/v1/products", None, Some(&seller.token))
        .await;
    assert_eq!(listed.body["products"][0]["seller_id"], json!(seller.id));
}

#[tokio::test]
async fn test_list_products() {
    let app = TestApp::new();
    let seller = create_unique_test_user(&app).await;

    let empty = app
        .send(Method::GET, "/api/v1/products", None, Some(&seller.token))
        .await;
    assert_status!(empty, StatusCode::OK);
    assert_eq!(empty.body, json!({ "products": [] }));

    for name in ["Brass sextant", "Oil lamp"] {
        app.send(Method::POST, "/api/v1/products", Some(listing(name)), Some(&seller.token))
            .await;
    }

    let listed = app
        .send(Method::GET, "/api/v1/products", None, Some(&seller.token))
        .await;
    let names: Vec<&str> = listed.body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Brass sextant", "Oil lamp"]);
}

#[tokio::test]
async fn test_create_product_validation() {
    let app = TestApp::new();
    let seller = create_unique_test_user(&app).await;

    let response = app
        .send(
            Method::POST,
            "/api/v1/products",
            Some(json!({
                "name": "  ",
                "description": "short",
                "base_price": 0,
                "auction_end": (Utc::now() + Duration::minutes(30)).to_rfc3339(),
            })),
            Some(&seller.token),
        )
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body,
        json!({
            "name": "this field cannot be blank",
            "description": "description must be between 10 and 255 characters",
            "base_price": "base price must be greater than zero",
            "auction_end": "auction must end at least 2 hours from now",
        })
    );
}

#[tokio::test]
async fn test_product_lookup_errors() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let missing = app
        .send(
            Method::GET,
            &format!("/api/v1/products/{}", Uuid::new_v4()),
            None,
            Some(&user.token),
        )
        .await;
    assert_error!(missing, StatusCode::NOT_FOUND, "product not found");

    let malformed = app
        .send(Method::GET, "/api/v1/products/42", None, Some(&user.token))
        .await;
    assert_error!(malformed, StatusCode::BAD_REQUEST, "invalid uuid");
}

#[tokio::test]
async fn test_products_require_token() {
    let app = TestApp::new();

    let create = app
        .send(Method::POST, "/api/v1/products", Some(listing("Lamp")), None)
        .await;
    assert_error!(create, StatusCode::UNAUTHORIZED, "unauthorized");

    let list = app.send(Method::GET, "/api/v1/products", None, None).await;
    assert_error!(list, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_deleting_seller_removes_listings_and_blocks_new_ones() {
    let app = TestApp::new();
    let seller = create_unique_test_user(&app).await;
    let bidder = create_unique_test_user(&app).await;

    for name in ["Brass sextant", "Ship's log"] {
        let created = app
            .send(Method::POST, "/api/v1/products", Some(listing(name)), Some(&seller.token))
            .await;
        assert_status!(created, StatusCode::CREATED);
    }
    let kept = app
        .send(Method::POST, "/api/v1/products", Some(listing("Sea chart")), Some(&bidder.token))
        .await;
    assert_status!(kept, StatusCode::CREATED);

    let deleted = app
        .send(
            Method::DELETE,
            &format!("/api/v1/users/{}", seller.id),
            None,
            Some(&seller.token),
        )
        .await;
    assert_status!(deleted, StatusCode::NO_CONTENT);

    let listed = app
        .send(Method::GET, "/api/v1/products", None, Some(&bidder.token))
        .await;
    assert_status!(listed, StatusCode::OK);
    let products = listed.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["seller_id"], json!(bidder.id));

    // The deleted seller's token has not expired yet.
    let orphan = app
        .send(Method::POST, "/api/v1/products", Some(listing("Oil lamp")), Some(&seller.token))
        .await;
    assert_error!(orphan, StatusCode::NOT_FOUND, "user not found");
    assert_eq!(app.products.list_products().await.unwrap().len(), 1);
}
