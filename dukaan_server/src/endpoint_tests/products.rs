use actix_web::{
    http::{Method, StatusCode},
    web,
    web::ServiceConfig,
};
use dukaan_engine::{db_types::Product, ProductRepository, StoreError};
use serde_json::{json, Value};

use super::{
    helpers::{basmati, delete_request, get_request, json_request},
    mocks::MockStore,
};
use crate::routes::{AddProductRoute, AdminProductsRoute, DeleteProductRoute};

#[actix_web::test]
async fn add_product_with_default_quantity() {
    let body = json!({"name": "Basmati Rice", "price": "120", "unit": "kg", "image": "rice.png", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/products", body, configure).await;
    assert_eq!(status, StatusCode::OK);
    let product: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(product["_id"], 11);
    assert_eq!(product["name"], "Basmati Rice");
    assert_eq!(product["price"], 120.0);
    assert_eq!(product["quantity"], 1.0);
    assert_eq!(product["adminId"], 3);
}

#[actix_web::test]
async fn add_product_missing_image() {
    let body = json!({"name": "Basmati Rice", "price": 120, "unit": "kg", "adminId": "3"});
    let (status, body) = json_request(Method::POST, "/products", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Missing required fields"}"#);
}

#[actix_web::test]
async fn add_product_with_zero_price() {
    let body = json!({"name": "Free Rice", "price": 0, "unit": "kg", "image": "rice.png", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/products", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Missing required fields"}"#);
}

#[actix_web::test]
async fn add_product_with_negative_price() {
    let body = json!({"name": "Basmati Rice", "price": -5, "unit": "kg", "image": "rice.png", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/products", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Invalid value for field: price"}"#);
}

#[actix_web::test]
async fn products_for_admin() {
    let (status, body) = get_request("/products/admin/3", configure).await;
    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_str(&body).unwrap();
    assert_eq!(products, vec![basmati()]);
}

#[actix_web::test]
async fn products_for_malformed_admin_id() {
    let (status, body) = get_request("/products/admin/not-an-id", configure).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error fetching products"}"#);
}

#[actix_web::test]
async fn deleting_is_idempotent() {
    for id in [11, 12] {
        let (status, body) = delete_request(&format!("/products/{id}"), configure).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Product deleted"}"#);
    }
}

#[actix_web::test]
async fn delete_when_the_store_is_down() {
    let (status, body) = delete_request("/products/11", configure_broken_store).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error deleting product"}"#);
}

fn configure(cfg: &mut ServiceConfig) {
    let mut store = MockStore::new();
    store.expect_insert_product().returning(|p| {
        Ok(Product {
            id: basmati().id,
            name: p.name,
            price: p.price,
            unit: p.unit,
            image: p.image,
            quantity: p.quantity,
            admin_id: p.admin_id,
        })
    });
    store.expect_fetch_products().withf(|q| q.admin_id().is_some()).returning(|_| Ok(vec![basmati()]));
    store.expect_delete_product().returning(|id| Ok(u64::from(id == basmati().id)));
    register(cfg, store);
}

fn configure_broken_store(cfg: &mut ServiceConfig) {
    let mut store = MockStore::new();
    store.expect_delete_product().returning(|_| Err(StoreError::DatabaseError("database is locked".into())));
    register(cfg, store);
}

fn register(cfg: &mut ServiceConfig, store: MockStore) {
    cfg.service(AddProductRoute::<MockStore>::new())
        .service(AdminProductsRoute::<MockStore>::new())
        .service(DeleteProductRoute::<MockStore>::new())
        .app_data(web::Data::new(ProductRepository::new(store)));
}
