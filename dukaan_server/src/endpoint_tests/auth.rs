use actix_web::{
    http::{Method, StatusCode},
    web,
    web::ServiceConfig,
};
use dukaan_engine::{
    db_types::{Admin, Customer},
    AuthApi,
    StoreError,
};
use serde_json::json;

use super::{
    helpers::{asha_stores, json_request, raw_request, ravi},
    mocks::MockStore,
};
use crate::routes::{LoginRoute, SignupRoute};

#[actix_web::test]
async fn customer_login() {
    let body = json!({"userType": "customer", "email": "ravi@example.com", "password": "pw"});
    let (status, body) = json_request(Method::POST, "/login", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"userId":7,"role":"customer"}"#);
}

#[actix_web::test]
async fn failed_login_is_still_a_200() {
    let body = json!({"userType": "admin", "email": "ravi@example.com", "password": "wrong"});
    let (status, body) = json_request(Method::POST, "/login", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":false,"message":"Invalid admin credentials"}"#);
}

#[actix_web::test]
async fn login_with_unknown_user_type() {
    let body = json!({"userType": "vendor", "email": "ravi@example.com", "password": "pw"});
    let (status, body) = json_request(Method::POST, "/login", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Invalid user type"}"#);
}

#[actix_web::test]
async fn login_when_the_store_is_down() {
    let body = json!({"userType": "customer", "email": "ravi@example.com", "password": "pw"});
    let (status, body) = json_request(Method::POST, "/login", body, configure_broken_store).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Server error"}"#);
}

#[actix_web::test]
async fn login_with_garbage_body() {
    let (status, body) = raw_request(Method::POST, "/login", "{userType: customer", configure_known_customer).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Payload deserialization error"}"#);
}

#[actix_web::test]
async fn admin_signup() {
    let body = json!({
        "userType": "admin",
        "adminName": "Asha",
        "shopName": "Asha Stores",
        "city": "Pune",
        "email": "asha@example.com",
        "password": "open-sesame",
        "mobile": 9811111111u64,
    });
    let (status, body) = json_request(Method::POST, "/signup", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Admin registered successfully"}"#);
}

#[actix_web::test]
async fn customer_signup_with_nothing_but_a_type() {
    let body = json!({"userType": "customer"});
    let (status, body) = json_request(Method::POST, "/signup", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Customer registered successfully"}"#);
}

#[actix_web::test]
async fn signup_without_a_user_type() {
    let body = json!({"name": "Ravi"});
    let (status, body) = json_request(Method::POST, "/signup", body, configure_known_customer).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Invalid user type"}"#);
}

fn known_customer() -> MockStore {
    let mut store = MockStore::new();
    store.expect_fetch_customers().returning(|q| {
        let matches = q.email() == Some("ravi@example.com");
        Ok(if matches { vec![ravi()] } else { vec![] })
    });
    store.expect_fetch_admins().returning(|_| Ok(vec![]));
    store.expect_insert_customer().returning(|c| Ok(Customer { name: c.name, ..ravi() }));
    store.expect_insert_admin().returning(|a| {
        assert_eq!(a.mobile.as_deref(), Some("9811111111"));
        Ok(Admin { shop_name: a.shop_name, ..asha_stores() })
    });
    store.expect_clone().returning(known_customer);
    store
}

fn broken_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_fetch_customers().returning(|_| Err(StoreError::DatabaseError("connection refused".into())));
    store.expect_clone().returning(broken_store);
    store
}

fn configure_known_customer(cfg: &mut ServiceConfig) {
    let api = AuthApi::new(known_customer());
    cfg.service(LoginRoute::<MockStore>::new())
        .service(SignupRoute::<MockStore>::new())
        .app_data(web::Data::new(api));
}

fn configure_broken_store(cfg: &mut ServiceConfig) {
    let api = AuthApi::new(broken_store());
    cfg.service(LoginRoute::<MockStore>::new()).app_data(web::Data::new(api));
}
