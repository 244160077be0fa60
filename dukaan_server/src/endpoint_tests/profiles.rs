use actix_web::{http::StatusCode, web, web::ServiceConfig};
use dukaan_engine::{db_types::RecordId, AdminRepository, CustomerRepository, StoreError};

use super::{
    helpers::{asha_stores, get_request, ravi},
    mocks::MockStore,
};
use crate::routes::{AdminProfileRoute, CustomerProfileRoute};

#[actix_web::test]
async fn admin_profile() {
    let (status, body) = get_request("/admin/profile/3", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"name":"Asha","shopName":"Asha Stores","email":"asha@example.com","city":"Pune","mobile":"9811111111","photo":""}"#
    );
}

#[actix_web::test]
async fn unknown_admin_profile() {
    let (status, body) = get_request("/admin/profile/4", configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"success":false,"message":"Admin not found"}"#);
}

#[actix_web::test]
async fn customer_profile_leaves_out_the_password() {
    let (status, body) = get_request("/customer/profile/7", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"name":"Ravi","city":"Pune","email":"ravi@example.com","mobile":"9800000000"}"#);
}

#[actix_web::test]
async fn unknown_customer_profile() {
    let (status, body) = get_request("/customer/profile/8", configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"success":false,"message":"Customer not found"}"#);
}

#[actix_web::test]
async fn customer_profile_when_the_store_is_down() {
    let (status, body) = get_request("/customer/profile/7", configure_broken_store).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error fetching customer profile"}"#);
}

#[actix_web::test]
async fn malformed_profile_id() {
    let (status, body) = get_request("/admin/profile/abc", configure).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error fetching admin profile"}"#);
}

fn configure(cfg: &mut ServiceConfig) {
    let mut admins = MockStore::new();
    admins.expect_fetch_admin().returning(|id| Ok((id == RecordId(3)).then(asha_stores)));
    let mut customers = MockStore::new();
    customers.expect_fetch_customer().returning(|id| Ok((id == RecordId(7)).then(ravi)));
    register(cfg, admins, customers);
}

fn configure_broken_store(cfg: &mut ServiceConfig) {
    let mut customers = MockStore::new();
    customers.expect_fetch_customer().returning(|_| Err(StoreError::QueryError("no such table: customers".into())));
    register(cfg, MockStore::new(), customers);
}

fn register(cfg: &mut ServiceConfig, admins: MockStore, customers: MockStore) {
    cfg.service(AdminProfileRoute::<MockStore>::new())
        .service(CustomerProfileRoute::<MockStore>::new())
        .app_data(web::Data::new(AdminRepository::new(admins)))
        .app_data(web::Data::new(CustomerRepository::new(customers)));
}
