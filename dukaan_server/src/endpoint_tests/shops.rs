use actix_web::{http::StatusCode, web, web::ServiceConfig};
use dukaan_engine::{db_types::Admin, SearchApi, StoreError};
use serde_json::Value;

use super::{
    helpers::{asha_stores, basmati, get_request},
    mocks::MockStore,
};
use crate::routes::{AllShopsRoute, RecentShopsRoute, SearchProductsRoute, SearchShopsRoute};

#[actix_web::test]
async fn shop_search_returns_raw_records() {
    let (status, body) = get_request("/shops/search?city=pune", configure).await;
    assert_eq!(status, StatusCode::OK);
    let shops: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(shops[0]["_id"], 3);
    assert_eq!(shops[0]["shopName"], "Asha Stores");
    assert_eq!(shops[0]["password"], "open-sesame");

    let (_, body) = get_request("/shops/search?city=delhi", configure).await;
    assert_eq!(body, "[]");
}

#[actix_web::test]
async fn all_and_recent_shops() {
    let (status, body) = get_request("/shops/all", configure).await;
    assert_eq!(status, StatusCode::OK);
    let shops: Vec<Admin> = serde_json::from_str(&body).unwrap();
    assert_eq!(shops.len(), 2);

    let (status, body) = get_request("/shops/recent", configure).await;
    assert_eq!(status, StatusCode::OK);
    let shops: Vec<Admin> = serde_json::from_str(&body).unwrap();
    assert_eq!(shops.iter().map(|s| s.id.value()).collect::<Vec<_>>(), vec![5, 3]);
}

#[actix_web::test]
async fn product_search_groups_by_shop() {
    let (status, body) = get_request("/products/search?product=rice&city=pune", configure).await;
    assert_eq!(status, StatusCode::OK);
    let results: Value = serde_json::from_str(&body).unwrap();
    let results = results.as_array().unwrap();
    // Shop #5 is in Pune too, but sells no rice
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["shopName"], "Asha Stores");
    assert_eq!(results[0]["city"], "Pune");
    assert_eq!(results[0]["adminId"], 3);
    assert_eq!(results[0]["products"][0]["name"], "Basmati Rice");
}

#[actix_web::test]
async fn shop_search_when_the_store_is_down() {
    let (status, body) = get_request("/shops/search?city=pune", configure_broken_store).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error searching shops"}"#);
}

fn bala_mart() -> Admin {
    Admin { id: 5.into(), shop_name: Some("Bala Mart".into()), email: Some("bala@example.com".into()), ..asha_stores() }
}

fn store() -> MockStore {
    let mut mock = MockStore::new();
    mock.expect_fetch_admins().returning(|q| {
        let shops = vec![asha_stores(), bala_mart()];
        let shops = match q.city_pattern() {
            Some(city) => shops.into_iter().filter(|s| s.city.as_deref() == Some("Pune") && city == "pune").collect(),
            None => shops,
        };
        if q.is_newest_first() {
            assert_eq!(q.limit(), Some(3));
            return Ok(shops.into_iter().rev().collect());
        }
        Ok(shops)
    });
    mock.expect_fetch_products().returning(|q| {
        assert_eq!(q.name_pattern(), Some("rice"));
        let products = if q.admin_id() == Some(basmati().admin_id) { vec![basmati()] } else { vec![] };
        Ok(products)
    });
    mock.expect_clone().returning(store);
    mock
}

fn broken_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_fetch_admins().returning(|_| Err(StoreError::DatabaseError("pool timed out".into())));
    store.expect_clone().returning(broken_store);
    store
}

fn register(cfg: &mut ServiceConfig, store: MockStore) {
    cfg.service(SearchShopsRoute::<MockStore>::new())
        .service(AllShopsRoute::<MockStore>::new())
        .service(RecentShopsRoute::<MockStore>::new())
        .service(SearchProductsRoute::<MockStore>::new())
        .app_data(web::Data::new(SearchApi::new(store)));
}

fn configure(cfg: &mut ServiceConfig) {
    register(cfg, store());
}

fn configure_broken_store(cfg: &mut ServiceConfig) {
    register(cfg, broken_store());
}
