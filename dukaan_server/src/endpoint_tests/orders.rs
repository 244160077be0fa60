use actix_web::{
    http::{Method, StatusCode},
    web,
    web::ServiceConfig,
};
use dukaan_engine::{db_types::Order, OrderLookupApi};
use serde_json::{json, Value};

use super::{
    helpers::{asha_stores, get_request, json_request, ravi, rice_order},
    mocks::MockStore,
};
use crate::routes::{
    AdminOrdersRoute,
    CustomerOrdersRoute,
    PlaceOrderRoute,
    RecentAdminOrdersRoute,
    UpdateOrderStatusRoute,
};

#[actix_web::test]
async fn admin_orders_carry_the_customer() {
    let (status, body) = get_request("/orders/admin/3", configure).await;
    assert_eq!(status, StatusCode::OK);
    let orders: Value = serde_json::from_str(&body).unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["_id"], 1);
    assert_eq!(orders[0]["customerName"], "Ravi");
    assert_eq!(orders[0]["customerEmail"], "ravi@example.com");
    assert_eq!(orders[0]["createdAt"], "2024-06-01T09:30:00Z");
    // Customer #99 no longer exists
    assert_eq!(orders[1]["customerName"], "Unknown");
    assert_eq!(orders[1]["customerEmail"], "N/A");
}

#[actix_web::test]
async fn recent_admin_orders_ask_for_the_newest_five() {
    let (status, body) = get_request("/orders/admin/3/recent", configure).await;
    assert_eq!(status, StatusCode::OK);
    let orders: Value = serde_json::from_str(&body).unwrap();
    let ids = orders.as_array().unwrap().iter().map(|o| o["_id"].as_i64().unwrap()).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 1]);
}

#[actix_web::test]
async fn customer_orders_carry_the_shop() {
    let (status, body) = get_request("/customer/orders/7", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"_id":1,"productName":"Basmati Rice","quantity":2.0,"unit":"kg","status":"Pending","adminId":3,"shopName":"Asha Stores","city":"Pune"}]"#
    );
}

#[actix_web::test]
async fn place_order() {
    let body = json!({"customerId": "7", "productName": "Basmati Rice", "quantity": 2, "unit": "kg", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/orders", body, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Order placed successfully"}"#);
}

#[actix_web::test]
async fn place_order_with_missing_fields() {
    let body = json!({"customerId": "7", "productName": "Basmati Rice", "quantity": 2, "adminId": 3});
    let (status, body) = json_request(Method::POST, "/orders", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"success":false,"message":"Missing fields"}"#);
}

#[actix_web::test]
async fn place_order_for_unknown_customer() {
    let body = json!({"customerId": 8, "productName": "Basmati Rice", "quantity": 2, "unit": "kg", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/orders", body, configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"success":false,"message":"Customer not found"}"#);
}

#[actix_web::test]
async fn place_order_with_malformed_customer_id() {
    let body = json!({"customerId": "seven", "productName": "Basmati Rice", "quantity": 2, "unit": "kg", "adminId": 3});
    let (status, body) = json_request(Method::POST, "/orders", body, configure).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"success":false,"message":"Error placing order"}"#);
}

#[actix_web::test]
async fn update_order_status() {
    let (status, body) = json_request(Method::PUT, "/orders/1", json!({"status": "Ready to Pickup"}), configure).await;
    assert_eq!(status, StatusCode::OK);
    let order: Order = serde_json::from_str(&body).unwrap();
    assert_eq!(order.status, "Ready to Pickup");
    assert_eq!(order.customer_name.as_deref(), Some("Ravi"));
}

#[actix_web::test]
async fn update_status_of_unknown_order() {
    let (status, body) = json_request(Method::PUT, "/orders/404", json!({"status": "Completed"}), configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");
}

#[actix_web::test]
async fn update_without_a_status_returns_the_order_unchanged() {
    let (status, body) = json_request(Method::PUT, "/orders/1", json!({}), configure).await;
    assert_eq!(status, StatusCode::OK);
    let order: Order = serde_json::from_str(&body).unwrap();
    assert_eq!(order.status, "Pending");
}

// Customer #7 and shop #3 exist. Shop #3 has orders #1 (from #7) and #2 (from #99, who has since left).
fn store() -> MockStore {
    let mut mock = MockStore::new();
    mock.expect_fetch_orders().returning(|q| {
        let orders = match (q.admin_id(), q.customer_id()) {
            (Some(_), _) => vec![rice_order(1, 7), rice_order(2, 99)],
            (None, Some(_)) => vec![rice_order(1, 7)],
            _ => vec![],
        };
        if q.is_newest_first() {
            assert_eq!(q.limit(), Some(5));
            return Ok(orders.into_iter().rev().collect());
        }
        Ok(orders)
    });
    mock.expect_fetch_customers().returning(|q| {
        assert!(!q.ids().is_empty());
        Ok(vec![ravi()])
    });
    mock.expect_fetch_customer().returning(|id| Ok((id == ravi().id).then(ravi)));
    mock.expect_fetch_admins().returning(|_| Ok(vec![asha_stores()]));
    mock.expect_insert_order().returning(|o| {
        assert_eq!(o.customer_name.as_deref(), Some("Ravi"));
        Ok(Order {
            customer_name: o.customer_name,
            product_name: o.product_name,
            quantity: o.quantity,
            unit: o.unit,
            status: o.status.to_string(),
            ..rice_order(3, o.customer_id.value())
        })
    });
    mock.expect_fetch_order().returning(|id| Ok((id.value() == 1).then(|| rice_order(1, 7))));
    mock.expect_update_order_status().returning(|id, status| {
        let order = (id.value() == 1).then(|| Order { status: status.to_string(), ..rice_order(1, 7) });
        Ok(order)
    });
    mock.expect_clone().returning(store);
    mock
}

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(AdminOrdersRoute::<MockStore>::new())
        .service(RecentAdminOrdersRoute::<MockStore>::new())
        .service(CustomerOrdersRoute::<MockStore>::new())
        .service(PlaceOrderRoute::<MockStore>::new())
        .service(UpdateOrderStatusRoute::<MockStore>::new())
        .app_data(web::Data::new(OrderLookupApi::new(store())));
}
