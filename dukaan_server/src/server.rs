use std::time::Duration;

use actix_cors::Cors;
use actix_web::{dev::Server, error::JsonPayloadError, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use dukaan_engine::{
    AdminRepository,
    AuthApi,
    CustomerRepository,
    OrderLookupApi,
    ProductRepository,
    SearchApi,
    SqliteDatabase,
};
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        root,
        AddProductRoute,
        AdminOrdersRoute,
        AdminProductsRoute,
        AdminProfileRoute,
        AllShopsRoute,
        CustomerOrdersRoute,
        CustomerProfileRoute,
        DeleteProductRoute,
        LoginRoute,
        PlaceOrderRoute,
        RecentAdminOrdersRoute,
        RecentShopsRoute,
        SearchProductsRoute,
        SearchShopsRoute,
        SignupRoute,
        UpdateOrderStatusRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, config.max_connections)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Database at {} is ready", config.database_url);
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Request bodies that cannot be parsed are rejected with a 400 and the uniform error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        debug!("💻️ Could not deserialize request body. {err}");
        ServerError::CouldNotDeserializePayload.into()
    })
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let auth_api = AuthApi::new(db.clone());
        let orders_api = OrderLookupApi::new(db.clone());
        let search_api = SearchApi::new(db.clone());
        let customers = CustomerRepository::new(db.clone());
        let admins = AdminRepository::new(db.clone());
        let products = ProductRepository::new(db.clone());
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %r").log_target("dukaan::access_log"))
            .wrap(Cors::permissive())
            .app_data(json_config())
            .app_data(web::Data::new(auth_api))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(search_api))
            .app_data(web::Data::new(customers))
            .app_data(web::Data::new(admins))
            .app_data(web::Data::new(products));
        let api_scope = web::scope("/api")
            .service(AdminProfileRoute::<SqliteDatabase>::new())
            .service(CustomerProfileRoute::<SqliteDatabase>::new())
            .service(AddProductRoute::<SqliteDatabase>::new())
            .service(SearchProductsRoute::<SqliteDatabase>::new())
            .service(AdminProductsRoute::<SqliteDatabase>::new())
            .service(DeleteProductRoute::<SqliteDatabase>::new())
            .service(PlaceOrderRoute::<SqliteDatabase>::new())
            .service(AdminOrdersRoute::<SqliteDatabase>::new())
            .service(RecentAdminOrdersRoute::<SqliteDatabase>::new())
            .service(UpdateOrderStatusRoute::<SqliteDatabase>::new())
            .service(CustomerOrdersRoute::<SqliteDatabase>::new())
            .service(SearchShopsRoute::<SqliteDatabase>::new())
            .service(AllShopsRoute::<SqliteDatabase>::new())
            .service(RecentShopsRoute::<SqliteDatabase>::new());
        app.service(root)
            .service(health)
            .service(LoginRoute::<SqliteDatabase>::new())
            .service(SignupRoute::<SqliteDatabase>::new())
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
