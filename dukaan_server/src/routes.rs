//! Request handlers for the marketplace API
//!
//! Every handler is generic over the store backend, so they are registered through the `route!` macro. Handlers stay
//! thin: they parse the request, call into the engine APIs and map failures with [`api_error`].
use actix_web::{get, web, HttpResponse, Responder};
use dukaan_engine::{
    db_types::RecordId,
    mp_api::{order_objects::OrderSubmission, product_objects::ProductSubmission},
    AdminManagement,
    AdminRepository,
    AuthApi,
    CustomerManagement,
    CustomerRepository,
    MarketplaceError,
    OrderLookupApi,
    OrderManagement,
    ProductManagement,
    ProductRepository,
    SearchApi,
};
use log::*;

use crate::{
    data_objects::{
        AdminProfile,
        CustomerProfile,
        JsonResponse,
        LoginRequest,
        LoginResponse,
        MessageResponse,
        ProductSearchParams,
        ShopSearchParams,
        SignupPayload,
        StatusUpdate,
    },
    errors::{api_error, malformed_id, ServerError},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

fn parse_id(raw: &str, context: &'static str) -> Result<RecordId, ServerError> {
    raw.parse::<RecordId>().map_err(malformed_id(context))
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().body("✅ Dukaan Backend is Running!")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Auth  ----------------------------------------------------
route!(login => Post "/login" impl CustomerManagement, AdminManagement);
/// Route handler for the login endpoint
///
/// Checks the supplied email and password against the accounts of the given `userType` ("customer" or "admin").
/// A failed login is still a 200 response, with `success: false` and a message. An unknown user type is a 400.
pub async fn login<B>(
    body: web::Json<LoginRequest>,
    api: web::Data<AuthApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: CustomerManagement + AdminManagement,
{
    let LoginRequest { user_type, email, password } = body.into_inner();
    debug!("💻️ POST login for {user_type:?} account");
    let result = api
        .login(user_type.as_deref(), email.as_deref(), password.as_deref())
        .await
        .map_err(api_error("Server error"))?;
    Ok(HttpResponse::Ok().json(LoginResponse::from(result)))
}

route!(signup => Post "/signup" impl CustomerManagement, AdminManagement);
pub async fn signup<B>(body: web::Json<SignupPayload>, api: web::Data<AuthApi<B>>) -> Result<HttpResponse, ServerError>
where B: CustomerManagement + AdminManagement {
    let SignupPayload { user_type, fields } = body.into_inner();
    debug!("💻️ POST signup for {user_type:?} account");
    let id = api.signup(user_type.as_deref(), fields).await.map_err(api_error("Error during signup"))?;
    let message = match user_type.as_deref() {
        Some("admin") => "Admin registered successfully",
        _ => "Customer registered successfully",
    };
    debug!("💻️ New account #{id} registered");
    Ok(HttpResponse::Ok().json(JsonResponse::success(message)))
}

//----------------------------------------------   Profiles  ----------------------------------------------------
route!(admin_profile => Get "/admin/profile/{admin_id}" impl AdminManagement);
pub async fn admin_profile<B: AdminManagement>(
    path: web::Path<String>,
    api: web::Data<AdminRepository<B>>,
) -> Result<HttpResponse, ServerError> {
    const CONTEXT: &str = "Error fetching admin profile";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET admin profile for #{id}");
    let admin = api.find_by_id(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(AdminProfile::from(admin)))
}

route!(customer_profile => Get "/customer/profile/{customer_id}" impl CustomerManagement);
pub async fn customer_profile<B: CustomerManagement>(
    path: web::Path<String>,
    api: web::Data<CustomerRepository<B>>,
) -> Result<HttpResponse, ServerError> {
    const CONTEXT: &str = "Error fetching customer profile";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET customer profile for #{id}");
    let customer = api.find_by_id(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(CustomerProfile::from(customer)))
}

//----------------------------------------------   Products  ----------------------------------------------------
route!(add_product => Post "/products" impl ProductManagement);
/// Adds a product to a shop's catalog and returns the stored product.
///
/// `name`, `price`, `unit`, `image` and `adminId` are required. `quantity` defaults to 1.
pub async fn add_product<B: ProductManagement>(
    body: web::Json<ProductSubmission>,
    api: web::Data<ProductRepository<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST new product");
    let product = api.create(body.into_inner()).await.map_err(|e| match e {
        MarketplaceError::MissingField(field) => {
            debug!("💻️ Product rejected. {field} is missing");
            ServerError::InvalidRequestBody("Missing required fields".into())
        },
        e => api_error("Error adding product")(e),
    })?;
    Ok(HttpResponse::Ok().json(product))
}

route!(admin_products => Get "/products/admin/{admin_id}" impl ProductManagement);
pub async fn admin_products<B: ProductManagement>(
    path: web::Path<String>,
    api: web::Data<ProductRepository<B>>,
) -> Result<HttpResponse, ServerError> {
    const CONTEXT: &str = "Error fetching products";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET products for admin #{id}");
    let products = api.find_for_admin(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(products))
}

route!(delete_product => Delete "/products/{id}" impl ProductManagement);
/// Deletes a product. Deleting a product that does not exist also succeeds.
pub async fn delete_product<B: ProductManagement>(
    path: web::Path<String>,
    api: web::Data<ProductRepository<B>>,
) -> Result<HttpResponse, ServerError> {
    const CONTEXT: &str = "Error deleting product";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ DELETE product #{id}");
    api.delete(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product deleted")))
}

route!(search_products => Get "/products/search" impl AdminManagement, ProductManagement);
/// Finds products by name in shops by city. Results are grouped by shop and shops without a match are left out.
pub async fn search_products<B>(
    query: web::Query<ProductSearchParams>,
    api: web::Data<SearchApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: AdminManagement + ProductManagement,
{
    let ProductSearchParams { product, city } = query.into_inner();
    debug!("💻️ GET product search for {product:?} in {city:?}");
    let results = api
        .search_products(product.as_deref(), city.as_deref())
        .await
        .map_err(api_error("Error fetching product search"))?;
    Ok(HttpResponse::Ok().json(results))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(place_order => Post "/orders" impl OrderManagement, CustomerManagement, AdminManagement);
pub async fn place_order<B>(
    body: web::Json<OrderSubmission>,
    api: web::Data<OrderLookupApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CustomerManagement + AdminManagement,
{
    debug!("💻️ POST new order");
    let order = api.place_order(body.into_inner()).await.map_err(|e| match e {
        MarketplaceError::MissingField(_) => ServerError::InvalidRequestBody("Missing fields".into()),
        e => api_error("Error placing order")(e),
    })?;
    debug!("💻️ Order #{} placed", order.id);
    Ok(HttpResponse::Ok().json(JsonResponse::success("Order placed successfully")))
}

route!(admin_orders => Get "/orders/admin/{admin_id}" impl OrderManagement, CustomerManagement, AdminManagement);
/// All orders placed with a shop, oldest first, with the customer's name and email attached.
pub async fn admin_orders<B>(
    path: web::Path<String>,
    api: web::Data<OrderLookupApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CustomerManagement + AdminManagement,
{
    const CONTEXT: &str = "Error fetching orders";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET orders for admin #{id}");
    let orders = api.admin_orders(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(recent_admin_orders => Get "/orders/admin/{admin_id}/recent" impl OrderManagement, CustomerManagement, AdminManagement);
pub async fn recent_admin_orders<B>(
    path: web::Path<String>,
    api: web::Data<OrderLookupApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CustomerManagement + AdminManagement,
{
    const CONTEXT: &str = "Error fetching recent orders";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET recent orders for admin #{id}");
    let orders = api.recent_admin_orders(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(update_order_status => Put "/orders/{order_id}" impl OrderManagement, CustomerManagement, AdminManagement);
/// Overwrites an order's status. The response body is the updated order, or `null` if there is no such order.
pub async fn update_order_status<B>(
    path: web::Path<String>,
    body: web::Json<StatusUpdate>,
    api: web::Data<OrderLookupApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CustomerManagement + AdminManagement,
{
    const CONTEXT: &str = "Error updating order status";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    let StatusUpdate { status } = body.into_inner();
    debug!("💻️ PUT status {status:?} for order #{id}");
    let order = api.update_order_status(id, status.as_deref()).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(order))
}

route!(customer_orders => Get "/customer/orders/{customer_id}" impl OrderManagement, CustomerManagement, AdminManagement);
/// All orders placed by a customer, with the shop's name and city attached.
pub async fn customer_orders<B>(
    path: web::Path<String>,
    api: web::Data<OrderLookupApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CustomerManagement + AdminManagement,
{
    const CONTEXT: &str = "Error fetching orders";
    let id = parse_id(&path.into_inner(), CONTEXT)?;
    debug!("💻️ GET orders for customer #{id}");
    let orders = api.customer_orders(id).await.map_err(api_error(CONTEXT))?;
    Ok(HttpResponse::Ok().json(orders))
}

//----------------------------------------------   Shops  ----------------------------------------------------
route!(search_shops => Get "/shops/search" impl AdminManagement, ProductManagement);
pub async fn search_shops<B>(
    query: web::Query<ShopSearchParams>,
    api: web::Data<SearchApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: AdminManagement + ProductManagement,
{
    let ShopSearchParams { city } = query.into_inner();
    debug!("💻️ GET shop search for {city:?}");
    let shops = api.search_shops(city.as_deref()).await.map_err(api_error("Error searching shops"))?;
    Ok(HttpResponse::Ok().json(shops))
}

route!(all_shops => Get "/shops/all" impl AdminManagement, ProductManagement);
pub async fn all_shops<B>(api: web::Data<SearchApi<B>>) -> Result<HttpResponse, ServerError>
where B: AdminManagement + ProductManagement {
    debug!("💻️ GET all shops");
    let shops = api.all_shops().await.map_err(api_error("Error fetching shops"))?;
    Ok(HttpResponse::Ok().json(shops))
}

route!(recent_shops => Get "/shops/recent" impl AdminManagement, ProductManagement);
pub async fn recent_shops<B>(api: web::Data<SearchApi<B>>) -> Result<HttpResponse, ServerError>
where B: AdminManagement + ProductManagement {
    debug!("💻️ GET recent shops");
    let shops = api.recent_shops().await.map_err(api_error("Error fetching recent shops"))?;
    Ok(HttpResponse::Ok().json(shops))
}
