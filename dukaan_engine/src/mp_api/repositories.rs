//! Entity repositories.
//!
//! Each repository wraps one collection of the store and adds the entity's shape rules: required fields, defaults,
//! and turning "no such record" into [`MarketplaceError::NotFound`].
use log::*;

use super::{errors::MarketplaceError, product_objects::ProductSubmission};
use crate::{
    db::traits::{
        AdminManagement,
        AdminQueryFilter,
        CustomerManagement,
        CustomerQueryFilter,
        OrderManagement,
        OrderQueryFilter,
        ProductManagement,
        ProductQueryFilter,
    },
    db_types::{Admin, Customer, MalformedIdError, NewAdmin, NewCustomer, NewOrder, NewProduct, Order, Product, RecordId},
    helpers::is_blank,
};

const DEFAULT_PRODUCT_QUANTITY: f64 = 1.0;

/// Turns a reference supplied by a client into a record id.
///
/// Blank values count as missing. Values that are present but are not ids are a store-level failure, the same as
/// querying the store with an id of the wrong type.
pub(crate) fn required_id(field: &str, value: Option<&str>) -> Result<RecordId, MarketplaceError> {
    if is_blank(value) {
        return Err(MarketplaceError::MissingField(field.to_string()));
    }
    value
        .unwrap_or_default()
        .parse()
        .map_err(|e: MalformedIdError| MarketplaceError::StoreFailure(format!("{field}: {e}")))
}

//--------------------------------------       Customers       ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct CustomerRepository<B> {
    db: B,
}

impl<B> CustomerRepository<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B: CustomerManagement> CustomerRepository<B> {
    /// Stores a new customer exactly as supplied. Duplicate emails are allowed.
    pub async fn create(&self, fields: NewCustomer) -> Result<Customer, MarketplaceError> {
        let customer = self.db.insert_customer(fields).await?;
        Ok(customer)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Customer, MarketplaceError> {
        self.db.fetch_customer(id).await?.ok_or_else(|| MarketplaceError::NotFound("Customer".into()))
    }

    pub async fn find_many(&self, filter: CustomerQueryFilter) -> Result<Vec<Customer>, MarketplaceError> {
        Ok(self.db.fetch_customers(filter).await?)
    }
}

//--------------------------------------         Admins        ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct AdminRepository<B> {
    db: B,
}

impl<B> AdminRepository<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B: AdminManagement> AdminRepository<B> {
    /// Stores a new shop admin exactly as supplied. Duplicate emails are allowed.
    pub async fn create(&self, fields: NewAdmin) -> Result<Admin, MarketplaceError> {
        let admin = self.db.insert_admin(fields).await?;
        Ok(admin)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Admin, MarketplaceError> {
        self.db.fetch_admin(id).await?.ok_or_else(|| MarketplaceError::NotFound("Admin".into()))
    }

    pub async fn find_many(&self, filter: AdminQueryFilter) -> Result<Vec<Admin>, MarketplaceError> {
        Ok(self.db.fetch_admins(filter).await?)
    }
}

//--------------------------------------        Products       ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct ProductRepository<B> {
    db: B,
}

impl<B> ProductRepository<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B: ProductManagement> ProductRepository<B> {
    /// Validates and stores a new product.
    ///
    /// `name`, `price`, `unit`, `image` and `adminId` must all be present and non-empty; a price of zero counts as
    /// missing. `quantity` defaults to 1.
    pub async fn create(&self, fields: ProductSubmission) -> Result<Product, MarketplaceError> {
        let product = validate_product(fields)?;
        let product = self.db.insert_product(product).await?;
        Ok(product)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Product, MarketplaceError> {
        self.db.fetch_product(id).await?.ok_or_else(|| MarketplaceError::NotFound("Product".into()))
    }

    pub async fn find_many(&self, filter: ProductQueryFilter) -> Result<Vec<Product>, MarketplaceError> {
        Ok(self.db.fetch_products(filter).await?)
    }

    pub async fn find_for_admin(&self, admin_id: RecordId) -> Result<Vec<Product>, MarketplaceError> {
        self.find_many(ProductQueryFilter::default().with_admin_id(admin_id)).await
    }

    /// Removes the product. Deleting a product that does not exist is not an error.
    pub async fn delete(&self, id: RecordId) -> Result<(), MarketplaceError> {
        let removed = self.db.delete_product(id).await?;
        if removed == 0 {
            debug!("🔄️ Product #{id} was already gone. Nothing was deleted.");
        }
        Ok(())
    }
}

fn validate_product(fields: ProductSubmission) -> Result<NewProduct, MarketplaceError> {
    let ProductSubmission { name, price, unit, image, admin_id, quantity } = fields;
    let missing = |field: &str| MarketplaceError::MissingField(field.to_string());
    let name = name.filter(|s| !s.is_empty()).ok_or_else(|| missing("name"))?;
    let price = price.filter(|p| *p != 0.0).ok_or_else(|| missing("price"))?;
    let unit = unit.filter(|s| !s.is_empty()).ok_or_else(|| missing("unit"))?;
    let image = image.filter(|s| !s.is_empty()).ok_or_else(|| missing("image"))?;
    let admin_id = required_id("adminId", admin_id.as_deref())?;
    if price.is_sign_negative() || !price.is_finite() {
        return Err(MarketplaceError::InvalidField("price".into()));
    }
    let quantity = quantity.unwrap_or(DEFAULT_PRODUCT_QUANTITY);
    Ok(NewProduct { name, price, unit, image, quantity, admin_id })
}

//--------------------------------------         Orders        ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct OrderRepository<B> {
    db: B,
}

impl<B> OrderRepository<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B: OrderManagement> OrderRepository<B> {
    pub async fn create(&self, order: NewOrder) -> Result<Order, MarketplaceError> {
        Ok(self.db.insert_order(order).await?)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Order, MarketplaceError> {
        self.db.fetch_order(id).await?.ok_or_else(|| MarketplaceError::NotFound("Order".into()))
    }

    pub async fn find_many(&self, filter: OrderQueryFilter) -> Result<Vec<Order>, MarketplaceError> {
        Ok(self.db.fetch_orders(filter).await?)
    }

    /// Overwrites the order's status. Returns `None` if there is no such order.
    pub async fn update_status(&self, id: RecordId, status: &str) -> Result<Option<Order>, MarketplaceError> {
        Ok(self.db.update_order_status(id, status).await?)
    }
}
