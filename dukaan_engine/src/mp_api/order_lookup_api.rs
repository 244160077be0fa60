use std::fmt::Debug;

use log::*;

use super::{
    errors::MarketplaceError,
    order_objects::{AdminOrderView, CustomerOrderView, OrderSubmission},
    populate::{populate_customers, populate_shops},
    repositories::{required_id, CustomerRepository, OrderRepository},
};
use crate::{
    db::traits::{AdminManagement, CustomerManagement, OrderManagement, OrderQueryFilter},
    db_types::{NewOrder, Order, OrderStatusType, RecordId},
    helpers::is_blank,
};

pub const RECENT_ORDERS_LIMIT: i64 = 5;

/// `OrderLookupApi` places orders, moves them through their lifecycle, and produces the order lists each kind of user
/// sees, with the related customer or shop details attached.
pub struct OrderLookupApi<B> {
    db: B,
    orders: OrderRepository<B>,
    customers: CustomerRepository<B>,
}

impl<B> Debug for OrderLookupApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderLookupApi")
    }
}

impl<B: Clone> OrderLookupApi<B> {
    pub fn new(db: B) -> Self {
        let orders = OrderRepository::new(db.clone());
        let customers = CustomerRepository::new(db.clone());
        Self { db, orders, customers }
    }
}

impl<B> OrderLookupApi<B>
where B: OrderManagement + CustomerManagement + AdminManagement
{
    /// All orders placed with the given shop, oldest first, each carrying the current name and email of the customer.
    pub async fn admin_orders(&self, admin_id: RecordId) -> Result<Vec<AdminOrderView>, MarketplaceError> {
        let orders = self.orders.find_many(OrderQueryFilter::default().with_admin_id(admin_id)).await?;
        trace!("🔄️📦️ {} orders fetched for admin #{admin_id}", orders.len());
        self.with_customers(orders).await
    }

    /// The shop's most recently placed orders, newest first. Recency is judged by creation identity.
    pub async fn recent_admin_orders(&self, admin_id: RecordId) -> Result<Vec<AdminOrderView>, MarketplaceError> {
        let query =
            OrderQueryFilter::default().with_admin_id(admin_id).newest_first().with_limit(RECENT_ORDERS_LIMIT);
        let orders = self.orders.find_many(query).await?;
        self.with_customers(orders).await
    }

    /// All orders placed by the given customer, each carrying the name and city of the shop it was placed with.
    pub async fn customer_orders(&self, customer_id: RecordId) -> Result<Vec<CustomerOrderView>, MarketplaceError> {
        let orders = self.orders.find_many(OrderQueryFilter::default().with_customer_id(customer_id)).await?;
        let shops = populate_shops(&self.db, &orders, |o| o.admin_id).await?;
        let views = orders
            .into_iter()
            .map(|order| {
                let shop = shops.get(&order.admin_id);
                CustomerOrderView::new(order, shop)
            })
            .collect();
        Ok(views)
    }

    async fn with_customers(&self, orders: Vec<Order>) -> Result<Vec<AdminOrderView>, MarketplaceError> {
        let customers = populate_customers(&self.db, &orders, |o| o.customer_id).await?;
        let views = orders
            .into_iter()
            .map(|order| {
                let customer = customers.get(&order.customer_id);
                AdminOrderView::new(order, customer)
            })
            .collect();
        Ok(views)
    }

    /// Places a new order for the customer with the given shop.
    ///
    /// All five fields must be present and non-empty (a zero quantity counts as missing) and the customer must exist.
    /// The customer's current name is copied onto the order. `product_name` is free text; it is not checked against
    /// the shop's catalog and no stock is reserved.
    ///
    /// The customer lookup and the insert are separate store calls, so the customer could be removed in between.
    pub async fn place_order(&self, submission: OrderSubmission) -> Result<Order, MarketplaceError> {
        let OrderSubmission { customer_id, product_name, quantity, unit, admin_id } = submission;
        let missing = || MarketplaceError::MissingField("customerId, productName, quantity, unit, adminId".into());
        if is_blank(customer_id.as_deref()) ||
            is_blank(product_name.as_deref()) ||
            is_blank(unit.as_deref()) ||
            is_blank(admin_id.as_deref())
        {
            return Err(missing());
        }
        let quantity = quantity.filter(|q| *q != 0.0).ok_or_else(missing)?;
        let customer_id = required_id("customerId", customer_id.as_deref())?;
        let admin_id = required_id("adminId", admin_id.as_deref())?;
        let customer = self.customers.find_by_id(customer_id).await?;
        let order = NewOrder::new(
            customer_id,
            admin_id,
            product_name.unwrap_or_default(),
            quantity,
            unit.unwrap_or_default(),
        )
        .with_customer_name(customer.name);
        let order = self.orders.create(order).await?;
        info!("🔄️📦️ Order #{} placed by customer #{customer_id} with admin #{admin_id}", order.id);
        Ok(order)
    }

    /// Overwrites the status of an order and returns the updated order, or `None` if there is no such order.
    ///
    /// Any status string is accepted, and any state may follow any other. If `status` is `None` nothing is changed
    /// and the current order is returned.
    pub async fn update_order_status(
        &self,
        order_id: RecordId,
        status: Option<&str>,
    ) -> Result<Option<Order>, MarketplaceError> {
        let Some(status) = status else {
            debug!("🔄️📦️ No status supplied for order #{order_id}. Nothing to update.");
            return match self.orders.find_by_id(order_id).await {
                Ok(order) => Ok(Some(order)),
                Err(MarketplaceError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            };
        };
        if status.parse::<OrderStatusType>().is_err() {
            warn!("🔄️📦️ Order #{order_id} is being set to '{status}', which is not a known order status.");
        }
        let updated = self.orders.update_status(order_id, status).await?;
        match &updated {
            Some(order) => debug!("🔄️📦️ Order #{} status is now '{}'", order.id, order.status),
            None => debug!("🔄️📦️ Order #{order_id} does not exist. Status not updated."),
        }
        Ok(updated)
    }
}
