use std::fmt::Debug;

use log::*;
use sqlx::{pool::PoolConnection, Sqlite, SqlitePool, Transaction};

use super::{admins, customers, new_pool, orders, products, SqliteDatabaseError};
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
        StoreError,
    },
    db_types::{Admin, Customer, NewAdmin, NewCustomer, NewOrder, NewProduct, Order, Product, RecordId},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object with the given URL. The database file is created if it does not exist.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    /// Brings the schema up to date. Safe to call on every startup.
    pub async fn run_migrations(&self) -> Result<(), SqliteDatabaseError> {
        sqlx::migrate!("./src/db/sqlite/migrations").run(&self.pool).await?;
        info!("🗃️ Migrations complete for {}", self.url);
        Ok(())
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn conn(&self) -> Result<PoolConnection<Sqlite>, SqliteDatabaseError> {
        let conn = self.pool.acquire().await?;
        Ok(conn)
    }

    /// Writes go through a transaction so that they are visible on every other pooled connection once the call
    /// returns.
    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, SqliteDatabaseError> {
        let tx = self.pool.begin().await?;
        Ok(tx)
    }
}

impl CustomerManagement for SqliteDatabase {
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, StoreError> {
        let mut tx = self.begin().await?;
        let customer = customers::insert_customer(customer, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        debug!("🗃️ Customer #{} has been saved in the DB", customer.id);
        Ok(customer)
    }

    async fn fetch_customer(&self, id: RecordId) -> Result<Option<Customer>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(customers::fetch_customer(id, &mut conn).await?)
    }

    async fn fetch_customers(&self, query: CustomerQueryFilter) -> Result<Vec<Customer>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(customers::fetch_customers(query, &mut conn).await?)
    }
}

impl AdminManagement for SqliteDatabase {
    async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, StoreError> {
        let mut tx = self.begin().await?;
        let admin = admins::insert_admin(admin, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        debug!("🗃️ Admin #{} has been saved in the DB", admin.id);
        Ok(admin)
    }

    async fn fetch_admin(&self, id: RecordId) -> Result<Option<Admin>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(admins::fetch_admin(id, &mut conn).await?)
    }

    async fn fetch_admins(&self, query: AdminQueryFilter) -> Result<Vec<Admin>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(admins::fetch_admins(query, &mut conn).await?)
    }
}

impl ProductManagement for SqliteDatabase {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut tx = self.begin().await?;
        let product = products::insert_product(product, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        debug!("🗃️ Product #{} has been saved in the DB for admin #{}", product.id, product.admin_id);
        Ok(product)
    }

    async fn fetch_product(&self, id: RecordId) -> Result<Option<Product>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(products::fetch_product(id, &mut conn).await?)
    }

    async fn fetch_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(products::fetch_products(query, &mut conn).await?)
    }

    async fn delete_product(&self, id: RecordId) -> Result<u64, StoreError> {
        let mut tx = self.begin().await?;
        let removed = products::delete_product(id, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        debug!("🗃️ Deleted {removed} product(s) with id #{id}");
        Ok(removed)
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut tx = self.begin().await?;
        let order = orders::insert_order(order, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        Ok(order)
    }

    async fn fetch_order(&self, id: RecordId) -> Result<Option<Order>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(orders::fetch_order(id, &mut conn).await?)
    }

    async fn fetch_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.conn().await?;
        Ok(orders::fetch_orders(query, &mut conn).await?)
    }

    async fn update_order_status(&self, id: RecordId, status: &str) -> Result<Option<Order>, StoreError> {
        let mut tx = self.begin().await?;
        let order = orders::update_order_status(id, status, &mut tx).await?;
        tx.commit().await.map_err(SqliteDatabaseError::from)?;
        Ok(order)
    }
}
