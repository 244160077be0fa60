use log::{debug, trace};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::SqliteDatabaseError;
use crate::{
    db::traits::OrderQueryFilter,
    db_types::{NewOrder, Order, RecordId},
};

const ORDER_COLUMNS: &str =
    "id, customer_name, product_name, quantity, unit, status, admin_id, customer_id, created_at, updated_at";

/// Inserts a new order into the database using the given connection. This is not atomic with any lookups the caller
/// made beforehand.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, SqliteDatabaseError> {
    let sql = format!(
        r#"
            INSERT INTO orders (customer_name, product_name, quantity, unit, status, admin_id, customer_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ORDER_COLUMNS};
        "#
    );
    let record = sqlx::query_as::<_, Order>(&sql)
        .bind(order.customer_name)
        .bind(order.product_name)
        .bind(order.quantity)
        .bind(order.unit)
        .bind(order.status.to_string())
        .bind(order.admin_id)
        .bind(order.customer_id)
        .fetch_all(conn)
        .await?
        .pop()
        .ok_or_else(|| SqliteDatabaseError::QueryError("Inserting the order returned no row".into()))?;
    debug!("🗃️ Order #{} has been saved in the DB for customer #{}", record.id, record.customer_id);
    Ok(record)
}

pub async fn fetch_order(id: RecordId, conn: &mut SqliteConnection) -> Result<Option<Order>, SqliteDatabaseError> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
    let order = sqlx::query_as::<_, Order>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(order)
}

/// Fetches orders according to criteria specified in the `OrderQueryFilter`
///
/// Resulting orders are ordered by id (i.e. creation order) ascending, or descending if `newest_first` is set.
pub async fn fetch_orders(query: OrderQueryFilter, conn: &mut SqliteConnection) -> Result<Vec<Order>, SqliteDatabaseError> {
    let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {ORDER_COLUMNS} FROM orders "));
    if !query.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(admin_id) = query.admin_id {
        where_clause.push("admin_id = ");
        where_clause.push_bind_unseparated(admin_id);
    }
    if let Some(customer_id) = query.customer_id {
        where_clause.push("customer_id = ");
        where_clause.push_bind_unseparated(customer_id);
    }
    if query.newest_first {
        builder.push(" ORDER BY id DESC");
    } else {
        builder.push(" ORDER BY id ASC");
    }
    if let Some(limit) = query.limit {
        if limit < 0 {
            return Err(SqliteDatabaseError::QueryError(format!("Negative limit: {limit}")));
        }
        builder.push(" LIMIT ");
        builder.push_bind(limit);
    }
    trace!("🗃️ Executing query: {}", builder.sql());
    let orders = builder.build_query_as::<Order>().fetch_all(conn).await?;
    trace!("🗃️ Result of fetch_orders: {}", orders.len());
    Ok(orders)
}

pub(crate) async fn update_order_status(
    id: RecordId,
    status: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, SqliteDatabaseError> {
    let sql = format!(
        "UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2 RETURNING {ORDER_COLUMNS}"
    );
    let order = sqlx::query_as::<_, Order>(&sql).bind(status).bind(id).fetch_all(conn).await?.pop();
    trace!("🗃️ Result of update_order_status for #{id}: {}", order.is_some());
    Ok(order)
}
