use log::trace;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::{id_list, SqliteDatabaseError};
use crate::{
    db::traits::CustomerQueryFilter,
    db_types::{Customer, NewCustomer, RecordId},
};

/// Inserts a new customer using the given connection and returns the stored record.
pub async fn insert_customer(
    customer: NewCustomer,
    conn: &mut SqliteConnection,
) -> Result<Customer, SqliteDatabaseError> {
    let record = sqlx::query_as::<_, Customer>(
        r#"
            INSERT INTO customers (name, city, email, password, mobile)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, city, email, password, mobile;
        "#,
    )
    .bind(customer.name)
    .bind(customer.city)
    .bind(customer.email)
    .bind(customer.password)
    .bind(customer.mobile)
    .fetch_all(conn)
    .await?
    .pop()
    .ok_or_else(|| SqliteDatabaseError::QueryError("Inserting the customer returned no row".into()))?;
    Ok(record)
}

pub async fn fetch_customer(id: RecordId, conn: &mut SqliteConnection) -> Result<Option<Customer>, SqliteDatabaseError> {
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT id, name, city, email, password, mobile FROM customers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(customer)
}

/// Fetches customers according to the criteria in the `CustomerQueryFilter`, in ascending id order.
pub async fn fetch_customers(
    query: CustomerQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Customer>, SqliteDatabaseError> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, name, city, email, password, mobile FROM customers ");
    if !query.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if !query.ids.is_empty() {
        where_clause.push(format!("id IN ({})", id_list(&query.ids)));
    }
    if let Some(email) = query.email {
        where_clause.push("email = ");
        where_clause.push_bind_unseparated(email);
    }
    if let Some(password) = query.password {
        where_clause.push("password = ");
        where_clause.push_bind_unseparated(password);
    }
    builder.push(" ORDER BY id ASC");
    if let Some(limit) = query.limit {
        if limit < 0 {
            return Err(SqliteDatabaseError::QueryError(format!("Negative limit: {limit}")));
        }
        builder.push(" LIMIT ");
        builder.push_bind(limit);
    }
    trace!("🗃️ Executing query: {}", builder.sql());
    let customers = builder.build_query_as::<Customer>().fetch_all(conn).await?;
    trace!("🗃️ Result of fetch_customers: {}", customers.len());
    Ok(customers)
}
