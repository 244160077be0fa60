use log::trace;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::SqliteDatabaseError;
use crate::{
    db::traits::ProductQueryFilter,
    db_types::{NewProduct, Product, RecordId},
};

pub async fn insert_product(product: NewProduct, conn: &mut SqliteConnection) -> Result<Product, SqliteDatabaseError> {
    let record = sqlx::query_as::<_, Product>(
        r#"
            INSERT INTO products (name, price, unit, image, quantity, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, price, unit, image, quantity, admin_id;
        "#,
    )
    .bind(product.name)
    .bind(product.price)
    .bind(product.unit)
    .bind(product.image)
    .bind(product.quantity)
    .bind(product.admin_id)
    .fetch_all(conn)
    .await?
    .pop()
    .ok_or_else(|| SqliteDatabaseError::QueryError("Inserting the product returned no row".into()))?;
    Ok(record)
}

pub async fn fetch_product(id: RecordId, conn: &mut SqliteConnection) -> Result<Option<Product>, SqliteDatabaseError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, unit, image, quantity, admin_id FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(product)
}

/// Fetches products according to the criteria in the `ProductQueryFilter`, in ascending id order.
pub async fn fetch_products(
    query: ProductQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Product>, SqliteDatabaseError> {
    let mut builder =
        QueryBuilder::<Sqlite>::new("SELECT id, name, price, unit, image, quantity, admin_id FROM products ");
    if !query.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(admin_id) = query.admin_id {
        where_clause.push("admin_id = ");
        where_clause.push_bind_unseparated(admin_id);
    }
    if let Some(name) = query.name_contains {
        where_clause.push("instr(lower(name), lower(");
        where_clause.push_bind_unseparated(name);
        where_clause.push_unseparated(")) > 0");
    }
    builder.push(" ORDER BY id ASC");
    trace!("🗃️ Executing query: {}", builder.sql());
    let products = builder.build_query_as::<Product>().fetch_all(conn).await?;
    trace!("🗃️ Result of fetch_products: {}", products.len());
    Ok(products)
}

pub async fn delete_product(id: RecordId, conn: &mut SqliteConnection) -> Result<u64, SqliteDatabaseError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1").bind(id).execute(conn).await?;
    Ok(result.rows_affected())
}
