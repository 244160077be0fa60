use log::trace;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::{id_list, SqliteDatabaseError};
use crate::{
    db::traits::AdminQueryFilter,
    db_types::{Admin, NewAdmin, RecordId},
};

const ADMIN_COLUMNS: &str = "id, admin_name, shop_name, city, email, password, mobile, photo";

/// Inserts a new shop admin using the given connection and returns the stored record.
pub async fn insert_admin(admin: NewAdmin, conn: &mut SqliteConnection) -> Result<Admin, SqliteDatabaseError> {
    let sql = format!(
        r#"
            INSERT INTO admins (admin_name, shop_name, city, email, password, mobile, photo)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ADMIN_COLUMNS};
        "#
    );
    let record = sqlx::query_as::<_, Admin>(&sql)
        .bind(admin.admin_name)
        .bind(admin.shop_name)
        .bind(admin.city)
        .bind(admin.email)
        .bind(admin.password)
        .bind(admin.mobile)
        .bind(admin.photo.unwrap_or_default())
        .fetch_all(conn)
        .await?
        .pop()
        .ok_or_else(|| SqliteDatabaseError::QueryError("Inserting the admin returned no row".into()))?;
    Ok(record)
}

pub async fn fetch_admin(id: RecordId, conn: &mut SqliteConnection) -> Result<Option<Admin>, SqliteDatabaseError> {
    let sql = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE id = $1");
    let admin = sqlx::query_as::<_, Admin>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(admin)
}

/// Fetches admins according to the criteria in the `AdminQueryFilter`.
///
/// Results are in ascending id order, or descending when the filter asks for the newest shops first.
pub async fn fetch_admins(query: AdminQueryFilter, conn: &mut SqliteConnection) -> Result<Vec<Admin>, SqliteDatabaseError> {
    let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {ADMIN_COLUMNS} FROM admins "));
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
    if let Some(city) = query.city_contains {
        where_clause.push("instr(lower(city), lower(");
        where_clause.push_bind_unseparated(city);
        where_clause.push_unseparated(")) > 0");
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
    let admins = builder.build_query_as::<Admin>().fetch_all(conn).await?;
    trace!("🗃️ Result of fetch_admins: {}", admins.len());
    Ok(admins)
}
