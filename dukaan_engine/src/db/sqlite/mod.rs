pub mod db;
mod errors;

pub mod admins;
pub mod customers;
pub mod orders;
pub mod products;

use std::str::FromStr;

pub use db::SqliteDatabase;
pub use errors::SqliteDatabaseError;
use log::info;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Opens a connection pool to the database at `url`, creating the database file (and its directory) if it does not
/// exist yet.
pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, SqliteDatabaseError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let filename = options.clone().get_filename();
    if let Some(dir) = filename.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        info!("🗃️ Creating database directory {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await?;
    Ok(pool)
}

/// Renders a list of ids for an `IN (...)` clause. Ids are integers, so they are safe to inline.
pub(crate) fn id_list(ids: &[crate::db_types::RecordId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<String>>().join(",")
}
