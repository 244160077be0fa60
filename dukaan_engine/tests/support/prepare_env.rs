use std::path::PathBuf;

use dukaan_engine::SqliteDatabase;
use log::*;
use sqlx::{migrate::MigrateDatabase, Sqlite};

/// Creates a fresh, migrated database at a random location in the OS temp directory.
pub async fn prepare_test_env() -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
    let url = random_db_url();
    create_database(&url).await;
    let db = connect(&url).await;
    db.run_migrations().await.expect("Error running DB migrations");
    db
}

/// Opens another handle, with its own pool, on an existing test database.
pub async fn connect(url: &str) -> SqliteDatabase {
    SqliteDatabase::new_with_url(url, 5).await.expect("Error creating connection to database")
}

pub fn random_db_url() -> String {
    let path: PathBuf = std::env::temp_dir().join(format!("dukaan_test_{}.db", rand::random::<u64>()));
    format!("sqlite://{}", path.display())
}

pub async fn create_database(url: &str) {
    if let Err(e) = Sqlite::drop_database(url).await {
        warn!("Error dropping database {url}: {e:?}");
    }
    Sqlite::create_database(url).await.expect("Error creating database");
    info!("Created Sqlite database {url}");
}
