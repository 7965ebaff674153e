use log::*;
use sqlx::migrate::MigrateDatabase;
use vechnost_engine::SqliteDatabase;

pub fn random_db_path() -> String {
    let id = rand::random::<u64>();
    format!("sqlite://../data/test_store_{id}")
}

pub async fn prepare_test_env(url: &str) {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    create_database(url).await;
    run_migrations(url).await;
}

pub async fn create_database(url: &str) {
    if let Err(e) = sqlx::Sqlite::drop_database(url).await {
        warn!("Could not drop database {url}. {e}");
    }
    sqlx::Sqlite::create_database(url).await.expect("Error creating test database");
}

pub async fn run_migrations(url: &str) {
    let db = SqliteDatabase::new_with_url(url, 5).await.expect("Error connecting to the test database");
    db.run_migrations().await.expect("Error running migrations");
}

pub async fn tear_down(db: &SqliteDatabase) {
    db.pool().close().await;
    if let Err(e) = sqlx::Sqlite::drop_database(db.url()).await {
        warn!("Could not drop test database {}. {e}", db.url());
    }
}
