//! Database and Rocket fixtures for unit and integration tests.

use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket};
use uuid::Uuid;

use super::db::{
    DbConn, run_migrations_fairing, run_pending_migrations, set_foreign_keys,
    set_foreign_keys_fairing,
};

/// Creates and configures a Rocket instance for testing with an in-memory SQLite database.
///
/// The returned Rocket instance will have:
/// - A unique shared in-memory SQLite database, so tests never see each other's rows
/// - Database connection pool attached
/// - Foreign keys enabled
/// - All migrations run
/// - API routes, catchers and response fairings mounted exactly as in production
pub fn test_rocket() -> Rocket<Build> {
    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    // A single pooled connection keeps the shared in-memory database alive for
    // the lifetime of the instance.
    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 1.into(),
        "timeout" => 5.into(),
    };

    let figment =
        rocket::Config::figment().merge(("databases", map!["products_db" => db_config]));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(set_foreign_keys_fairing())
        .attach(run_migrations_fairing());

    crate::mount_api_routes(rocket)
}

/// Creates a synchronous in-memory SQLite database connection for unit tests.
///
/// Migrations are applied and foreign keys are enabled. Each call returns a
/// new, independent database.
pub fn setup_test_db() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    set_foreign_keys(&mut conn).expect("Failed to enable foreign keys");
    run_pending_migrations(&mut conn).expect("Failed to run pending migrations");
    conn
}
