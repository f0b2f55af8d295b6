#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket::figment::value::Map;
use rocket::figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use rocket::http::ContentType;
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod logged_json;
pub mod models;
pub mod orm;
pub use orm::DbConn;
pub mod schema;

#[cfg(test)]
pub mod generate_types;

/// Port the service listens on unless `Rocket.toml` or `ROCKET_PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 8003;

#[catch(400)]
fn bad_request(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Bad Request",
        "path": req.uri().path().to_string(),
        "status": 400
    }))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Not Found",
        "path": req.uri().path().to_string(),
        "status": 404
    }))
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Unprocessable Entity",
        "path": req.uri().path().to_string(),
        "status": 422
    }))
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Internal Server Error",
        "path": req.uri().path().to_string(),
        "status": 500
    }))
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    Json(json!({
        "error": status.reason().unwrap_or("Unknown Error"),
        "path": req.uri().path().to_string(),
        "status": status.code
    }))
}

/// Creates a response fairing that labels every response as JSON.
///
/// Responses that already carry a content type are left alone, so this only
/// affects bodiless responses such as `204 No Content`.
pub fn json_content_type_fairing() -> AdHoc {
    AdHoc::on_response("JSON Content-Type", |_req, res| {
        Box::pin(async move {
            if res.content_type().is_none() {
                res.set_header(ContentType::JSON);
            }
        })
    })
}

/// Mounts the resource routes, JSON catchers and response fairings.
///
/// Shared by [`rocket()`] and the test instance so both serve the same
/// surface.
pub fn mount_api_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", api::routes())
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_server_error,
                default_catcher
            ],
        )
        .attach(json_content_type_fairing())
}

/// Builds the configuration the server runs with.
///
/// Sources, lowest precedence first: built-in defaults (port 8003),
/// `Rocket.toml`, `ROCKET_*` environment variables, then `DATABASE_URL`.
pub fn figment() -> Figment {
    let mut figment = Figment::from(rocket::Config::default())
        .merge(("port", DEFAULT_PORT))
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global());

    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        figment = figment.merge(("databases.products_db.url", database_url));
    }

    figment
}

fn log_rocket_info(rocket: &Rocket<Build>) {
    let figment = rocket.figment();

    if let Ok(address) = figment.extract_inner::<String>("address") {
        info!("Rocket is running at: {}", address);
    }

    if let Ok(port) = figment.extract_inner::<u16>("port") {
        info!("Rocket is listening on port: {}", port);
    }

    if std::env::var("DATABASE_URL").is_err() {
        warn!("DATABASE_URL is not set; falling back to Rocket.toml / ROCKET_DATABASES");
    }

    match figment.extract_inner::<Map<String, Value>>("databases.products_db") {
        Ok(db_config) => {
            if let Some(Value::String(url)) = db_config.get("url") {
                info!("Database URL: {}", url);
            } else {
                warn!("Database URL not found in configuration");
            }
        }
        Err(e) => {
            warn!("Failed to extract database configuration: {}", e);
        }
    }
}

/// Builds the production Rocket instance.
///
/// Tests do not go through this function; they use
/// [`orm::testing::test_rocket`], which swaps in an in-memory database.
pub fn rocket() -> Rocket<Build> {
    let rocket = rocket::custom(figment())
        .attach(DbConn::fairing())
        .attach(orm::set_foreign_keys_fairing())
        .attach(orm::run_migrations_fairing());

    log_rocket_info(&rocket);

    mount_api_routes(rocket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocket_reports_database_config_after_logger_setup() {
        // Building goes through log_rocket_info, which owns every startup warning
        let rocket = rocket();
        let db_config = rocket
            .figment()
            .extract_inner::<Map<String, Value>>("databases.products_db")
            .expect("database configuration");
        assert!(db_config.contains_key("url"));
    }
}
