//! API endpoints for managing materials.
//!
//! Materials are the raw goods an offer can be made of. Deleting a material
//! only marks it deleted; the row stays in the database and disappears from
//! every endpoint below.

use rocket::Route;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{self, Json};

use crate::api::error::{ApiError, parse_id};
use crate::logged_json::LoggedJson;
use crate::models::{Material, MaterialInput};
use crate::orm::material::{
    get_all_materials, get_material_by_id, insert_material, soft_delete_material,
    update_material,
};
use crate::orm::{DbConn, Visibility};

const MATERIAL: &str = "Material";

/// List Materials endpoint.
///
/// - **URL:** `/materials`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves all materials that have not been deleted (ordered by ID)
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Steel",
///     "active": true,
///     "created_at": "2025-03-01T12:00:00",
///     "updated_at": "2025-03-01T12:00:00",
///     "deleted_at": null
///   }
/// ]
/// ```
///
/// An empty table yields `[]`.
///
/// **Failure (HTTP 500 Internal Server Error):**
/// Database error during retrieval
#[get("/materials")]
pub async fn list_materials(db: DbConn) -> Result<Json<Vec<Material>>, ApiError> {
    db.run(|conn| get_all_materials(conn, Visibility::Visible))
        .await
        .map(Json)
        .map_err(|e| ApiError::database("listing materials", e))
}

/// Get Material endpoint.
///
/// - **URL:** `/materials/<id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves a single material by ID
///
/// # Response
///
/// **Success (HTTP 200 OK):** the material as JSON
///
/// **Failure (HTTP 404 Not Found):**
/// ```json
/// { "error": "Material not found" }
/// ```
///
/// **Failure (HTTP 500 Internal Server Error):**
/// Database error during retrieval
#[get("/materials/<id>")]
pub async fn get_material(db: DbConn, id: &str) -> Result<Json<Material>, ApiError> {
    let material_id = parse_id(id, MATERIAL)?;
    db.run(move |conn| get_material_by_id(conn, material_id, Visibility::Visible))
        .await
        .map_err(|e| ApiError::database("fetching material", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(MATERIAL))
}

/// Create Material endpoint.
///
/// - **URL:** `/materials`
/// - **Method:** `POST`
/// - **Purpose:** Creates a new material
///
/// # Request Format
///
/// ```json
/// {
///   "name": "Steel",
///   "active": true
/// }
/// ```
///
/// `name` is required (an empty string is accepted). `active` defaults to
/// `false`. Any `id` or timestamp fields in the body are ignored.
///
/// # Response
///
/// **Success (HTTP 201 Created):** the stored material, including the
/// server-assigned `id`, `created_at` and `updated_at`, with a `Location`
/// header pointing at it.
///
/// **Failure (HTTP 400 Bad Request):** the body could not be decoded
///
/// **Failure (HTTP 500 Internal Server Error):** database error during creation
#[post("/materials", data = "<new_material>")]
pub async fn create_material(
    db: DbConn,
    new_material: Result<LoggedJson<MaterialInput>, json::Error<'_>>,
) -> Result<status::Created<Json<Material>>, ApiError> {
    let input = new_material?.into_inner();
    let material = db
        .run(move |conn| insert_material(conn, input))
        .await
        .map_err(|e| ApiError::database("creating material", e))?;
    Ok(status::Created::new(format!("/materials/{}", material.id)).body(Json(material)))
}

/// Update Material endpoint.
///
/// - **URL:** `/materials/<id>`
/// - **Method:** `PUT`
/// - **Purpose:** Replaces every mutable field of a material
///
/// The body has the same shape as for creation. `updated_at` is refreshed by
/// the database and the stored row is returned.
///
/// # Response
///
/// **Success (HTTP 200 OK):** the updated material
///
/// **Failure (HTTP 400 Bad Request):** the body could not be decoded
///
/// **Failure (HTTP 404 Not Found):** no material with that ID, or it was deleted
///
/// **Failure (HTTP 500 Internal Server Error):** database error during the update
#[put("/materials/<id>", data = "<update_data>")]
pub async fn update_material_endpoint(
    db: DbConn,
    id: &str,
    update_data: Result<LoggedJson<MaterialInput>, json::Error<'_>>,
) -> Result<Json<Material>, ApiError> {
    let input = update_data?.into_inner();
    let material_id = parse_id(id, MATERIAL)?;
    db.run(move |conn| update_material(conn, material_id, input))
        .await
        .map_err(|e| ApiError::database("updating material", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(MATERIAL))
}

/// Delete Material endpoint.
///
/// - **URL:** `/materials/<id>`
/// - **Method:** `DELETE`
/// - **Purpose:** Soft deletes a material by ID
///
/// # Response
///
/// **Success (HTTP 204 No Content):** the material was marked deleted
///
/// **Failure (HTTP 404 Not Found):** no material with that ID, or it was
/// already deleted
///
/// **Failure (HTTP 500 Internal Server Error):** database error during deletion
#[delete("/materials/<id>")]
pub async fn delete_material_endpoint(db: DbConn, id: &str) -> Result<Status, ApiError> {
    let material_id = parse_id(id, MATERIAL)?;
    let found = db
        .run(move |conn| soft_delete_material(conn, material_id))
        .await
        .map_err(|e| ApiError::database("deleting material", e))?;
    if found {
        Ok(Status::NoContent)
    } else {
        Err(ApiError::NotFound(MATERIAL))
    }
}

/// Returns a vector of all routes defined in this module.
pub fn routes() -> Vec<Route> {
    routes![
        list_materials,
        get_material,
        create_material,
        update_material_endpoint,
        delete_material_endpoint
    ]
}
