//! API endpoints for offer/material links.
//!
//! A link ties one offer to one material. The database rejects links to
//! offers or materials that do not exist; that rejection surfaces as a 500.

use rocket::Route;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{self, Json};

use crate::api::error::{ApiError, parse_id};
use crate::logged_json::LoggedJson;
use crate::models::{OfferMaterial, OfferMaterialInput};
use crate::orm::offer_material::{
    get_all_offer_materials, get_offer_material_by_id, insert_offer_material,
    soft_delete_offer_material, update_offer_material,
};
use crate::orm::{DbConn, Visibility};

const OFFER_MATERIAL: &str = "OfferMaterial";

/// List OfferMaterials endpoint.
///
/// - **URL:** `/offer-materials`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves every link that has not been deleted, ordered by ID
///
/// Responds 200 with a JSON array (`[]` when empty), or 500 on database
/// failure.
#[get("/offer-materials")]
pub async fn list_offer_materials(db: DbConn) -> Result<Json<Vec<OfferMaterial>>, ApiError> {
    db.run(|conn| get_all_offer_materials(conn, Visibility::Visible))
        .await
        .map(Json)
        .map_err(|e| ApiError::database("listing offer materials", e))
}

/// Get OfferMaterial endpoint.
///
/// - **URL:** `/offer-materials/<id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves a single link by ID
///
/// Responds 200 with the link, 404 with `"OfferMaterial not found"` when it is
/// missing or deleted, or 500 on database failure.
#[get("/offer-materials/<id>")]
pub async fn get_offer_material(db: DbConn, id: &str) -> Result<Json<OfferMaterial>, ApiError> {
    let link_id = parse_id(id, OFFER_MATERIAL)?;
    db.run(move |conn| get_offer_material_by_id(conn, link_id, Visibility::Visible))
        .await
        .map_err(|e| ApiError::database("fetching offer material", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(OFFER_MATERIAL))
}

/// Create OfferMaterial endpoint.
///
/// - **URL:** `/offer-materials`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// { "offer_id": 1, "material_id": 2 }
/// ```
///
/// Responds 201 with the stored link and a `Location` header, 400 for an
/// undecodable body, or 500 on database failure (including unknown ids).
#[post("/offer-materials", data = "<new_link>")]
pub async fn create_offer_material(
    db: DbConn,
    new_link: Result<LoggedJson<OfferMaterialInput>, json::Error<'_>>,
) -> Result<status::Created<Json<OfferMaterial>>, ApiError> {
    let input = new_link?.into_inner();
    let link = db
        .run(move |conn| insert_offer_material(conn, input))
        .await
        .map_err(|e| ApiError::database("creating offer material", e))?;
    Ok(status::Created::new(format!("/offer-materials/{}", link.id)).body(Json(link)))
}

/// Update OfferMaterial endpoint.
///
/// - **URL:** `/offer-materials/<id>`
/// - **Method:** `PUT`
/// - **Purpose:** Repoints a link at another offer and material
///
/// Responds 200 with the stored link, 400 for an undecodable body, 404 when
/// there is no visible link with that ID, or 500 on database failure.
#[put("/offer-materials/<id>", data = "<update_data>")]
pub async fn update_offer_material_endpoint(
    db: DbConn,
    id: &str,
    update_data: Result<LoggedJson<OfferMaterialInput>, json::Error<'_>>,
) -> Result<Json<OfferMaterial>, ApiError> {
    let input = update_data?.into_inner();
    let link_id = parse_id(id, OFFER_MATERIAL)?;
    db.run(move |conn| update_offer_material(conn, link_id, input))
        .await
        .map_err(|e| ApiError::database("updating offer material", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(OFFER_MATERIAL))
}

/// Delete OfferMaterial endpoint.
///
/// - **URL:** `/offer-materials/<id>`
/// - **Method:** `DELETE`
/// - **Purpose:** Soft deletes a link
///
/// Responds 204 on success, 404 when the link is missing or already deleted,
/// or 500 on database failure.
#[delete("/offer-materials/<id>")]
pub async fn delete_offer_material_endpoint(db: DbConn, id: &str) -> Result<Status, ApiError> {
    let link_id = parse_id(id, OFFER_MATERIAL)?;
    let found = db
        .run(move |conn| soft_delete_offer_material(conn, link_id))
        .await
        .map_err(|e| ApiError::database("deleting offer material", e))?;
    if found {
        Ok(Status::NoContent)
    } else {
        Err(ApiError::NotFound(OFFER_MATERIAL))
    }
}

pub fn routes() -> Vec<Route> {
    routes![
        list_offer_materials,
        get_offer_material,
        create_offer_material,
        update_offer_material_endpoint,
        delete_offer_material_endpoint
    ]
}
