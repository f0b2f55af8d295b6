//! API endpoints for managing offers.

use rocket::Route;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{self, Json};

use crate::api::error::{ApiError, parse_id};
use crate::logged_json::LoggedJson;
use crate::models::{Offer, OfferInput};
use crate::orm::offer::{
    get_all_offers, get_offer_by_id, insert_offer, soft_delete_offer, update_offer,
};
use crate::orm::{DbConn, Visibility};

const OFFER: &str = "Offer";

/// List Offers endpoint.
///
/// - **URL:** `/offers`
/// - **Method:** `GET`
///
/// Returns every offer that has not been deleted, ordered by ID, or `[]`.
#[get("/offers")]
pub async fn list_offers(db: DbConn) -> Result<Json<Vec<Offer>>, ApiError> {
    db.run(|conn| get_all_offers(conn, Visibility::Visible))
        .await
        .map(Json)
        .map_err(|e| ApiError::database("listing offers", e))
}

/// Get Offer endpoint.
///
/// - **URL:** `/offers/<id>`
/// - **Method:** `GET`
///
/// Returns 404 with `"Offer not found"` when the offer is missing or deleted.
#[get("/offers/<id>")]
pub async fn get_offer(db: DbConn, id: &str) -> Result<Json<Offer>, ApiError> {
    let offer_id = parse_id(id, OFFER)?;
    db.run(move |conn| get_offer_by_id(conn, offer_id, Visibility::Visible))
        .await
        .map_err(|e| ApiError::database("fetching offer", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(OFFER))
}

/// Create Offer endpoint.
///
/// - **URL:** `/offers`
/// - **Method:** `POST`
///
/// # Request Format
///
/// ```json
/// { "name": "Spring Offer" }
/// ```
///
/// Responds 201 with the stored offer, 400 for an undecodable body and 500 on
/// database failure.
#[post("/offers", data = "<new_offer>")]
pub async fn create_offer(
    db: DbConn,
    new_offer: Result<LoggedJson<OfferInput>, json::Error<'_>>,
) -> Result<status::Created<Json<Offer>>, ApiError> {
    let input = new_offer?.into_inner();
    let offer = db
        .run(move |conn| insert_offer(conn, input))
        .await
        .map_err(|e| ApiError::database("creating offer", e))?;
    Ok(status::Created::new(format!("/offers/{}", offer.id)).body(Json(offer)))
}

/// Update Offer endpoint.
///
/// - **URL:** `/offers/<id>`
/// - **Method:** `PUT`
///
/// Overwrites the name and refreshes `updated_at`. Returns the stored offer,
/// or 404 if there is no visible offer with that ID.
#[put("/offers/<id>", data = "<update_data>")]
pub async fn update_offer_endpoint(
    db: DbConn,
    id: &str,
    update_data: Result<LoggedJson<OfferInput>, json::Error<'_>>,
) -> Result<Json<Offer>, ApiError> {
    let input = update_data?.into_inner();
    let offer_id = parse_id(id, OFFER)?;
    db.run(move |conn| update_offer(conn, offer_id, input))
        .await
        .map_err(|e| ApiError::database("updating offer", e))?
        .map(Json)
        .ok_or(ApiError::NotFound(OFFER))
}

/// Delete Offer endpoint.
///
/// - **URL:** `/offers/<id>`
/// - **Method:** `DELETE`
///
/// Soft deletes the offer. 204 on success; 404 if it does not exist or was
/// already deleted, so a repeated DELETE reports 404.
#[delete("/offers/<id>")]
pub async fn delete_offer_endpoint(db: DbConn, id: &str) -> Result<Status, ApiError> {
    let offer_id = parse_id(id, OFFER)?;
    db.run(move |conn| soft_delete_offer(conn, offer_id))
        .await
        .map_err(|e| ApiError::database("deleting offer", e))
        .and_then(|found| {
            if found {
                Ok(Status::NoContent)
            } else {
                Err(ApiError::NotFound(OFFER))
            }
        })
}

pub fn routes() -> Vec<Route> {
    routes![
        list_offers,
        get_offer,
        create_offer,
        update_offer_endpoint,
        delete_offer_endpoint
    ]
}
