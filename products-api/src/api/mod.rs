pub mod error;
pub mod material;
pub mod offer;
pub mod offer_material;
pub mod status;

pub use error::{ApiError, ErrorResponse};

use rocket::Route;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(material::routes());
    routes.extend(offer::routes());
    routes.extend(offer_material::routes());
    routes.extend(status::routes());
    routes
}
