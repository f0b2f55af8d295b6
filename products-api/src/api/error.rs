//! Error type shared by every resource endpoint.
//!
//! Each failure falls into one of three kinds, and each kind has exactly one
//! HTTP status:
//!
//! | Kind             | Status | Body                                        |
//! |------------------|--------|---------------------------------------------|
//! | `Validation`     | 400    | the JSON decode error                       |
//! | `NotFound`       | 404    | `"<Entity> not found"`                      |
//! | `Infrastructure` | 500    | `"Database error while <action>: <cause>"`  |
//!
//! Bodies are always `{"error": "..."}`.

use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, Responder, status};
use rocket::serde::json::{self, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Error response structure for API failures.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded into the expected input.
    #[error("{0}")]
    Validation(String),

    /// No visible row matches the identifier.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The database was unreachable or rejected the statement.
    #[error("Database error while {action}: {source}")]
    Infrastructure {
        action: &'static str,
        #[source]
        source: diesel::result::Error,
    },
}

impl ApiError {
    /// Wraps a storage failure, logging it for operators.
    pub fn database(action: &'static str, source: diesel::result::Error) -> Self {
        error!("Database error while {}: {:?}", action, source);
        ApiError::Infrastructure { action, source }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Infrastructure { .. } => Status::InternalServerError,
        }
    }
}

impl<'r> From<json::Error<'r>> for ApiError {
    fn from(e: json::Error<'r>) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        status::Custom(self.status(), body).respond_to(req)
    }
}

/// Parses an identifier route segment.
///
/// Identifiers arrive as free-form strings. One that is not an integer cannot
/// name any row, so it is reported the same way as a missing row.
pub fn parse_id(raw: &str, entity: &'static str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::NotFound(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status(),
            Status::BadRequest
        );
        assert_eq!(ApiError::NotFound("Offer").status(), Status::NotFound);
        let infra = ApiError::Infrastructure {
            action: "listing offers",
            source: diesel::result::Error::BrokenTransactionManager,
        };
        assert_eq!(infra.status(), Status::InternalServerError);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::NotFound("Material").to_string(),
            "Material not found"
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "Offer").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "Offer"),
            Err(ApiError::NotFound("Offer"))
        ));
        assert!(parse_id("", "Offer").is_err());
    }
}
