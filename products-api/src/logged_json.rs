//! Logged JSON request guard that captures and logs request bodies.
//!
//! This is a wrapper around Rocket's `Json` type used by every create and
//! update endpoint. Successfully decoded bodies are logged; bodies that fail to
//! decode are rejected with `400 Bad Request` instead of Rocket's default
//! `422`, and the decode error is handed to the handler when it asks for
//! `Result<LoggedJson<T>, json::Error>`.

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::serde::{Deserialize, Serialize};
use rocket::{
    Data, Request,
    data::{self, FromData},
};

/// A wrapper around Rocket's Json that logs the request data.
pub struct LoggedJson<T>(pub T);

impl<T> LoggedJson<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for LoggedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T: Deserialize<'r> + Serialize> FromData<'r> for LoggedJson<T> {
    type Error = json::Error<'r>;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        match Json::<T>::from_data(req, data).await {
            data::Outcome::Success(body) => {
                match serde_json::to_string(&body.0) {
                    Ok(json_string) => info!(
                        "API Request Body: {} {} | Data: {}",
                        req.method().as_str(),
                        req.uri().path(),
                        json_string
                    ),
                    Err(_) => info!(
                        "API Request Body: {} {} | Data: <failed to serialize>",
                        req.method().as_str(),
                        req.uri().path()
                    ),
                }
                data::Outcome::Success(LoggedJson(body.into_inner()))
            }
            data::Outcome::Error((_, e)) => {
                warn!(
                    "Rejected request body: {} {} | {}",
                    req.method().as_str(),
                    req.uri().path(),
                    e
                );
                data::Outcome::Error((Status::BadRequest, e))
            }
            data::Outcome::Forward(f) => data::Outcome::Forward(f),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LoggedJson<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
