use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::SoftDeletable;
use crate::schema::offer;

#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(table_name = offer)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Offer {
    pub id: i32,
    pub name: String,
    #[ts(type = "string")]
    pub created_at: NaiveDateTime,
    #[ts(type = "string")]
    pub updated_at: NaiveDateTime,
    #[ts(type = "string | null")]
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = offer)]
pub struct NewOffer {
    pub name: String,
}

// For API inputs
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct OfferInput {
    pub name: String,
}

impl From<OfferInput> for NewOffer {
    fn from(input: OfferInput) -> Self {
        NewOffer { name: input.name }
    }
}

impl SoftDeletable for Offer {
    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}
