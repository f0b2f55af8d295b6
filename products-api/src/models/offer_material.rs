use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::SoftDeletable;
use crate::schema::offer_material;

/// Link between an offer and a material. Both ids are foreign keys checked by
/// the database, not by this crate.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(table_name = offer_material)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct OfferMaterial {
    pub id: i32,
    pub offer_id: i32, // Foreign key to Offer
    pub material_id: i32, // Foreign key to Material
    #[ts(type = "string")]
    pub created_at: NaiveDateTime,
    #[ts(type = "string")]
    pub updated_at: NaiveDateTime,
    #[ts(type = "string | null")]
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = offer_material)]
pub struct NewOfferMaterial {
    pub offer_id: i32,
    pub material_id: i32,
}

// For API inputs
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct OfferMaterialInput {
    pub offer_id: i32,
    pub material_id: i32,
}

impl From<OfferMaterialInput> for NewOfferMaterial {
    fn from(input: OfferMaterialInput) -> Self {
        NewOfferMaterial {
            offer_id: input.offer_id,
            material_id: input.material_id,
        }
    }
}

impl SoftDeletable for OfferMaterial {
    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}
