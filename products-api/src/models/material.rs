use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::SoftDeletable;
use crate::schema::material;

#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(table_name = material)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Material {
    pub id: i32,
    pub name: String,
    pub active: bool,
    #[ts(type = "string")]
    pub created_at: NaiveDateTime,
    #[ts(type = "string")]
    pub updated_at: NaiveDateTime,
    #[ts(type = "string | null")]
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = material)]
pub struct NewMaterial {
    pub name: String,
    pub active: bool,
}

// For API inputs. Identifier and timestamps in the body are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct MaterialInput {
    pub name: String,
    // Absent means inactive, on create and update alike
    #[serde(default)]
    pub active: bool,
}

impl From<MaterialInput> for NewMaterial {
    fn from(input: MaterialInput) -> Self {
        NewMaterial {
            name: input.name,
            active: input.active,
        }
    }
}

impl SoftDeletable for Material {
    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}
