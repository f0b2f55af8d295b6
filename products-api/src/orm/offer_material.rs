use diesel::dsl::now;
use diesel::prelude::*;

use crate::models::{NewOfferMaterial, OfferMaterial, OfferMaterialInput};
use crate::orm::Visibility;

/// Returns all offer/material links in ascending order by id.
pub fn get_all_offer_materials(
    conn: &mut SqliteConnection,
    visibility: Visibility,
) -> Result<Vec<OfferMaterial>, diesel::result::Error> {
    use crate::schema::offer_material::dsl::*;
    let mut query = offer_material
        .select(OfferMaterial::as_select())
        .order(id.asc())
        .into_boxed();
    if visibility == Visibility::Visible {
        query = query.filter(deleted_at.is_null());
    }
    query.load(conn)
}

/// Try to find an offer/material link by id.
/// Returns Ok(Some(OfferMaterial)) if found, Ok(None) if not, Err on DB error.
pub fn get_offer_material_by_id(
    conn: &mut SqliteConnection,
    link_id: i32,
    visibility: Visibility,
) -> Result<Option<OfferMaterial>, diesel::result::Error> {
    use crate::schema::offer_material::dsl::*;
    let row = offer_material
        .filter(id.eq(link_id))
        .select(OfferMaterial::as_select())
        .first(conn)
        .optional()?;
    Ok(row.filter(|r| visibility.admits(r)))
}

/// Insert a new offer/material link. A dangling offer or material id fails
/// with a foreign key violation from the database.
pub fn insert_offer_material(
    conn: &mut SqliteConnection,
    input: OfferMaterialInput,
) -> Result<OfferMaterial, diesel::result::Error> {
    use crate::schema::offer_material::dsl::*;
    diesel::insert_into(offer_material)
        .values(NewOfferMaterial::from(input))
        .returning(OfferMaterial::as_returning())
        .get_result(conn)
}

/// Re-points a visible link at another offer and material and refreshes
/// `updated_at`. Returns Ok(None) when no visible link has that id.
pub fn update_offer_material(
    conn: &mut SqliteConnection,
    link_id: i32,
    input: OfferMaterialInput,
) -> Result<Option<OfferMaterial>, diesel::result::Error> {
    use crate::schema::offer_material::dsl::*;
    diesel::update(offer_material.filter(id.eq(link_id)).filter(deleted_at.is_null()))
        .set((
            offer_id.eq(input.offer_id),
            material_id.eq(input.material_id),
            updated_at.eq(now),
        ))
        .returning(OfferMaterial::as_returning())
        .get_result(conn)
        .optional()
}

/// Soft deletes a link by id.
/// Returns Ok(true) if a visible link was marked deleted, Ok(false) if not
/// found or already deleted, Err on DB error.
pub fn soft_delete_offer_material(
    conn: &mut SqliteConnection,
    link_id: i32,
) -> Result<bool, diesel::result::Error> {
    use crate::schema::offer_material::dsl::*;
    let rows_affected =
        diesel::update(offer_material.filter(id.eq(link_id)).filter(deleted_at.is_null()))
            .set(deleted_at.eq(now.nullable()))
            .execute(conn)?;
    Ok(rows_affected > 0)
}
