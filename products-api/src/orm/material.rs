use diesel::dsl::now;
use diesel::prelude::*;

use crate::models::{Material, MaterialInput, NewMaterial};
use crate::orm::Visibility;

/// Returns all materials in ascending order by id.
pub fn get_all_materials(
    conn: &mut SqliteConnection,
    visibility: Visibility,
) -> Result<Vec<Material>, diesel::result::Error> {
    use crate::schema::material::dsl::*;
    let mut query = material
        .select(Material::as_select())
        .order(id.asc())
        .into_boxed();
    if visibility == Visibility::Visible {
        query = query.filter(deleted_at.is_null());
    }
    query.load(conn)
}

/// Try to find a material by id.
/// Returns Ok(Some(Material)) if found, Ok(None) if not, Err on DB error.
pub fn get_material_by_id(
    conn: &mut SqliteConnection,
    material_id: i32,
    visibility: Visibility,
) -> Result<Option<Material>, diesel::result::Error> {
    use crate::schema::material::dsl::*;
    let row = material
        .filter(id.eq(material_id))
        .select(Material::as_select())
        .first(conn)
        .optional()?;
    Ok(row.filter(|r| visibility.admits(r)))
}

/// Insert a new material (id and timestamps assigned by the database)
pub fn insert_material(
    conn: &mut SqliteConnection,
    input: MaterialInput,
) -> Result<Material, diesel::result::Error> {
    use crate::schema::material::dsl::*;
    diesel::insert_into(material)
        .values(NewMaterial::from(input))
        .returning(Material::as_returning())
        .get_result(conn)
}

/// Overwrites every mutable field of a visible material and refreshes
/// `updated_at`. Returns Ok(None) when no visible material has that id.
pub fn update_material(
    conn: &mut SqliteConnection,
    material_id: i32,
    input: MaterialInput,
) -> Result<Option<Material>, diesel::result::Error> {
    use crate::schema::material::dsl::*;
    diesel::update(material.filter(id.eq(material_id)).filter(deleted_at.is_null()))
        .set((
            name.eq(input.name),
            active.eq(input.active),
            updated_at.eq(now),
        ))
        .returning(Material::as_returning())
        .get_result(conn)
        .optional()
}

/// Soft deletes a material by id.
/// Returns Ok(true) if a visible material was marked deleted, Ok(false) if
/// not found or already deleted, Err on DB error.
pub fn soft_delete_material(
    conn: &mut SqliteConnection,
    material_id: i32,
) -> Result<bool, diesel::result::Error> {
    use crate::schema::material::dsl::*;
    let rows_affected =
        diesel::update(material.filter(id.eq(material_id)).filter(deleted_at.is_null()))
            .set(deleted_at.eq(now.nullable()))
            .execute(conn)?;
    Ok(rows_affected > 0)
}
