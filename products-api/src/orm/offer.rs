use diesel::dsl::now;
use diesel::prelude::*;

use crate::models::{NewOffer, Offer, OfferInput};
use crate::orm::Visibility;

/// Returns all offers in ascending order by id.
pub fn get_all_offers(
    conn: &mut SqliteConnection,
    visibility: Visibility,
) -> Result<Vec<Offer>, diesel::result::Error> {
    use crate::schema::offer::dsl::*;
    let mut query = offer.select(Offer::as_select()).order(id.asc()).into_boxed();
    if visibility == Visibility::Visible {
        query = query.filter(deleted_at.is_null());
    }
    query.load(conn)
}

/// Try to find an offer by id.
/// Returns Ok(Some(Offer)) if found, Ok(None) if not, Err on DB error.
pub fn get_offer_by_id(
    conn: &mut SqliteConnection,
    offer_id: i32,
    visibility: Visibility,
) -> Result<Option<Offer>, diesel::result::Error> {
    use crate::schema::offer::dsl::*;
    let row = offer
        .filter(id.eq(offer_id))
        .select(Offer::as_select())
        .first(conn)
        .optional()?;
    Ok(row.filter(|r| visibility.admits(r)))
}

/// Insert a new offer (id and timestamps assigned by the database)
pub fn insert_offer(
    conn: &mut SqliteConnection,
    input: OfferInput,
) -> Result<Offer, diesel::result::Error> {
    use crate::schema::offer::dsl::*;
    diesel::insert_into(offer)
        .values(NewOffer::from(input))
        .returning(Offer::as_returning())
        .get_result(conn)
}

/// Renames a visible offer and refreshes `updated_at`.
/// Returns Ok(None) when no visible offer has that id.
pub fn update_offer(
    conn: &mut SqliteConnection,
    offer_id: i32,
    input: OfferInput,
) -> Result<Option<Offer>, diesel::result::Error> {
    use crate::schema::offer::dsl::*;
    diesel::update(offer.filter(id.eq(offer_id)).filter(deleted_at.is_null()))
        .set((name.eq(input.name), updated_at.eq(now)))
        .returning(Offer::as_returning())
        .get_result(conn)
        .optional()
}

/// Soft deletes an offer by id.
/// Returns Ok(true) if a visible offer was marked deleted, Ok(false) if not
/// found or already deleted, Err on DB error.
pub fn soft_delete_offer(
    conn: &mut SqliteConnection,
    offer_id: i32,
) -> Result<bool, diesel::result::Error> {
    use crate::schema::offer::dsl::*;
    let rows_affected = diesel::update(offer.filter(id.eq(offer_id)).filter(deleted_at.is_null()))
        .set(deleted_at.eq(now.nullable()))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoftDeletable;
    use crate::orm::testing::setup_test_db;

    fn named(name: &str) -> OfferInput {
        OfferInput {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_insert_offer() {
        let mut conn = setup_test_db();
        let result = insert_offer(&mut conn, named("Spring Offer"));
        assert!(result.is_ok());
        let created = result.unwrap();
        assert_eq!(created.name, "Spring Offer");
        assert!(created.id > 0);
        assert!(created.is_active());
    }

    #[test]
    fn test_get_all_offers_in_id_order() {
        let mut conn = setup_test_db();
        insert_offer(&mut conn, named("Offer 1")).unwrap();
        insert_offer(&mut conn, named("Offer 2")).unwrap();

        let offers = get_all_offers(&mut conn, Visibility::Visible).unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].name, "Offer 1");
        assert_eq!(offers[1].name, "Offer 2");
        assert!(offers[0].id < offers[1].id);
    }

    #[test]
    fn test_update_offer() {
        let mut conn = setup_test_db();
        let created = insert_offer(&mut conn, named("Draft")).unwrap();

        let updated = update_offer(&mut conn, created.id, named("Final"))
            .expect("Update should succeed")
            .expect("Offer should exist");
        assert_eq!(updated.name, "Final");
        assert_eq!(updated.created_at, created.created_at);

        let fetched = get_offer_by_id(&mut conn, created.id, Visibility::Visible)
            .unwrap()
            .unwrap();
        assert_eq!(fetched, updated);
    }

    #[test]
    fn test_soft_delete_offer() {
        let mut conn = setup_test_db();
        let created = insert_offer(&mut conn, named("Old Offer")).unwrap();

        assert!(soft_delete_offer(&mut conn, created.id).unwrap());
        assert!(!soft_delete_offer(&mut conn, created.id).unwrap());
        assert!(get_all_offers(&mut conn, Visibility::Visible).unwrap().is_empty());

        let archived = get_offer_by_id(&mut conn, created.id, Visibility::All)
            .unwrap()
            .expect("Soft deleted row should persist");
        assert!(!archived.is_active());
        assert!(archived.deleted_at.is_some());
    }

    #[test]
    fn test_soft_delete_missing_offer() {
        let mut conn = setup_test_db();
        assert!(!soft_delete_offer(&mut conn, 9999).unwrap());
    }
}
