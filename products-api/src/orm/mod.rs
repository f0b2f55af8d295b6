mod db;
pub mod material;
pub mod offer;
pub mod offer_material;
pub mod testing;

pub use db::*;

use crate::models::SoftDeletable;

/// Which rows a query may return.
///
/// Soft deleted rows stay in their tables; API handlers only ever ask for
/// `Visible` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Rows whose `deleted_at` is unset.
    #[default]
    Visible,
    /// Every row, including soft deleted ones.
    All,
}

impl Visibility {
    /// Whether a row fetched without a `deleted_at` filter may be returned.
    pub fn admits<T: SoftDeletable>(self, row: &T) -> bool {
        match self {
            Visibility::Visible => row.is_active(),
            Visibility::All => true,
        }
    }
}
