//! Soft-delete lifecycle shared by every entity.
//!
//! Rows are never removed. A row is [`Lifecycle::Active`] until it is soft
//! deleted, after which it stays [`Lifecycle::Deleted`] for good.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Deleted { at: NaiveDateTime },
}

/// Implemented by row types that carry a `deleted_at` column.
pub trait SoftDeletable {
    fn deleted_at(&self) -> Option<NaiveDateTime>;

    fn lifecycle(&self) -> Lifecycle {
        match self.deleted_at() {
            Some(at) => Lifecycle::Deleted { at },
            None => Lifecycle::Active,
        }
    }

    fn is_active(&self) -> bool {
        self.lifecycle() == Lifecycle::Active
    }
}
