pub mod lifecycle;
pub mod material;
pub mod offer;
pub mod offer_material;

// Re-export models for easier access
pub use lifecycle::*;
pub use material::*;
pub use offer::*;
pub use offer_material::*;
