// Monster Adventure Schema - Shared type definitions
// This crate contains the enums and data records shared by every catalog in the
// main monster-adventure crate. Catalog contents are authored in RON and
// deserialized straight into these types.

// Re-export the main types
pub use creature_types::*;
pub use item_data::*;
pub use move_data::*;
pub use species_data::*;

pub mod creature_types;
pub mod item_data;
pub mod move_data;
pub mod species_data;
