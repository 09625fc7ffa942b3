//! Character card rendering.
//!
//! - `builder`: profile -> `CharacterCard`
//! - `emoji`: dungeon and faction emoji tables
//! - `text`: string helpers

pub mod builder;
pub mod emoji;
pub mod text;

pub use builder::{build_card, not_found_message, CardOptions, CharacterCard};
pub use emoji::LookupTables;
