//! Raider.io API access.
//!
//! - `client`: HTTP client and the `ProfileSource` seam
//! - `models`: profile response types
//! - `resolver`: ordered multi-region lookup

pub mod client;
pub mod models;
pub mod resolver;

pub use client::{AbsentReason, FetchOutcome, ProfileSource, RaiderIoClient};
pub use models::CharacterProfile;
pub use resolver::{resolve, Resolution};
