//! Domain rules shared by the repository and API layers.
//!
//! Contains field-level validation for prospects and their child records,
//! the three-state [`patch::Patch`] type used by partial updates, and the
//! shared error and ID/timestamp types.

pub mod activity;
pub mod error;
pub mod patch;
pub mod photo;
pub mod prospect;
pub mod types;
