//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - For prospects, a `Deserialize` update DTO carrying three-state
//!   [`leadflow_core::patch::Patch`] fields for nullable columns

pub mod activity;
pub mod photo;
pub mod prospect;
