//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod photo_repo;
pub mod prospect_repo;

pub use activity_repo::ActivityRepo;
pub use photo_repo::PhotoRepo;
pub use prospect_repo::ProspectRepo;
