//! HTTP request handlers, one module per entity.

pub mod activities;
pub mod photos;
pub mod prospects;
