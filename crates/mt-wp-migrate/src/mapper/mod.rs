//! Pure row-mapping functions, one module per entity.
//!
//! Mappers take a source row and produce destination rows without
//! touching either database, which keeps their behavior directly
//! testable. Enumerated values outside the known domain produce
//! [`MigrateError::Mapping`](crate::error::MigrateError::Mapping)
//! rather than a guessed default.

pub mod asset;
pub mod category;
pub mod comment;
pub mod placement;
pub mod post;
pub mod timestamps;
pub mod user;
