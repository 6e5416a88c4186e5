//! Use-case services consumed by presentation layers.
//!
//! # Responsibility
//! - Expose the uniform CRUD contract for every entity kind.
//! - Add entity-specific read queries and dashboard aggregates.
//!
//! # Invariants
//! - Services validate before writing and never swallow errors.
//! - Only plain entity values, booleans and counts cross this boundary.

pub mod crud_service;
pub mod event_service;
pub mod integrity_service;
pub mod member_service;
pub mod stats_service;
