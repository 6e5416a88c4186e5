//! Repository layer: table mappings and SQLite persistence.
//!
//! # Responsibility
//! - Map each entity kind to its fixed column list.
//! - Isolate SQL details from the service layer.
//!
//! # Invariants
//! - One call issues exactly one statement.
//! - Storage failures surface as `ErrorKind::Storage` with the driver
//!   error attached.

pub mod club_repo;
pub mod event_repo;
pub mod member_repo;
pub mod table;
pub mod venue_repo;
