//! Core domain logic for ClubDesk.
//! Entities, validation and persistence for clubs, members, events and venues.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::{AppConfig, DbConfig, DbTarget};
pub use db::ConnectionProvider;
pub use error::{CoreError, CoreResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::club::Club;
pub use model::event::Event;
pub use model::member::Member;
pub use model::venue::Venue;
pub use model::{Displayable, Entity, EntityId, EntityValidationError};
pub use service::crud_service::{
    ClubService, CrudService, EntityService, EventService, MemberService, VenueService,
};
pub use service::integrity_service::{DanglingReferences, IntegrityService};
pub use service::stats_service::{DashboardStats, StatsService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
