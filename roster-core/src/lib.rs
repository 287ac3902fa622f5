//! # Roster Core Library
//!
//! In-memory enrollment engine for a school's extracurricular
//! activities: a seed-ordered catalog of activities, each with a fixed
//! description, schedule and capacity, plus the rules for joining and
//! leaving their rosters.
//!
//! ## Modules
//!
//! - `models`: `Activity`, its ordered `Roster`, and the read-side
//!   snapshot types
//! - `catalog`: the named activity set, built once from seed entries
//! - `service`: `RosterService`, the single choke point for signup and
//!   unregister
//! - `error`: typed refusals shared by every operation
//!
//! The crate does no I/O and takes no locks; embedders wrap a
//! [`RosterService`] in whatever sharing they need.

pub mod catalog;
pub mod error;
pub mod models;
pub mod service;

pub use catalog::{ActivityMap, Catalog, SeedError};
pub use error::{Result, RosterError};
pub use models::{Activity, ActivityView, Confirmation, Roster};
pub use service::{CapacityPolicy, RosterService};
