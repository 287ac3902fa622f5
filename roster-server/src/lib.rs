//! HTTP front end for the school activity roster.
//!
//! Wires a [`roster_core::RosterService`] behind an axum router, serves
//! the static signup page, and seeds the catalog at startup.

pub mod api;
pub mod config;
pub mod seed;
pub mod state;
