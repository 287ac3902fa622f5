use roster_core::RosterService;
use std::sync::{Arc, RwLock};

/// The roster service shared across request handlers.
///
/// One process-wide lock: writers (signup, unregister) take it
/// exclusively, so each mutation's check-then-act runs without
/// interleaving. Contention is not a concern at this scale.
pub type SharedRoster = Arc<RwLock<RosterService>>;

pub fn create_state(service: RosterService) -> SharedRoster {
    Arc::new(RwLock::new(service))
}
