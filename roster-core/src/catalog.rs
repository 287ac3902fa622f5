//! In-memory catalog of extracurricular activities.
//!
//! The catalog is pure data: no I/O, no locking. It is built once at
//! startup from seed entries and afterwards only the service layer can
//! reach the mutable side of it, so the enrollment rules are enforced
//! in one place.

use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Activity, ActivityView};

/// Snapshot of every activity keyed by name, in catalog order.
pub type ActivityMap = IndexMap<String, ActivityView>;

/// Problems with a seed entry. Seeding happens once at startup, so
/// every variant is fatal for catalog construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("max_participants must be positive for {0}")]
    ZeroCapacity(String),

    #[error("duplicate participant {participant} in starting roster of {activity}")]
    DuplicateParticipant {
        activity: String,
        participant: String,
    },

    #[error("starting roster of {activity} holds {enrolled} participants, capacity is {capacity}")]
    OverCapacity {
        activity: String,
        enrolled: usize,
        capacity: usize,
    },
}

/// The full set of activities offered, with their current rosters.
///
/// Names are unique keys and keep their seed order, which is the order
/// every listing presents them in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: IndexMap<String, Activity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            activities: IndexMap::new(),
        }
    }

    /// Admits one activity at startup.
    ///
    /// Checks everything the runtime operations take for granted: the
    /// name is unused, capacity is positive, and the starting roster is
    /// duplicate-free and within capacity.
    pub fn seed(&mut self, name: impl Into<String>, activity: Activity) -> Result<(), SeedError> {
        let name = name.into();
        if self.activities.contains_key(&name) {
            return Err(SeedError::DuplicateActivity(name));
        }
        if activity.max_participants() == 0 {
            return Err(SeedError::ZeroCapacity(name));
        }

        let mut seen = HashSet::new();
        for participant in activity.participants() {
            if !seen.insert(participant.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    participant: participant.clone(),
                });
            }
        }
        if activity.participants().len() > activity.max_participants() {
            return Err(SeedError::OverCapacity {
                activity: name,
                enrolled: activity.participants().len(),
                capacity: activity.max_participants(),
            });
        }

        self.activities.insert(name, activity);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Mutable lookup, deliberately crate-private: roster changes go
    /// through [`crate::service::RosterService`].
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Activity> {
        self.activities.iter()
    }

    /// Detached snapshot of the whole catalog for read paths.
    pub fn list(&self) -> ActivityMap {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.view()))
            .collect()
    }
}
