//! Roster operations over the activity catalog.
//!
//! [`RosterService`] is the single mutation choke point: every signup
//! and unregister runs its checks and its write under one `&mut self`
//! borrow, so callers never observe a half-applied change. Reads hand
//! out detached snapshots.

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{ActivityMap, Catalog};
use crate::error::{Result, RosterError};
use crate::models::Confirmation;

/// How signup treats a roster that has reached `max_participants`.
///
/// Historically this service records capacity without acting on it, so
/// `Advisory` is the default. `Enforced` turns the stored capacity into
/// a hard limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Capacity is informational only; signup never fails on a full
    /// roster.
    #[default]
    Advisory,
    /// Signup is refused with `CapacityExceeded` once the roster is
    /// full.
    Enforced,
}

/// Owns the catalog and applies the enrollment rules to it.
pub struct RosterService {
    catalog: Catalog,
    capacity_policy: CapacityPolicy,
}

impl RosterService {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_capacity_policy(catalog, CapacityPolicy::default())
    }

    pub fn with_capacity_policy(catalog: Catalog, capacity_policy: CapacityPolicy) -> Self {
        Self {
            catalog,
            capacity_policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    /// Snapshot of every activity, in catalog order.
    pub fn list(&self) -> ActivityMap {
        self.catalog.list()
    }

    /// Enrolls a participant, appending them at the tail of the roster.
    ///
    /// Checks run in a fixed order: unknown activity, then duplicate
    /// signup, then capacity. A participant already on a full roster is
    /// reported as already signed up, not as a capacity problem.
    pub fn signup(&mut self, activity_name: &str, participant: &str) -> Result<Confirmation> {
        let policy = self.capacity_policy;
        let activity = self
            .catalog
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if activity.participants().contains(participant) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity_name.to_string(),
                participant: participant.to_string(),
            });
        }
        if policy == CapacityPolicy::Enforced && activity.is_full() {
            return Err(RosterError::CapacityExceeded {
                activity: activity_name.to_string(),
                capacity: activity.max_participants(),
            });
        }

        activity.participants_mut().push(participant.to_string());
        info!(
            "Roster: signed up {} for {} ({}/{})",
            participant,
            activity_name,
            activity.participants().len(),
            activity.max_participants()
        );
        Ok(Confirmation::new(activity_name, participant))
    }

    /// Withdraws a participant, removing their single roster entry and
    /// closing the gap.
    pub fn unregister(&mut self, activity_name: &str, participant: &str) -> Result<Confirmation> {
        let activity = self
            .catalog
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.participants_mut().remove(participant) {
            return Err(RosterError::NotEnrolled {
                activity: activity_name.to_string(),
                participant: participant.to_string(),
            });
        }

        info!(
            "Roster: unregistered {} from {} ({}/{})",
            participant,
            activity_name,
            activity.participants().len(),
            activity.max_participants()
        );
        Ok(Confirmation::new(activity_name, participant))
    }
}

#[cfg(test)]
mod tests;
