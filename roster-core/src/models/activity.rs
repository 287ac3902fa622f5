use serde::{Deserialize, Serialize};

/// The participants enrolled in a single activity, in signup order.
///
/// Behaves as an ordered set: first signed up is listed first, and a
/// participant appears at most once. Membership checks are linear
/// scans, which is fine for rosters of a few dozen entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    pub fn contains(&self, participant: &str) -> bool {
        self.members.iter().any(|m| m == participant)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.members
    }

    /// Appends a participant at the tail of the roster.
    ///
    /// Callers are expected to have checked membership first; the
    /// service layer is the only place this is reachable from.
    pub(crate) fn push(&mut self, participant: String) {
        self.members.push(participant);
    }

    /// Removes the participant's single entry, shifting later signups
    /// up one place. Returns false if the participant was not enrolled.
    pub(crate) fn remove(&mut self, participant: &str) -> bool {
        match self.members.iter().position(|m| m == participant) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<String>> for Roster {
    fn from(members: Vec<String>) -> Self {
        Self { members }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// A named extracurricular offering: fixed description, schedule and
/// capacity, plus the roster of currently enrolled participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Roster,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Roster::default(),
        }
    }

    /// Replaces the starting roster. Used when seeding the catalog,
    /// which validates the result before admitting it.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants =
            Roster::from(participants.into_iter().map(Into::into).collect::<Vec<_>>());
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn participants(&self) -> &Roster {
        &self.participants
    }

    pub(crate) fn participants_mut(&mut self) -> &mut Roster {
        &mut self.participants
    }

    /// True once the roster has reached (or passed) capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Number of open places, saturating at zero.
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Detached snapshot of this activity for read paths.
    pub fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.as_slice().to_vec(),
        }
    }
}

/// Read-only copy of one activity as handed to callers. Later roster
/// changes are not reflected in a view that was already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

/// Receipt for a successful roster change, naming the activity and the
/// participant it applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    activity: String,
    participant: String,
}

impl Confirmation {
    pub(crate) fn new(activity: impl Into<String>, participant: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            participant: participant.into(),
        }
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }
}
