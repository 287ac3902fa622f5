use thiserror::Error;

/// Ways a roster operation can be refused.
///
/// Every variant is terminal for the operation that produced it: the
/// catalog is left exactly as it was and the error travels back to the
/// caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No catalog entry carries the requested activity name.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// The participant is already on the target activity's roster.
    #[error("{participant} is already signed up for {activity}")]
    AlreadyEnrolled {
        activity: String,
        participant: String,
    },

    /// The participant is not on the target activity's roster.
    #[error("{participant} is not signed up for {activity}")]
    NotEnrolled {
        activity: String,
        participant: String,
    },

    /// The roster already holds `max_participants` entries. Only
    /// produced when capacity enforcement is switched on.
    #[error("{activity} is already full ({capacity} participants)")]
    CapacityExceeded { activity: String, capacity: usize },
}

/// A specialized `Result` type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
