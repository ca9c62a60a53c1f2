use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not a participant of {activity}")]
    ParticipantNotFound { activity: String, email: String },
}

impl RegistryError {
    /// Short, caller-facing description used in HTTP error bodies.
    pub fn detail(&self) -> &'static str {
        match self {
            RegistryError::ActivityNotFound(_) => "Activity not found",
            RegistryError::AlreadySignedUp { .. } => "Student is already signed up",
            RegistryError::ParticipantNotFound { .. } => "Participant not found",
        }
    }
}
