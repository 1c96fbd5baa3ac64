use cb_core::Profile;

use serde::Serialize;

/// Result of one resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Found { profile: Profile },
    Absent,
    TransientError { reason: String },
}

impl ResolutionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Found { profile } => Some(profile),
            Self::Absent | Self::TransientError { .. } => None,
        }
    }
}
