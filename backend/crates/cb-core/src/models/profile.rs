use crate::{Identity, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Application-level view of a user: role and organizational scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Identity,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Empty when the row was created without a display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub hospital_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Superadmins reach every hospital; everyone else only their own.
    pub fn can_access_hospital(&self, hospital_id: &str) -> bool {
        if self.role == Role::Superadmin {
            return true;
        }
        self.hospital_id.as_deref() == Some(hospital_id)
    }
}

/// Role check for a possibly missing profile. No profile, no roles.
pub fn has_role(profile: Option<&Profile>, roles: &[Role]) -> bool {
    profile.is_some_and(|p| p.has_role(roles))
}

/// Hospital check for a possibly missing profile.
pub fn can_access_hospital(profile: Option<&Profile>, hospital_id: &str) -> bool {
    profile.is_some_and(|p| p.can_access_hospital(hospital_id))
}

/// Trigger-created rows may carry `null` text columns.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
