use serde::{Deserialize, Serialize};

const DEFAULT_FULL_NAME: &str = "User";

/// Optional claims the identity provider hands over at signup time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl IdentityClaims {
    pub fn new(email: Option<String>, full_name: Option<String>) -> Self {
        Self { email, full_name }
    }

    /// Email sent with a profile creation request; blank when the provider gave none.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// Display name for a new profile: full name, then email, then "User".
    pub fn full_name_or_default(&self) -> &str {
        non_blank(self.full_name.as_deref())
            .or_else(|| non_blank(self.email.as_deref()))
            .unwrap_or(DEFAULT_FULL_NAME)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
