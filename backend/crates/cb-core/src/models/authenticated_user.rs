use crate::{Identity, IdentityClaims};

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider session.
///
/// Callers obtain this from their session layer and pass it in explicitly;
/// nothing in this workspace reads ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Identity,
    #[serde(default)]
    pub claims: IdentityClaims,
}

impl AuthenticatedUser {
    pub fn new(id: Identity, claims: IdentityClaims) -> Self {
        Self { id, claims }
    }
}
