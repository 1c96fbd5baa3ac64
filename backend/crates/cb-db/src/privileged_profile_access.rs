use crate::Result as StoreResult;

use cb_core::{Identity, Profile};

use async_trait::async_trait;

/// Reads and writes that bypass row-level visibility policy.
///
/// Kept apart from [`ProfileReader`](crate::ProfileReader) so that only the
/// component that owns reconciliation is handed this capability.
#[async_trait]
pub trait PrivilegedProfileAccess: Send + Sync {
    /// Zero or one profiles for `identity`, ignoring visibility policy.
    async fn privileged_read(&self, identity: &Identity) -> StoreResult<Vec<Profile>>;

    /// Create the profile row. An existing row surfaces as an error for which
    /// [`StoreError::is_unique_violation`](crate::StoreError::is_unique_violation) is true.
    async fn privileged_create(
        &self,
        identity: &Identity,
        email: &str,
        full_name: &str,
    ) -> StoreResult<Identity>;
}
