use crate::Result as StoreResult;

use cb_core::{Identity, Profile};

use async_trait::async_trait;

/// Ordinary, policy-constrained profile reads.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Read the single profile keyed by `identity`.
    ///
    /// Row-level policy may hide a row that exists; a hidden row and a
    /// missing row both come back as `Ok(None)` or as an error.
    async fn direct_read(&self, identity: &Identity) -> StoreResult<Option<Profile>>;
}
