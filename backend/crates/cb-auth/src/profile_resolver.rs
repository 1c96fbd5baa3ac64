use crate::ResolutionOutcome;

use cb_core::{AuthenticatedUser, Identity, Profile};
use cb_db::{PrivilegedProfileAccess, ProfileReader};

use std::sync::Arc;

use log::{debug, warn};

/// Looks a profile up through the direct read, then the policy bypass.
///
/// One attempt per call. Retrying over time belongs to
/// [`ProfileReconciler`](crate::ProfileReconciler).
#[derive(Clone)]
pub struct ProfileResolver {
    reader: Arc<dyn ProfileReader>,
    privileged: Arc<dyn PrivilegedProfileAccess>,
}

impl ProfileResolver {
    pub fn new(
        reader: Arc<dyn ProfileReader>,
        privileged: Arc<dyn PrivilegedProfileAccess>,
    ) -> Self {
        Self { reader, privileged }
    }

    pub async fn resolve(&self, identity: &Identity) -> ResolutionOutcome {
        // A policy-hidden row reads exactly like a missing one, so any miss
        // or failure here falls through to the bypass.
        match self.reader.direct_read(identity).await {
            Ok(Some(profile)) => {
                debug!("Profile {} resolved by direct read", identity);
                return ResolutionOutcome::Found { profile };
            }
            Ok(None) => {
                debug!("Direct read found no profile for {}, trying bypass", identity);
            }
            Err(e) => {
                debug!("Direct read failed for {}: {}. Trying bypass", identity, e);
            }
        }

        match self.privileged.privileged_read(identity).await {
            Ok(rows) => match rows.into_iter().next() {
                Some(profile) => {
                    debug!("Profile {} resolved by privileged read", identity);
                    ResolutionOutcome::Found { profile }
                }
                None => ResolutionOutcome::Absent,
            },
            Err(e) => {
                warn!("Privileged read failed for {}: {}", identity, e);
                ResolutionOutcome::TransientError {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Profile of the signed-in user, if there is one and it resolves.
    pub async fn current_profile(&self, user: Option<&AuthenticatedUser>) -> Option<Profile> {
        let user = user?;
        self.resolve(&user.id).await.into_profile()
    }
}
