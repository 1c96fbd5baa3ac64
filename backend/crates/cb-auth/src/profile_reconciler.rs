//! Post-authentication profile reconciliation.
//!
//! A signup trigger normally provisions the profile row, but it may not have
//! committed (or may not be visible through row-level policy) by the time the
//! client first looks. The reconciler walks a fixed, non-looping sequence:
//!
//! ```text
//! Start             resolve      found -> done, else -> AwaitPropagation
//! AwaitPropagation  wait, resolve found -> done, else -> AttemptCreate
//! AttemptCreate     create       ok -> AwaitAfterCreate
//!                                unique violation -> RaceRecover
//!                                other error -> FinalResolve
//! AwaitAfterCreate  wait, resolve found -> done, else -> FinalResolve
//! RaceRecover       wait, resolve found -> done, else -> FinalResolve
//! FinalResolve      resolve      found -> done, else -> failed
//! ```
//!
//! At most one create and four resolutions per call. Concurrent calls for the
//! same user are not coordinated here; the unique-violation branch is what
//! makes that race safe.

use crate::{AuthError, ProfileResolver, ResolutionOutcome, Result as AuthErrorResult};

use cb_config::ReconcilerConfig;
use cb_core::{AuthenticatedUser, Identity, IdentityClaims, Profile};
use cb_db::{PrivilegedProfileAccess, ProfileReader};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReconcileState {
    Start,
    AwaitPropagation,
    AttemptCreate,
    AwaitAfterCreate,
    RaceRecover,
    FinalResolve,
}

enum Step {
    Next(ReconcileState),
    Done(Profile),
    Failed,
}

pub struct ProfileReconciler {
    resolver: ProfileResolver,
    privileged: Arc<dyn PrivilegedProfileAccess>,
    propagation_delay: Duration,
}

impl ProfileReconciler {
    pub fn new(
        reader: Arc<dyn ProfileReader>,
        privileged: Arc<dyn PrivilegedProfileAccess>,
        propagation_delay: Duration,
    ) -> Self {
        Self {
            resolver: ProfileResolver::new(reader, Arc::clone(&privileged)),
            privileged,
            propagation_delay,
        }
    }

    pub fn with_config(
        reader: Arc<dyn ProfileReader>,
        privileged: Arc<dyn PrivilegedProfileAccess>,
        config: &ReconcilerConfig,
    ) -> Self {
        Self::new(reader, privileged, config.propagation_delay())
    }

    /// Read-only resolver sharing this reconciler's store handles.
    pub fn resolver(&self) -> &ProfileResolver {
        &self.resolver
    }

    pub fn propagation_delay(&self) -> Duration {
        self.propagation_delay
    }

    /// Make sure `identity` has a readable profile, creating it if needed.
    ///
    /// Intermediate store failures are logged and absorbed. The only error
    /// returned is [`AuthError::ProfileNotFound`].
    pub async fn ensure(
        &self,
        identity: &Identity,
        claims: &IdentityClaims,
    ) -> AuthErrorResult<Profile> {
        let mut state = ReconcileState::Start;

        loop {
            debug!("Reconciling profile for {}: {:?}", identity, state);

            let step = match state {
                ReconcileState::Start => {
                    self.resolve_or(identity, ReconcileState::AwaitPropagation)
                        .await
                }
                ReconcileState::AwaitPropagation => {
                    self.wait_for_propagation().await;
                    self.resolve_or(identity, ReconcileState::AttemptCreate)
                        .await
                }
                ReconcileState::AttemptCreate => self.attempt_create(identity, claims).await,
                ReconcileState::AwaitAfterCreate | ReconcileState::RaceRecover => {
                    self.wait_for_propagation().await;
                    self.resolve_or(identity, ReconcileState::FinalResolve)
                        .await
                }
                ReconcileState::FinalResolve => match self.resolver.resolve(identity).await {
                    ResolutionOutcome::Found { profile } => Step::Done(profile),
                    ResolutionOutcome::Absent | ResolutionOutcome::TransientError { .. } => {
                        Step::Failed
                    }
                },
            };

            match step {
                Step::Next(next) => state = next,
                Step::Done(profile) => {
                    info!("Profile for {} ready (role: {})", identity, profile.role);
                    return Ok(profile);
                }
                Step::Failed => {
                    error!("Profile for {} could not be resolved or created", identity);
                    return Err(AuthError::profile_not_found(identity.as_str()));
                }
            }
        }
    }

    /// [`ensure`](Self::ensure) for a freshly signed-in user.
    pub async fn ensure_for(&self, user: &AuthenticatedUser) -> AuthErrorResult<Profile> {
        self.ensure(&user.id, &user.claims).await
    }

    async fn resolve_or(&self, identity: &Identity, otherwise: ReconcileState) -> Step {
        match self.resolver.resolve(identity).await {
            ResolutionOutcome::Found { profile } => Step::Done(profile),
            ResolutionOutcome::Absent => Step::Next(otherwise),
            ResolutionOutcome::TransientError { reason } => {
                debug!("Resolution of {} failed: {}", identity, reason);
                Step::Next(otherwise)
            }
        }
    }

    async fn attempt_create(&self, identity: &Identity, claims: &IdentityClaims) -> Step {
        info!("No profile for {}, creating one", identity);

        match self
            .privileged
            .privileged_create(
                identity,
                claims.email_or_empty(),
                claims.full_name_or_default(),
            )
            .await
        {
            Ok(id) => {
                debug!("Profile {} created", id);
                Step::Next(ReconcileState::AwaitAfterCreate)
            }
            Err(e) if e.is_unique_violation() => {
                info!("Profile for {} was created concurrently, re-reading", identity);
                Step::Next(ReconcileState::RaceRecover)
            }
            Err(e) => {
                warn!("Failed to create profile for {}: {}", identity, e);
                Step::Next(ReconcileState::FinalResolve)
            }
        }
    }

    async fn wait_for_propagation(&self) {
        if !self.propagation_delay.is_zero() {
            sleep(self.propagation_delay).await;
        }
    }
}
