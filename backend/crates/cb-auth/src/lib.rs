pub mod error;
pub mod profile_reconciler;
pub mod profile_resolver;
pub mod resolution_outcome;

pub use error::{AuthError, Result};
pub use profile_reconciler::ProfileReconciler;
pub use profile_resolver::ProfileResolver;
pub use resolution_outcome::ResolutionOutcome;
