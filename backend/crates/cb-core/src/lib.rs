pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::authenticated_user::AuthenticatedUser;
pub use models::identity::Identity;
pub use models::identity_claims::IdentityClaims;
pub use models::profile::{Profile, can_access_hospital, has_role};
pub use models::role::Role;

#[cfg(test)]
mod tests;
