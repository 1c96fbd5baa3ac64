pub mod authenticated_user;
pub mod identity;
pub mod identity_claims;
pub mod profile;
pub mod role;
