mod identity;
mod identity_claims;
mod profile;
mod role;
