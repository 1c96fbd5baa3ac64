//! Profile store backed by a hosted PostgREST API (Supabase).
//!
//! Direct reads go through the table endpoint and are subject to row-level
//! security. Privileged operations call `SECURITY DEFINER` database functions
//! through the `/rpc` endpoint.

pub(crate) mod api_error_body;
pub mod privileged_rpc;
pub mod profile_store;
pub(crate) mod rest_client;
