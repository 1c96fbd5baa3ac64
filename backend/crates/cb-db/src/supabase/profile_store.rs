use crate::{
    PrivilegedProfileRpc, ProfileReader, Result as StoreResult, supabase::rest_client::RestClient,
};

use cb_config::StoreConfig;
use cb_core::{Identity, Profile};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

/// Profile store talking to the PostgREST table endpoint as the signed-in user.
pub struct SupabaseProfileStore {
    rest: Arc<RestClient>,
    profiles_table: String,
    read_rpc: String,
    create_rpc: String,
}

impl SupabaseProfileStore {
    /// Create a store client.
    ///
    /// # Arguments
    /// * `config` - Store URL, key, table and function names
    /// * `access_token` - The user's session token; anon access when `None`
    pub fn new(config: &StoreConfig, access_token: Option<&str>) -> StoreResult<Self> {
        Ok(Self {
            rest: Arc::new(RestClient::new(config, access_token)?),
            profiles_table: config.profiles_table.clone(),
            read_rpc: config.read_rpc.clone(),
            create_rpc: config.create_rpc.clone(),
        })
    }

    /// Handle to the policy-bypassing functions, sharing this store's connection.
    pub fn privileged(&self) -> PrivilegedProfileRpc {
        PrivilegedProfileRpc::new(
            Arc::clone(&self.rest),
            self.read_rpc.clone(),
            self.create_rpc.clone(),
        )
    }
}

#[async_trait]
impl ProfileReader for SupabaseProfileStore {
    async fn direct_read(&self, identity: &Identity) -> StoreResult<Option<Profile>> {
        let rows: Vec<Profile> = self
            .rest
            .select(
                &self.profiles_table,
                &[
                    ("id", format!("eq.{}", identity)),
                    ("select", String::from("*")),
                ],
            )
            .await?;

        debug!(
            "Direct read of {} returned {} row(s)",
            identity,
            rows.len()
        );

        Ok(rows.into_iter().next())
    }
}
