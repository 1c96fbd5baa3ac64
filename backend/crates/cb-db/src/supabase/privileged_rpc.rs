use crate::{
    PrivilegedProfileAccess, Result as StoreResult, StoreError, supabase::rest_client::RestClient,
};

use cb_core::{Identity, Profile};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

/// Calls the `SECURITY DEFINER` profile functions that ignore row-level policy.
pub struct PrivilegedProfileRpc {
    rest: Arc<RestClient>,
    read_rpc: String,
    create_rpc: String,
}

impl PrivilegedProfileRpc {
    pub(crate) fn new(rest: Arc<RestClient>, read_rpc: String, create_rpc: String) -> Self {
        Self {
            rest,
            read_rpc,
            create_rpc,
        }
    }

    /// Functions declared `RETURNS SETOF` answer with an array; scalar
    /// composite functions answer with an object or null.
    pub(crate) fn rows_from_value(value: Value) -> StoreResult<Vec<Profile>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
            other => Err(StoreError::unexpected_response(format!(
                "profile read returned {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl PrivilegedProfileAccess for PrivilegedProfileRpc {
    async fn privileged_read(&self, identity: &Identity) -> StoreResult<Vec<Profile>> {
        let value = self
            .rest
            .rpc(&self.read_rpc, &json!({ "p_user_id": identity }))
            .await?;

        Self::rows_from_value(value)
    }

    async fn privileged_create(
        &self,
        identity: &Identity,
        email: &str,
        full_name: &str,
    ) -> StoreResult<Identity> {
        let value = self
            .rest
            .rpc(
                &self.create_rpc,
                &json!({
                    "p_user_id": identity,
                    "p_email": email,
                    "p_full_name": full_name,
                }),
            )
            .await?;

        match value {
            Value::String(id) if !id.is_empty() => Ok(Identity::from(id)),
            other => Err(StoreError::unexpected_response(format!(
                "profile create returned {} instead of an id",
                other
            ))),
        }
    }
}
