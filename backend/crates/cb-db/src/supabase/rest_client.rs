use crate::{Result as StoreResult, StoreError, supabase::api_error_body::ApiErrorBody};

use cb_config::StoreConfig;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

const REST_PREFIX: &str = "/rest/v1";

/// Shared HTTP plumbing for the table and function endpoints.
pub(crate) struct RestClient {
    base_url: String,
    anon_key: Option<String>,
    access_token: Option<String>,
    client: ReqwestClient,
}

impl RestClient {
    pub(crate) fn new(config: &StoreConfig, access_token: Option<&str>) -> StoreResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            access_token: access_token.map(String::from),
            client,
        })
    }

    /// GET a table endpoint with PostgREST filter parameters.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> StoreResult<T> {
        let url = format!("{}{}/{}", self.base_url, REST_PREFIX, table);
        let url = Url::parse_with_params(&url, params).map_err(|e| {
            StoreError::configuration(format!("Invalid store URL {}: {}", url, e))
        })?;

        debug!("GET {}", url.path());
        self.execute(self.request(Method::GET, url)).await
    }

    /// POST to a database function.
    pub(crate) async fn rpc(&self, function: &str, args: &Value) -> StoreResult<Value> {
        let url = format!("{}{}/rpc/{}", self.base_url, REST_PREFIX, function);
        let url = Url::parse(&url).map_err(|e| {
            StoreError::configuration(format!("Invalid store URL {}: {}", url, e))
        })?;

        debug!("POST {}", url.path());
        self.execute(self.request(Method::POST, url).json(args))
            .await
    }

    /// Build a request carrying the project key and the caller's bearer token.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        if let Some(ref key) = self.anon_key {
            req = req.header("apikey", key);
        }

        // Without a user session the anon key doubles as the bearer token
        if let Some(token) = self.access_token.as_ref().or(self.anon_key.as_ref()) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and map non-success statuses to `StoreError::Api`.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> StoreResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = ApiErrorBody::parse(&body);
            return Err(StoreError::api_with_details(
                status.as_u16(),
                error.code.clone(),
                error.message(),
                error.details.clone().filter(|d| !d.is_empty()),
            ));
        }

        // 204 and empty bodies read as JSON null
        if body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
