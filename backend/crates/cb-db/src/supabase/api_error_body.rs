use serde::Deserialize;

/// Error payload returned by PostgREST, e.g.
/// `{"code":"23505","message":"duplicate key value ...","details":...,"hint":null}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, falling back to the raw text when it isn't JSON.
    pub(crate) fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: Some(body.to_string()),
            ..Self::default()
        })
    }

    /// The store's own message, without `details`.
    pub(crate) fn message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown error")
    }
}
