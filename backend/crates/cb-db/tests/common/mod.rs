#![allow(dead_code)]

use cb_config::StoreConfig;
use cb_db::SupabaseProfileStore;

use serde_json::{Value, json};

pub const ANON_KEY: &str = "test-anon-key";
pub const ACCESS_TOKEN: &str = "user-session-token";

/// Store config pointing at a mock server
pub fn store_config(base_url: &str) -> StoreConfig {
    StoreConfig {
        url: base_url.to_string(),
        anon_key: Some(ANON_KEY.to_string()),
        ..StoreConfig::default()
    }
}

/// Store client authenticated as a signed-in user
pub fn create_store(base_url: &str) -> SupabaseProfileStore {
    SupabaseProfileStore::new(&store_config(base_url), Some(ACCESS_TOKEN))
        .expect("Failed to create store")
}

/// A user_profiles row as PostgREST returns it
pub fn profile_row(id: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", id),
        "full_name": "Test User",
        "role": "doctor",
        "hospital_id": "hospital-1",
        "created_at": "2025-01-01T00:00:00+00:00",
        "updated_at": "2025-01-01T00:00:00+00:00"
    })
}
