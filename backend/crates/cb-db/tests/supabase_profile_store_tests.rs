//! Integration tests for the PostgREST-backed profile store using wiremock

mod common;

use common::{ACCESS_TOKEN, ANON_KEY, create_store, profile_row, store_config};

use cb_core::{Identity, Role};
use cb_db::{PrivilegedProfileAccess, ProfileReader, StoreError, SupabaseProfileStore};

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

// =========================================================================
// Direct read
// =========================================================================

#[tokio::test]
async fn given_visible_row_when_direct_read_then_returns_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/user_profiles"))
        .and(query_param("id", "eq.u1"))
        .and(query_param("select", "*"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row("u1")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store.direct_read(&Identity::from("u1")).await.unwrap();

    assert_that!(result, some(anything()));
    let profile = result.unwrap();
    assert_that!(profile.id.as_str(), eq("u1"));
    assert_that!(profile.role, eq(Role::Doctor));
    assert_that!(profile.hospital_id.as_deref(), some(eq("hospital-1")));
}

#[tokio::test]
async fn given_policy_hidden_row_when_direct_read_then_returns_none() {
    let mock_server = MockServer::start().await;

    // Row-level security filters the row out: PostgREST answers with an empty array
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store.direct_read(&Identity::from("u1")).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_permission_denied_when_direct_read_then_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/user_profiles"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "42501",
            "message": "permission denied for table user_profiles",
            "details": null,
            "hint": null
        })))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store.direct_read(&Identity::from("u1")).await;

    assert!(matches!(
        result,
        Err(StoreError::Api { status: 401, .. })
    ));
}

#[tokio::test]
async fn given_no_access_token_when_direct_read_then_anon_key_is_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/user_profiles"))
        .and(header("authorization", format!("Bearer {}", ANON_KEY).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = SupabaseProfileStore::new(&store_config(&mock_server.uri()), None).unwrap();
    let result = store.direct_read(&Identity::from("u1")).await;

    assert_that!(result, ok(none()));
}

// =========================================================================
// Privileged read
// =========================================================================

#[tokio::test]
async fn given_hidden_row_when_privileged_read_then_returns_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_profile_safe"))
        .and(body_json(json!({ "p_user_id": "u1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row("u1")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let rows = store
        .privileged()
        .privileged_read(&Identity::from("u1"))
        .await
        .unwrap();

    assert_that!(rows.len(), eq(1));
    assert_that!(rows[0].email.as_str(), eq("u1@example.com"));
}

#[tokio::test]
async fn given_no_row_when_privileged_read_then_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_profile_safe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let rows = store
        .privileged()
        .privileged_read(&Identity::from("u1"))
        .await
        .unwrap();

    assert_that!(rows.is_empty(), eq(true));
}

#[tokio::test]
async fn given_function_missing_when_privileged_read_then_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_profile_safe"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "PGRST202",
            "message": "Could not find the function public.get_user_profile_safe(p_user_id)"
        })))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store
        .privileged()
        .privileged_read(&Identity::from("u1"))
        .await;

    assert!(matches!(result, Err(StoreError::Api { status: 404, .. })));
}

// =========================================================================
// Privileged create
// =========================================================================

#[tokio::test]
async fn given_new_user_when_privileged_create_then_returns_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_user_profile_safe"))
        .and(body_json(json!({
            "p_user_id": "u1",
            "p_email": "u1@example.com",
            "p_full_name": "User One"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("u1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let id = store
        .privileged()
        .privileged_create(&Identity::from("u1"), "u1@example.com", "User One")
        .await
        .unwrap();

    assert_that!(id.as_str(), eq("u1"));
}

#[tokio::test]
async fn given_existing_row_when_privileged_create_then_unique_violation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_user_profile_safe"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"user_profiles_pkey\"",
            "details": "Key (id)=(u2) already exists.",
            "hint": null
        })))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store
        .privileged()
        .privileged_create(&Identity::from("u2"), "u2@example.com", "User Two")
        .await;

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_duplicate_only_in_details_when_privileged_create_then_not_unique_violation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_user_profile_safe"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "P0001",
            "message": "hospital assignment failed",
            "details": "duplicate hospital codes in seed data",
            "hint": null
        })))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store
        .privileged()
        .privileged_create(&Identity::from("u3"), "u3@example.com", "User Three")
        .await;

    let error = result.unwrap_err();
    assert_that!(error.is_unique_violation(), eq(false));
    assert!(matches!(
        error,
        StoreError::Api { status: 400, details: Some(_), .. }
    ));
}

#[tokio::test]
async fn given_server_error_when_privileged_create_then_not_unique_violation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_user_profile_safe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store
        .privileged()
        .privileged_create(&Identity::from("u3"), "", "User")
        .await;

    let error = result.unwrap_err();
    assert_that!(error.is_unique_violation(), eq(false));
    assert_that!(error.to_string(), contains_substring("upstream unavailable"));
}

#[tokio::test]
async fn given_null_id_when_privileged_create_then_unexpected_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/create_user_profile_safe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&mock_server)
        .await;

    let store = create_store(&mock_server.uri());
    let result = store
        .privileged()
        .privileged_create(&Identity::from("u4"), "u4@example.com", "User Four")
        .await;

    assert!(matches!(
        result,
        Err(StoreError::UnexpectedResponse { .. })
    ));
}
