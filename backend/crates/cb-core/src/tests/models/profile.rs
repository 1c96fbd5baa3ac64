use crate::{Identity, Profile, Role, can_access_hospital, has_role};

use googletest::prelude::*;

fn profile(role: Role, hospital_id: Option<&str>) -> Profile {
    Profile {
        id: Identity::from("u1"),
        email: "u1@example.com".to_string(),
        full_name: "User One".to_string(),
        role,
        hospital_id: hospital_id.map(String::from),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn given_role_in_list_when_checked_then_true() {
    let nurse = profile(Role::Nurse, Some("h1"));

    assert_that!(nurse.has_role(&[Role::Doctor, Role::Nurse]), eq(true));
    assert_that!(nurse.has_role(&[Role::Admin]), eq(false));
}

#[test]
fn given_no_profile_when_checked_then_no_role_and_no_access() {
    assert_that!(has_role(None, &[Role::Staff]), eq(false));
    assert_that!(can_access_hospital(None, "h1"), eq(false));
}

#[test]
fn given_superadmin_without_hospital_when_accessing_any_hospital_then_allowed() {
    let admin = profile(Role::Superadmin, None);

    assert_that!(can_access_hospital(Some(&admin), "h42"), eq(true));
}

#[test]
fn given_scoped_user_when_accessing_other_hospital_then_denied() {
    let doctor = profile(Role::Doctor, Some("h1"));

    assert_that!(doctor.can_access_hospital("h1"), eq(true));
    assert_that!(doctor.can_access_hospital("h2"), eq(false));
}

#[test]
fn given_store_row_json_when_deserialized_then_profile() {
    let json = r#"{
        "id": "u1",
        "email": "u1@example.com",
        "full_name": "User One",
        "role": "admin",
        "hospital_id": null,
        "created_at": "2025-01-01T00:00:00Z"
    }"#;

    let parsed: Profile = serde_json::from_str(json).unwrap();

    assert_that!(parsed.role, eq(Role::Admin));
    assert_that!(parsed.hospital_id, none());
    assert_that!(parsed.created_at, some(anything()));
}

#[test]
fn given_trigger_row_with_null_name_when_deserialized_then_empty_name() {
    let json = r#"{
        "id": "u2",
        "email": null,
        "full_name": null,
        "role": "staff",
        "hospital_id": null
    }"#;

    let parsed: Profile = serde_json::from_str(json).unwrap();

    assert_that!(parsed.id.as_str(), eq("u2"));
    assert_that!(parsed.full_name.as_str(), eq(""));
    assert_that!(parsed.email.as_str(), eq(""));
}

#[test]
fn given_row_without_name_column_when_deserialized_then_empty_name() {
    let json = r#"{"id": "u3", "email": "u3@example.com", "role": "nurse"}"#;

    let parsed: Profile = serde_json::from_str(json).unwrap();

    assert_that!(parsed.full_name.as_str(), eq(""));
    assert_that!(parsed.role, eq(Role::Nurse));
}
