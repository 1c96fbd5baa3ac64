use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Superadmin.as_str(), "superadmin");
    assert_eq!(Role::Nurse.as_str(), "nurse");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("doctor").unwrap(), Role::Doctor);
    assert_eq!(Role::from_str("staff").unwrap(), Role::Staff);
    assert!(matches!(
        Role::from_str("janitor"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_serde_uses_snake_case() {
    let json = serde_json::to_string(&Role::Superadmin).unwrap();
    assert_eq!(json, "\"superadmin\"");

    let role: Role = serde_json::from_str("\"nurse\"").unwrap();
    assert_eq!(role, Role::Nurse);
}
