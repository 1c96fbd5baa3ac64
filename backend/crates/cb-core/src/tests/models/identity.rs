use crate::{CoreError, Identity};

use googletest::prelude::*;

#[test]
fn given_blank_user_id_when_parsed_then_validation_error() {
    let result = Identity::parse("   ");

    assert_that!(
        matches!(result, Err(CoreError::Validation { .. })),
        eq(true)
    );
}

#[test]
fn given_user_id_when_parsed_then_round_trips_as_str() {
    let identity = Identity::parse("u1").unwrap();

    assert_that!(identity.as_str(), eq("u1"));
    assert_that!(identity.to_string(), eq("u1"));
}

#[test]
fn given_identity_when_serialized_then_plain_string() {
    let identity = Identity::from("9f1c");

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, eq("\"9f1c\""));
}
