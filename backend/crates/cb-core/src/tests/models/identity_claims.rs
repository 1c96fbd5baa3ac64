use crate::IdentityClaims;

use googletest::prelude::*;

#[test]
fn given_full_name_claim_when_defaulting_then_full_name_wins() {
    let claims = IdentityClaims::new(
        Some("ada@example.com".to_string()),
        Some("Ada Lovelace".to_string()),
    );

    assert_that!(claims.full_name_or_default(), eq("Ada Lovelace"));
}

#[test]
fn given_only_email_when_defaulting_then_email_used_as_name() {
    let claims = IdentityClaims::new(Some("ada@example.com".to_string()), None);

    assert_that!(claims.full_name_or_default(), eq("ada@example.com"));
}

#[test]
fn given_blank_name_and_no_email_when_defaulting_then_user() {
    let claims = IdentityClaims::new(None, Some("  ".to_string()));

    assert_that!(claims.full_name_or_default(), eq("User"));
    assert_that!(claims.email_or_empty(), eq(""));
}
