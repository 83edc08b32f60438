//! Unit tests for token claims

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::Claims;

#[test]
fn test_claims_expiry_window() {
    let user_id = Uuid::new_v4();
    let issued_at = Utc::now();
    let claims = Claims::new(user_id, issued_at, 3600);

    assert_eq!(claims.id, user_id.to_string());
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.user_id(), Some(user_id));

    assert!(!claims.is_expired_at(issued_at + Duration::seconds(3599)));
    assert!(claims.is_expired_at(issued_at + Duration::seconds(3600)));
}

#[test]
fn test_claims_with_malformed_subject() {
    let claims = Claims {
        id: "not-a-uuid".to_string(),
        iat: 0,
        exp: 10,
    };
    assert_eq!(claims.user_id(), None);
}

#[test]
fn test_huge_lifetime_saturates_instead_of_wrapping() {
    let issued_at = Utc::now();
    let claims = Claims::new(Uuid::new_v4(), issued_at, i64::MAX);

    assert_eq!(claims.exp, i64::MAX);
    assert!(!claims.is_expired_at(issued_at + Duration::days(365)));
}
