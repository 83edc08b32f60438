//! Unit tests for password hashing

use super::mocks::hasher;

#[tokio::test]
async fn test_hash_and_verify() {
    let hasher = hasher();
    let hash = hasher.hash("correct horse").await.unwrap();

    assert_ne!(hash, "correct horse");
    assert!(hasher.verify("correct horse", &hash).await.unwrap());
    assert!(!hasher.verify("battery staple", &hash).await.unwrap());
}

#[tokio::test]
async fn test_verify_against_garbage_hash_is_a_fault() {
    let result = hasher().verify("secret", "not-a-bcrypt-hash").await;
    assert!(matches!(result, Err(crate::errors::Fault::Unexpected(_))));
}
