use crate::auth::password;

#[test]
fn test_verify_accepts_matching_password() {
    let long = "x".repeat(200);
    for plaintext in ["secret", "", long.as_str()] {
        let hashed = password::hash(plaintext).unwrap();
        assert!(password::verify(plaintext, &hashed));
    }
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hashed = password::hash("correct horse").unwrap();
    assert!(!password::verify("battery staple", &hashed));
}

#[test]
fn test_hashes_are_salted() {
    let first = password::hash("same-input").unwrap();
    let second = password::hash("same-input").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_malformed_stored_hash_is_a_mismatch_not_an_error() {
    assert!(!password::verify("anything", "not-a-bcrypt-hash"));
    assert!(!password::verify("anything", ""));
}
