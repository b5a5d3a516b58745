use crate::core::errors::NotebookError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_register_issues_token_for_persisted_user() {
    let service = create_test_service();
    let response = service
        .register("a@x.com", "A", "secret")
        .await
        .unwrap();

    assert_eq!(response.user.email, "a@x.com");
    assert_eq!(response.user.name, "A");
    assert!(!response.token.is_empty());

    // The token's embedded identity must match the persisted user id.
    let claims = service.validate_token(&response.token).unwrap();
    assert_eq!(claims.sub, response.user.id.to_string());
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.name, "A");

    // The user record is retrievable and the same credentials log in.
    let stored = service.get_user(response.user.id).await.unwrap().unwrap();
    assert_eq!(stored.email, "a@x.com");
    let login = service.login("a@x.com", "secret").await.unwrap();
    assert_eq!(login.user.id, response.user.id);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let service = create_test_service();
    let first = service
        .register("dup@example.com", "First", "pw-one")
        .await
        .unwrap();

    let second = service.register("dup@example.com", "Second", "pw-two").await;
    assert!(matches!(second, Err(NotebookError::EmailAlreadyRegistered(_))));

    // Exactly one record survives: the original credentials still work and
    // resolve to the first id, the loser's never do.
    let login = service.login("dup@example.com", "pw-one").await.unwrap();
    assert_eq!(login.user.id, first.user.id);
    assert!(service.login("dup@example.com", "pw-two").await.is_err());
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password_look_the_same() {
    let service = create_test_service();
    service
        .register("known@example.com", "Known", "right-password")
        .await
        .unwrap();

    let unknown = service.login("unknown@example.com", "whatever").await;
    let wrong = service.login("known@example.com", "wrong-password").await;

    // Both failures collapse into the same variant, so callers cannot
    // enumerate registered emails.
    assert!(matches!(unknown, Err(NotebookError::InvalidCredentials)));
    assert!(matches!(wrong, Err(NotebookError::InvalidCredentials)));
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let service = create_test_service();

    let missing_email = service.register("", "A", "secret").await;
    assert!(matches!(missing_email, Err(NotebookError::MissingEmail)));

    let bad_email = service.register("invalid", "A", "secret").await;
    assert!(matches!(bad_email, Err(NotebookError::InvalidEmail(_))));

    let blank_name = service.register("a@x.com", "   ", "secret").await;
    assert!(matches!(blank_name, Err(NotebookError::InvalidInput(_, _))));

    let empty_password = service.register("a@x.com", "A", "").await;
    assert!(matches!(empty_password, Err(NotebookError::InvalidInput(_, _))));
}

#[tokio::test]
async fn test_auth_response_never_carries_password_material() {
    let service = create_test_service();
    let response = service
        .register("safe@example.com", "Safe", "hunter2")
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    let user = json.get("user").unwrap();
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_email_lookup_is_case_sensitive() {
    let service = create_test_service();
    service
        .register("case@example.com", "Case", "secret")
        .await
        .unwrap();

    // Exact-match semantics: a differently-cased email is a different login.
    let result = service.login("Case@example.com", "secret").await;
    assert!(matches!(result, Err(NotebookError::InvalidCredentials)));
}
