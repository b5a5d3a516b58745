use crate::core::errors::NotebookError;
use crate::core::models::{note::Note, user::NewUser};
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use chrono::Utc;
use uuid::Uuid;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Store User".to_string(),
        password_hash: "hashed".to_string(),
        created_at: Utc::now(),
    }
}

fn new_note(user_id: i64, title: &str) -> Note {
    let now = Utc::now();
    Note {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: String::new(),
        user_id,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_create_user_assigns_sequential_ids() {
    let storage = InMemoryStorage::new();
    let first = storage.create_user(new_user("one@example.com")).await.unwrap();
    let second = storage.create_user(new_user("two@example.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(storage.get_user(first.id).await.unwrap().unwrap().email, "one@example.com");
    assert!(storage.get_user(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_user_enforces_email_uniqueness_at_the_store() {
    let storage = InMemoryStorage::new();
    storage.create_user(new_user("taken@example.com")).await.unwrap();

    assert!(storage.user_exists_by_email("taken@example.com").await.unwrap());
    assert!(!storage.user_exists_by_email("free@example.com").await.unwrap());

    // Even a caller that skipped the service pre-check cannot insert a
    // duplicate.
    let result = storage.create_user(new_user("taken@example.com")).await;
    assert!(matches!(result, Err(NotebookError::EmailAlreadyRegistered(_))));
}

#[tokio::test]
async fn test_note_exists_is_owner_scoped() {
    let storage = InMemoryStorage::new();
    let owner = storage.create_user(new_user("owner@example.com")).await.unwrap();
    let other = storage.create_user(new_user("other@example.com")).await.unwrap();

    let note = new_note(owner.id, "scoped");
    let id = storage.create_note(note).await.unwrap();

    assert!(storage.note_exists(&id, owner.id).await.unwrap());
    assert!(!storage.note_exists(&id, other.id).await.unwrap());
    assert!(!storage.note_exists("no-such-id", owner.id).await.unwrap());
}

#[tokio::test]
async fn test_update_note_reports_whether_a_row_matched() {
    let storage = InMemoryStorage::new();
    let owner = storage.create_user(new_user("rows@example.com")).await.unwrap();

    let mut note = new_note(owner.id, "before");
    storage.create_note(note.clone()).await.unwrap();

    note.title = "after".to_string();
    assert!(storage.update_note(&note).await.unwrap());
    assert_eq!(
        storage.get_note(&note.id, owner.id).await.unwrap().unwrap().title,
        "after"
    );

    // Same id under a different owner is no match, and the row is untouched.
    let mut foreign = note.clone();
    foreign.user_id = owner.id + 1;
    foreign.title = "hijacked".to_string();
    assert!(!storage.update_note(&foreign).await.unwrap());
    assert_eq!(
        storage.get_note(&note.id, owner.id).await.unwrap().unwrap().title,
        "after"
    );
}
