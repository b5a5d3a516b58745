use crate::core::errors::NotebookError;
use crate::core::models::{
    note::Note,
    user::{NewUser, User},
};
use async_trait::async_trait;

/// Persistence boundary. Every note operation is filtered by
/// `(note_id, user_id)` so a caller can never touch another user's rows.
/// Email lookups are exact-match and case-sensitive.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Assigns the user id. Fails with `EmailAlreadyRegistered` when the
    /// email is taken; the check and the insert happen in one atomic step.
    async fn create_user(&self, user: NewUser) -> Result<User, NotebookError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, NotebookError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, NotebookError>;
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, NotebookError>;

    /// Ordered by `updated_at` descending.
    async fn notes_for_user(&self, user_id: i64) -> Result<Vec<Note>, NotebookError>;
    async fn get_note(&self, note_id: &str, user_id: i64) -> Result<Option<Note>, NotebookError>;
    async fn create_note(&self, note: Note) -> Result<String, NotebookError>;
    /// Returns true iff a note matching `(note.id, note.user_id)` existed.
    async fn update_note(&self, note: &Note) -> Result<bool, NotebookError>;
    async fn delete_note(&self, note_id: &str, user_id: i64) -> Result<bool, NotebookError>;
    async fn note_exists(&self, note_id: &str, user_id: i64) -> Result<bool, NotebookError>;
}

pub mod in_memory;
