use crate::core::errors::NotebookError;
use crate::core::models::{
    note::Note,
    user::{NewUser, User},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

struct UserTable {
    next_id: i64,
    by_id: HashMap<i64, User>,
    by_email: HashMap<String, i64>, // email -> user_id
}

pub struct InMemoryStorage {
    users: Mutex<UserTable>,
    notes: Mutex<HashMap<String, Note>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(UserTable {
                next_id: 1,
                by_id: HashMap::new(),
                by_email: HashMap::new(),
            }),
            notes: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, user: NewUser) -> Result<User, NotebookError> {
        // Uniqueness check and insert under one lock, so concurrent
        // registrations for the same email cannot both succeed.
        let mut users = self.users.lock().await;
        if users.by_email.contains_key(&user.email) {
            return Err(NotebookError::EmailAlreadyRegistered(user.email));
        }
        let id = users.next_id;
        users.next_id += 1;
        let user = User {
            id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        users.by_email.insert(user.email.clone(), id);
        users.by_id.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, NotebookError> {
        Ok(self.users.lock().await.by_id.get(&user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, NotebookError> {
        // For production: use a database index on email
        let users = self.users.lock().await;
        Ok(users
            .by_email
            .get(email)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, NotebookError> {
        Ok(self.users.lock().await.by_email.contains_key(email))
    }

    async fn notes_for_user(&self, user_id: i64) -> Result<Vec<Note>, NotebookError> {
        let mut notes: Vec<Note> = self
            .notes
            .lock()
            .await
            .values()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    async fn get_note(&self, note_id: &str, user_id: i64) -> Result<Option<Note>, NotebookError> {
        Ok(self
            .notes
            .lock()
            .await
            .get(note_id)
            .filter(|note| note.user_id == user_id)
            .cloned())
    }

    async fn create_note(&self, note: Note) -> Result<String, NotebookError> {
        let id = note.id.clone();
        self.notes.lock().await.insert(note.id.clone(), note);
        Ok(id)
    }

    async fn update_note(&self, note: &Note) -> Result<bool, NotebookError> {
        let mut notes = self.notes.lock().await;
        let matched = notes
            .get(&note.id)
            .is_some_and(|existing| existing.user_id == note.user_id);
        if matched {
            notes.insert(note.id.clone(), note.clone());
        }
        Ok(matched)
    }

    async fn delete_note(&self, note_id: &str, user_id: i64) -> Result<bool, NotebookError> {
        let mut notes = self.notes.lock().await;
        let matched = notes
            .get(note_id)
            .is_some_and(|existing| existing.user_id == user_id);
        if matched {
            notes.remove(note_id);
        }
        Ok(matched)
    }

    async fn note_exists(&self, note_id: &str, user_id: i64) -> Result<bool, NotebookError> {
        Ok(self
            .notes
            .lock()
            .await
            .get(note_id)
            .is_some_and(|note| note.user_id == user_id))
    }
}
