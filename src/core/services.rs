use crate::auth::jwt::{Claims, TokenService};
use crate::auth::password;
use crate::core::errors::{FieldError, NotebookError};
use crate::core::models::{
    note::Note,
    user::{NewUser, User, UserDto},
};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct AuthResponse {
    pub user: UserDto,
    pub token: String,
}

pub struct NotebookService<S: Storage> {
    storage: S,
    tokens: TokenService,
}

impl<S: Storage> NotebookService<S> {
    pub fn new(storage: S, tokens: TokenService) -> Self {
        NotebookService { storage, tokens }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, NotebookError> {
        self.tokens.validate(token)
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), NotebookError> {
        if value.trim().is_empty() {
            return Err(NotebookError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(NotebookError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<AuthResponse, NotebookError> {
        if email.is_empty() {
            return Err(NotebookError::MissingEmail);
        }
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(NotebookError::InvalidEmail(email.to_string()));
        }
        self.validate_string_input("name", name, 100)?;
        if password.is_empty() {
            return Err(NotebookError::InvalidInput(
                "password".to_string(),
                FieldError {
                    field: "password".to_string(),
                    title: "Invalid password".to_string(),
                    description: "Password cannot be empty".to_string(),
                },
            ));
        }

        // Pre-check for a friendly conflict; the store enforces uniqueness
        // again under its own lock for the racing case.
        if self.storage.user_exists_by_email(email).await? {
            return Err(NotebookError::EmailAlreadyRegistered(email.to_string()));
        }

        let password_hash = password::hash(password)?;
        let user = self
            .storage
            .create_user(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        let token = self.tokens.issue(&user)?;
        info!(user_id = user.id, "user registered");

        Ok(AuthResponse {
            user: UserDto::from(&user),
            token,
        })
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, NotebookError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(NotebookError::InvalidCredentials)?;

        if !password::verify(password, &user.password_hash) {
            return Err(NotebookError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        info!(user_id = user.id, "user logged in");

        Ok(AuthResponse {
            user: UserDto::from(&user),
            token,
        })
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, NotebookError> {
        self.storage.get_user(user_id).await
    }

    pub async fn list_notes(&self, user_id: i64) -> Result<Vec<Note>, NotebookError> {
        self.storage.notes_for_user(user_id).await
    }

    pub async fn get_note(&self, user_id: i64, note_id: &str) -> Result<Option<Note>, NotebookError> {
        self.storage.get_note(note_id, user_id).await
    }

    pub async fn create_note(
        &self,
        user_id: i64,
        title: &str,
        content: Option<String>,
    ) -> Result<Note, NotebookError> {
        self.validate_string_input("title", title, 200)?;

        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.unwrap_or_default(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.storage.create_note(note.clone()).await?;
        info!(user_id, note_id = %note.id, "note created");
        Ok(note)
    }

    /// Partial update: a supplied non-blank `title` overwrites, a supplied
    /// `content` overwrites (empty string allowed), omitted fields stay put.
    /// `updated_at` is always refreshed. Returns `None` when no note matches
    /// `(note_id, user_id)`, including when it vanished mid-update.
    pub async fn update_note(
        &self,
        user_id: i64,
        note_id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Note>, NotebookError> {
        let Some(mut note) = self.storage.get_note(note_id, user_id).await? else {
            return Ok(None);
        };

        if let Some(title) = title {
            if !title.trim().is_empty() {
                self.validate_string_input("title", &title, 200)?;
                note.title = title;
            }
        }
        if let Some(content) = content {
            note.content = content;
        }
        note.updated_at = Utc::now();

        if self.storage.update_note(&note).await? {
            info!(user_id, note_id = %note.id, "note updated");
            Ok(Some(note))
        } else {
            Ok(None)
        }
    }

    pub async fn delete_note(&self, user_id: i64, note_id: &str) -> Result<bool, NotebookError> {
        let deleted = self.storage.delete_note(note_id, user_id).await?;
        if deleted {
            info!(user_id, note_id, "note deleted");
        }
        Ok(deleted)
    }
}
