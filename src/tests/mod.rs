mod auth_tests;
mod credential_tests;
mod storage_tests;

use crate::auth::jwt::TokenService;
use crate::core::services::NotebookService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> NotebookService<InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let tokens = TokenService::new(
        "test-secret".to_string(),
        "notebook-api".to_string(),
        "notebook-app".to_string(),
        1440,
    );
    NotebookService::new(storage, tokens)
}
