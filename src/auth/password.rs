use crate::core::errors::NotebookError;

pub fn hash(plaintext: &str) -> Result<String, NotebookError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
        .map_err(|e| NotebookError::InternalServerError(format!("Password hashing error: {}", e)))
}

/// A malformed stored hash counts as a mismatch, not an error.
pub fn verify(plaintext: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}
