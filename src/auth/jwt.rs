use crate::core::errors::NotebookError;
use crate::core::models::user::User;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // User ID
    pub email: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}

pub struct TokenService {
    secret: String,
    issuer: String,
    audience: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, issuer: String, audience: String, expiration_minutes: i64) -> Self {
        TokenService {
            secret,
            issuer,
            audience,
            expiration_minutes,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, NotebookError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .map_err(|e| NotebookError::InternalServerError(format!("Time error: {}", e)))?;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now as usize,
            exp: (now + self.expiration_minutes * 60) as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| NotebookError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    /// Fails closed: expiry, signature, issuer and audience mismatches all
    /// collapse into [`NotebookError::InvalidToken`].
    pub fn validate(&self, token: &str) -> Result<Claims, NotebookError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| NotebookError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}
