//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials for `POST /v1/sign-in`, sent form-urlencoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    /// Account email, named `username` by the OAuth2 password flow.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// New-account payload for `POST /v1/sign-up`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Plaintext password; hashed server-side.
    pub password: String,
    /// Contact phone number.
    pub phone_number: Option<String>,
}

/// Authenticated user record returned by sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Token scheme, always `bearer`.
    pub token_type: String,
}

/// Payload for `POST /v1/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPassword {
    /// Email the reset was requested for.
    pub email: String,
    /// Replacement password.
    pub password: String,
}

/// Payload for `PUT /v1/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePassword {
    /// Current password, verified server-side.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}
