//! Auth service payloads.

use innovalex_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: RecordId,
    #[serde(default)]
    pub email: Option<String>,
}

/// A password-grant session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Seconds until `access_token` expires.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: AuthUser,
}

/// Result of a sign-up. `session` is absent when the project requires email
/// confirmation before the first sign-in.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub user: AuthUser,
    pub session: Option<Session>,
}

/// Credentials for the password grant and sign-up endpoints.
#[derive(Debug, Serialize)]
pub struct PasswordCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
