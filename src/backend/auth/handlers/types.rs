/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login and me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Username/password form submitted to register and login
///
/// A field missing from the submission deserializes as empty and is then
/// reported by validation, the same as a field left blank.
#[derive(Deserialize, Debug, Clone)]
pub struct CredentialsForm {
    /// Submitted username
    #[serde(default)]
    pub username: String,
    /// Submitted password (never logged)
    #[serde(default)]
    pub password: String,
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's username
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
