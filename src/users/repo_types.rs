use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `"user"` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,         // assigned by the database
    pub email: String,    // login key, unique
    pub password: String, // Argon2 PHC string, never plaintext
}

/// Column updates for `UserStore::update_by_id`. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
