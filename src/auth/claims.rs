use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload identifying the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,      // user ID
    pub email: String, // user email at login time
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}
