use serde::{Deserialize, Serialize};

/// Body of both `POST /login` and `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
