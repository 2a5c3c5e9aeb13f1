use anyhow::Context;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes a user's password for the `password` column.
///
/// Argon2id with the crate's default (fixed) cost and a fresh OS-random salt,
/// so two users with the same password never share a stored value.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "could not hash user password");
            anyhow::anyhow!("hash user password: {e}")
        })?;
    Ok(phc.to_string())
}

/// Checks a login attempt against the stored `password` column.
///
/// `Ok(false)` on mismatch; `Err` only when the stored value is not a PHC
/// string, which means the row was written by something other than signup/update.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| {
        error!(error = %e, "stored password is not a PHC hash");
        anyhow::anyhow!("parse stored password hash: {e}")
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

// Argon2 is CPU-bound; keep it off the async workers.

pub async fn hash_password_blocking(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .context("hash task panicked")?
}

pub async fn verify_password_blocking(plain: String, hash: String) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
        .await
        .context("verify task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_hash_accepts_same_login_password() {
        let stored = hash_password("a-user's pass phrase").expect("hash");
        assert!(verify_password("a-user's pass phrase", &stored).expect("verify"));
    }

    #[test]
    fn hash_never_equals_plaintext() {
        let hash = hash_password("p1").expect("hashing should succeed");
        assert_ne!(hash, "p1");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password("same").expect("hash a");
        let b = hash_password("same").expect("hash b");
        assert_ne!(a, b);
        assert!(verify_password("same", &a).unwrap());
        assert!(verify_password("same", &b).unwrap());
    }

    #[test]
    fn login_with_other_password_is_a_mismatch_not_an_error() {
        let stored = hash_password("p1").expect("hash");
        assert!(!verify_password("p2", &stored).expect("verify"));
        assert!(!verify_password("P1", &stored).expect("verify"));
        assert!(!verify_password("", &stored).expect("verify"));
    }

    #[test]
    fn verify_errors_on_plaintext_in_password_column() {
        let err = verify_password("p1", "p1").unwrap_err();
        assert!(err.to_string().contains("parse stored password hash"));
    }

    #[tokio::test]
    async fn blocking_wrappers_agree_with_sync_versions() {
        let hash = hash_password_blocking("p1".into()).await.expect("hash");
        assert!(verify_password_blocking("p1".into(), hash.clone()).await.expect("verify"));
        assert!(!verify_password_blocking("p2".into(), hash).await.expect("verify"));
    }
}
