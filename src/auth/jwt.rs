use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use super::claims::Claims;
use crate::{config::JwtConfig, state::AppState, users::User};

/// HS256 signing and verification keys derived from `SECRET_KEY`.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl JwtKeys {
    pub fn new(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            ttl: Duration::from_secs((cfg.ttl_minutes.max(0) as u64).saturating_mul(60)),
        }
    }

    pub fn issue(&self, user: &User) -> anyhow::Result<String> {
        self.issue_at(user, OffsetDateTime::now_utc())
    }

    pub fn issue_at(&self, user: &User, now: OffsetDateTime) -> anyhow::Result<String> {
        let ttl = TimeDuration::seconds(i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX));
        let exp = now
            .checked_add(ttl)
            .ok_or_else(|| anyhow::anyhow!("token expiry out of range"))?;
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            iat: now.unix_timestamp().max(0) as usize,
            exp: exp.unix_timestamp().max(0) as usize,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "jwt signed");
        Ok(token)
    }

    /// Fails on a bad signature, a malformed token, or `exp` in the past.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.id, "jwt verified");
        Ok(data.claims)
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::new(&state.config.jwt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys::new(&JwtConfig {
            secret: secret.into(),
            ttl_minutes: 60,
        })
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
        }
    }

    #[test]
    fn issue_and_verify_token() {
        let keys = make_keys("dev-secret");
        let user = user();
        let token = keys.issue(&user).expect("issue");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret");
        let issued = OffsetDateTime::now_utc() - TimeDuration::hours(2);
        let token = keys.issue_at(&user(), issued).expect("issue");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_other_secret() {
        let token = make_keys("secret-a").issue(&user()).expect("issue");
        assert!(make_keys("secret-b").verify(&token).is_err());
    }

    #[test]
    fn absurd_ttl_fails_to_issue_instead_of_panicking() {
        let keys = JwtKeys::new(&JwtConfig {
            secret: "dev-secret".into(),
            ttl_minutes: i64::MAX,
        });
        assert!(keys.issue(&user()).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = make_keys("dev-secret");
        assert!(keys.verify("not.a.jwt").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let keys = make_keys("dev-secret");
        let token = keys.issue(&user()).expect("issue");
        let mut parts: Vec<&str> = token.split('.').collect();
        let other = keys.issue(&user()).expect("issue");
        let other_payload = other.split('.').nth(1).unwrap().to_string();
        parts[1] = &other_payload;
        assert!(keys.verify(&parts.join(".")).is_err());
    }
}
