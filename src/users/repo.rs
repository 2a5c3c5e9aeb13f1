use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{User, UserChanges};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Fails if `email` is already taken.
    async fn insert(&self, email: &str, password_hash: &str) -> anyhow::Result<User>;
    /// `Ok(None)` when no row has `id`.
    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> anyhow::Result<Option<User>>;
    /// `Ok(None)` when no row has `id`.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
}

/// `UserStore` backed by Postgres. Every method is a single statement.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM "user"
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE "user"
               SET email = COALESCE($1, email),
                   password = COALESCE($2, password)
             WHERE id = $3
            RETURNING id, email, password
            "#,
        )
        .bind(changes.email) // Option<String> → NULL keeps the column
        .bind(changes.password_hash)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM "user"
             WHERE id = $1
            RETURNING id, email, password
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
