use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

fn unable_to(action: &str, id: &UserId, e: sqlx::Error) -> UserError {
    UserError::DatabaseError(format!("Unable to {} user with id: {}. {}", action, id, e))
}

/// Translate a unique-constraint violation raised by the store into the matching domain error.
fn unique_violation(e: &sqlx::Error, user: &User) -> Option<UserError> {
    let db_err = e.as_database_error()?;
    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some("users_username_key") => Some(UserError::UsernameAlreadyExists(user.username.clone())),
        Some("users_email_key") => Some(UserError::EmailAlreadyExists(user.email.clone())),
        _ => Some(UserError::IdAlreadyExists(user.id.to_string())),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("add", &user.id, e))?;

        let (id_taken, username_taken, email_taken): (bool, bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM users WHERE id = $1),
                EXISTS(SELECT 1 FROM users WHERE username = $2),
                EXISTS(SELECT 1 FROM users WHERE email = $3)
            "#,
        )
        .bind(user.id.0)
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|e| unable_to("add", &user.id, e))?;

        let collision = if id_taken {
            Some(UserError::IdAlreadyExists(user.id.to_string()))
        } else if username_taken {
            Some(UserError::UsernameAlreadyExists(user.username.clone()))
        } else if email_taken {
            Some(UserError::EmailAlreadyExists(user.email.clone()))
        } else {
            None
        };

        if let Some(err) = collision {
            let _ = transaction.rollback().await;
            return Err(err);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&mut *transaction)
        .await;

        if let Err(e) = inserted {
            let _ = transaction.rollback().await;
            tracing::error!(user_id = %user.id, error = %e, "User insert rolled back");
            return Err(unique_violation(&e, &user).unwrap_or_else(|| unable_to("add", &user.id, e)));
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("add", &user.id, e))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("update", &user.id, e))?;

        let existing: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM users WHERE id = $1 FOR UPDATE"#)
                .bind(user.id.0)
                .fetch_optional(&mut *transaction)
                .await
                .map_err(|e| unable_to("update", &user.id, e))?;

        if existing.is_none() {
            let _ = transaction.rollback().await;
            return Err(UserError::NotFound(user.id.to_string()));
        }

        let updated = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&mut *transaction)
        .await;

        if let Err(e) = updated {
            let _ = transaction.rollback().await;
            tracing::error!(user_id = %user.id, error = %e, "User update rolled back");
            return Err(
                unique_violation(&e, &user).unwrap_or_else(|| unable_to("update", &user.id, e))
            );
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("update", &user.id, e))?;

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("delete", id, e))?;

        let existing: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM users WHERE id = $1 FOR UPDATE"#)
                .bind(id.0)
                .fetch_optional(&mut *transaction)
                .await
                .map_err(|e| unable_to("delete", id, e))?;

        if existing.is_none() {
            let _ = transaction.rollback().await;
            return Err(UserError::NotFound(id.to_string()));
        }

        let deleted = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id.0)
            .execute(&mut *transaction)
            .await;

        if let Err(e) = deleted {
            let _ = transaction.rollback().await;
            tracing::error!(user_id = %id, error = %e, "User delete rolled back");
            return Err(unable_to("delete", id, e));
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("delete", id, e))?;

        Ok(())
    }
}
