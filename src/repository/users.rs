//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{Role, UpdateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by login (primary authentication method)
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(login) = LOWER($1)",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Check if login already exists
    pub async fn login_exists(&self, login: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(login) = LOWER($1) AND id != $2)",
            )
            .bind(login)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(login) = LOWER($1))")
                .bind(login)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// List manageable accounts. The seeded super-admin never shows up here:
    /// it is outside the normal account lifecycle.
    pub async fn list(&self, include_inactive: bool) -> AppResult<Vec<User>> {
        let users = if include_inactive {
            sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE role != 'superadmin' ORDER BY name, id",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE role != 'superadmin' AND active ORDER BY name, id",
            )
            .fetch_all(&self.pool)
            .await?
        };
        Ok(users)
    }

    /// Insert a new user with an already-hashed credential
    pub async fn create(
        &self,
        name: &str,
        login: &str,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, login, password_hash, role, active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(login)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::DuplicateLogin(login.to_string())
            }
            _ => AppError::from(e),
        })
    }

    /// Update a user; absent fields stay unchanged. The password hash, when
    /// given, is the already-hashed new credential.
    pub async fn update(
        &self,
        id: i32,
        update: &UpdateUser,
        password_hash: Option<&str>,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                login = COALESCE($3, login),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                active = COALESCE($6, active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.login)
        .bind(password_hash)
        .bind(update.role)
        .bind(update.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateLogin(
                update.login.clone().unwrap_or_default(),
            ),
            _ => AppError::from(e),
        })?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Flip the active flag
    pub async fn set_active(&self, id: i32, active: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET active = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Whether the seeded super-admin account exists yet
    pub async fn superadmin_exists(&self) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE role = 'superadmin')")
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
