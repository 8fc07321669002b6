//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::{AuthConfig, BootstrapConfig},
    error::{AppError, AppResult},
    models::user::{CreateUser, Role, UpdateUser, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by login and password, returning a JWT token and the user.
    /// Unknown logins, wrong passwords and deactivated accounts all produce
    /// the same message.
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<(String, User)> {
        let invalid = || AppError::Authentication("Invalid login or password".to_string());

        let user = self
            .repository
            .users
            .get_by_login(login)
            .await?
            .ok_or_else(invalid)?;

        if !user.active {
            return Err(invalid());
        }
        if !self.verify_password(&user.password_hash, password)? {
            return Err(invalid());
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Create a JWT token for an authenticated user
    pub fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.login.clone(),
            user_id: user.id,
            name: user.name.clone(),
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Seed the super-admin account on first startup. The role is immutable
    /// from then on; the initial credential comes from configuration and is
    /// meant to be changed after the first login.
    pub async fn ensure_superadmin(&self, bootstrap: &BootstrapConfig) -> AppResult<()> {
        if self.repository.users.superadmin_exists().await? {
            return Ok(());
        }

        let hash = self.hash_password(&bootstrap.admin_password)?;
        let user = self
            .repository
            .users
            .create(&bootstrap.admin_name, &bootstrap.admin_login, &hash, Role::SuperAdmin)
            .await?;

        tracing::info!(
            login = %user.login,
            "Seeded super-admin account with the configured initial credential"
        );
        Ok(())
    }

    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// List manageable accounts (the super-admin is never listed)
    pub async fn list_users(&self, include_inactive: bool) -> AppResult<Vec<User>> {
        self.repository.users.list(include_inactive).await
    }

    /// Create a staff account. The super-admin role is not assignable.
    pub async fn create_user(&self, actor: i32, payload: CreateUser) -> AppResult<User> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let role = payload.role.unwrap_or(Role::Employee);
        if role == Role::SuperAdmin {
            return Err(AppError::Authorization(
                "The super-admin role cannot be assigned".to_string(),
            ));
        }
        if self.repository.users.login_exists(&payload.login, None).await? {
            return Err(AppError::DuplicateLogin(payload.login));
        }

        let hash = self.hash_password(&payload.password)?;
        let user = self
            .repository
            .users
            .create(&payload.name, &payload.login, &hash, role)
            .await?;

        self.repository
            .audit
            .record(actor, "create", "users", Some(user.id), Some(&user.login))
            .await?;
        Ok(user)
    }

    /// Edit a staff account. The super-admin account is off limits, and no
    /// account can be promoted to super-admin.
    pub async fn update_user(&self, actor: i32, id: i32, payload: UpdateUser) -> AppResult<User> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let target = self.repository.users.get_by_id(id).await?;
        if target.role == Role::SuperAdmin {
            return Err(AppError::Authorization(
                "The super-admin account cannot be modified".to_string(),
            ));
        }
        if payload.role == Some(Role::SuperAdmin) {
            return Err(AppError::Authorization(
                "The super-admin role cannot be assigned".to_string(),
            ));
        }
        if let Some(ref login) = payload.login {
            if self.repository.users.login_exists(login, Some(id)).await? {
                return Err(AppError::DuplicateLogin(login.clone()));
            }
        }

        let hash = match payload.password.as_deref() {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };
        let user = self
            .repository
            .users
            .update(id, &payload, hash.as_deref())
            .await?;

        self.repository
            .audit
            .record(actor, "update", "users", Some(user.id), Some(&user.login))
            .await?;
        Ok(user)
    }

    /// Deactivate or reactivate a staff account (never the super-admin)
    pub async fn set_active(&self, actor: i32, id: i32, active: bool) -> AppResult<User> {
        let target = self.repository.users.get_by_id(id).await?;
        if target.role == Role::SuperAdmin {
            return Err(AppError::Authorization(
                "The super-admin account cannot be deactivated".to_string(),
            ));
        }

        let user = self.repository.users.set_active(id, active).await?;
        let action = if active { "activate" } else { "deactivate" };
        self.repository
            .audit
            .record(actor, action, "users", Some(user.id), Some(&user.login))
            .await?;
        Ok(user)
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, stored_hash: &str, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::Internal(format!("Stored hash is malformed: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
