use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::LoginCredentials;
use crate::domain::user::models::RegistrationCredentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthenticationServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
pub struct AuthenticationService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthenticationService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthenticationServicePort for AuthenticationService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credentials: RegistrationCredentials) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Password hash task failed");
                    UserError::Password(e.to_string())
                })??;

        let user = User {
            id: UserId::new(),
            username: credentials.username,
            email: credentials.email,
            password_hash,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        let token = self.authenticator.generate_token(
            created_user.id,
            created_user.username,
            created_user.email,
        )?;

        Ok(token)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<String, UserError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(credentials.email.clone()))?;

        let claims = self
            .authenticator
            .claims_for(user.id, user.username.as_str(), user.email.as_str());

        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            UserError::Password(e.to_string())
        })?
        .map_err(|e| {
            tracing::warn!(user_id = %user.id, error = %e, "Login rejected");
            UserError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use auth::TokenSettings;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(TokenSettings {
            secret: "test-secret-key-for-jwt-signing-at-least-32-bytes".to_string(),
            issuer: "workers-api".to_string(),
            audience: "workers-clients".to_string(),
            expire_days: 7,
        }))
    }

    fn registration() -> RegistrationCredentials {
        RegistrationCredentials {
            username: "joe".to_string(),
            email: "joe@x.com".to_string(),
            password: "pass_word!".to_string(),
        }
    }

    fn stored_user(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId::new(),
            username: "joe".to_string(),
            email: "joe@x.com".to_string(),
            password_hash: authenticator.hash_password(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();

        repository
            .expect_create()
            .withf(|user| {
                let hasher = auth::PasswordHasher::new();
                user.username == "joe"
                    && user.email == "joe@x.com"
                    && user.password_hash != "pass_word!"
                    && hasher.verify("pass_word!", &user.password_hash) == Ok(true)
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthenticationService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service.register(registration()).await.unwrap();
        assert!(!token.is_empty());

        let claims = authenticator.validate_token(&token).unwrap();
        assert_eq!(claims.unique_name, "joe");
        assert_eq!(claims.email, "joe@x.com");
        assert!(UserId::from_string(&claims.sub).is_ok());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_register_hashes_off_the_runtime_thread() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthenticationService::new(Arc::new(repository), authenticator());

        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = {
            let ticks = Arc::clone(&ticks);
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            })
        };

        service.register(registration()).await.unwrap();
        ticker.abort();

        // the single runtime thread kept polling other tasks while the hash was derived
        assert!(ticks.load(Ordering::SeqCst) > 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::EmailAlreadyExists(user.email)));

        let service = AuthenticationService::new(Arc::new(repository), authenticator());

        let result = service.register(registration()).await;
        let err = result.unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(err.to_string(), "User with email: joe@x.com already exists.");
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();

        let user = stored_user(&authenticator, "pass_word!");
        let user_id = user.id;
        repository
            .expect_find_by_email()
            .withf(|email| email == "joe@x.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthenticationService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service
            .login(LoginCredentials {
                email: "joe@x.com".to_string(),
                password: "pass_word!".to_string(),
            })
            .await
            .unwrap();

        let claims = authenticator.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthenticationService::new(Arc::new(repository), authenticator());

        let result = service
            .login(LoginCredentials {
                email: "nobody@x.com".to_string(),
                password: "pass_word!".to_string(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, UserError::NotFoundByEmail(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();

        let user = stored_user(&authenticator, "pass_word!");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthenticationService::new(Arc::new(repository), authenticator);

        let result = service
            .login(LoginCredentials {
                email: "joe@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_malformed_stored_hash() {
        let mut repository = MockTestUserRepository::new();

        let mut user = stored_user(&authenticator(), "pass_word!");
        user.password_hash = "garbage".to_string();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthenticationService::new(Arc::new(repository), authenticator());

        let result = service
            .login(LoginCredentials {
                email: "joe@x.com".to_string(),
                password: "pass_word!".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::Password(_))));
    }
}
