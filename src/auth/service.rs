use std::sync::Arc;
use uuid::Uuid;

use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::auth::{
    AuthError, JwtService, LoginRequest, LoginResponse, MessageResponse, Role, SignupRequest,
    TrainerSignupRequest, UserSession,
};
use crate::models::{NewTrainer, NewUser};
use crate::repository::{RepositoryError, TrainerRepository, UserRepository};

/// Signup, login and token verification for both credential stores
#[derive(Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    users: Arc<dyn UserRepository>,
    trainers: Arc<dyn TrainerRepository>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// What login needs from either store
struct StoredCredentials {
    id: Uuid,
    password_hash: String,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        trainers: Arc<dyn TrainerRepository>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            jwt_service,
            users,
            trainers,
        }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Register a new user
    pub async fn signup(&self, request: SignupRequest) -> Result<MessageResponse, AuthError> {
        let signup = request.validate()?;

        match self.users.find_by_email(&signup.email).await {
            Ok(Some(_)) => return Err(AuthError::EmailAlreadyExists),
            Ok(None) => {}
            Err(err) => return Err(registration_failed(Role::User, err)),
        }

        let password_hash = hash_password_blocking(signup.password).await.map_err(|err| {
            tracing::error!("Password hashing failed during signup: {}", err);
            AuthError::RegistrationFailed(Role::User)
        })?;

        let user = self
            .users
            .insert(NewUser {
                name: signup.name,
                age: signup.age,
                gender: signup.gender,
                height: signup.height,
                weight: signup.weight,
                email: signup.email,
                contact_number: signup.contact_number,
                password_hash,
            })
            .await
            .map_err(|err| registration_failed(Role::User, err))?;

        tracing::info!("Registered user {}", user.id);

        Ok(MessageResponse {
            message: "User registered successfully".to_string(),
        })
    }

    /// Register a new trainer
    pub async fn signup_trainer(
        &self,
        request: TrainerSignupRequest,
    ) -> Result<MessageResponse, AuthError> {
        let signup = request.validate()?;

        match self.trainers.find_by_email(&signup.email).await {
            Ok(Some(_)) => return Err(AuthError::EmailAlreadyExists),
            Ok(None) => {}
            Err(err) => return Err(registration_failed(Role::Trainer, err)),
        }

        let password_hash = hash_password_blocking(signup.password).await.map_err(|err| {
            tracing::error!("Password hashing failed during trainer signup: {}", err);
            AuthError::RegistrationFailed(Role::Trainer)
        })?;

        let trainer = self
            .trainers
            .insert(NewTrainer {
                name: signup.name,
                email: signup.email,
                specialization: signup.specialization,
                experience_years: signup.experience_years,
                contact_number: signup.contact_number,
                password_hash,
            })
            .await
            .map_err(|err| registration_failed(Role::Trainer, err))?;

        tracing::info!("Registered trainer {}", trainer.id);

        Ok(MessageResponse {
            message: "Trainer registered successfully".to_string(),
        })
    }

    /// Login user
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let email = request.email.trim().to_lowercase();
        let stored = self
            .users
            .find_by_email(&email)
            .await
            .map_err(login_failed)?
            .map(|user| StoredCredentials {
                id: user.id,
                password_hash: user.password_hash,
            });

        self.issue_token(stored, request.password, Role::User).await
    }

    /// Login trainer
    pub async fn login_trainer(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let email = request.email.trim().to_lowercase();
        let stored = self
            .trainers
            .find_by_email(&email)
            .await
            .map_err(login_failed)?
            .map(|trainer| StoredCredentials {
                id: trainer.id,
                password_hash: trainer.password_hash,
            });

        self.issue_token(stored, request.password, Role::Trainer).await
    }

    /// Validate a bearer token and require it to belong to `role`
    pub fn validate_session(&self, token: &str, role: Role) -> Result<UserSession, AuthError> {
        let session = self.jwt_service.extract_user_session(token)?;

        if session.role != role {
            return Err(AuthError::WrongRole(role));
        }

        Ok(session)
    }

    async fn issue_token(
        &self,
        stored: Option<StoredCredentials>,
        password: String,
        role: Role,
    ) -> Result<LoginResponse, AuthError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let stored = stored.ok_or(AuthError::InvalidCredentials)?;

        let matches = verify_password_blocking(password, stored.password_hash)
            .await
            .map_err(|err| {
                tracing::error!("Password verification failed for {} {}: {}", role, stored.id, err);
                AuthError::LoginFailed
            })?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .jwt_service
            .create_token(stored.id, role)
            .map_err(|err| {
                tracing::error!("Token signing failed for {} {}: {}", role, stored.id, err);
                AuthError::LoginFailed
            })?;

        Ok(LoginResponse {
            message: "Login Successful".to_string(),
            token,
        })
    }
}

fn registration_failed(role: Role, err: RepositoryError) -> AuthError {
    match err {
        RepositoryError::Conflict(_) => AuthError::EmailAlreadyExists,
        err => {
            tracing::error!("Failed to register {}: {}", role, err);
            AuthError::RegistrationFailed(role)
        }
    }
}

fn login_failed(err: RepositoryError) -> AuthError {
    tracing::error!("Credential lookup failed: {}", err);
    AuthError::LoginFailed
}
