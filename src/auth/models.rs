use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::validation::{
    optional_text, required_text, validate_age, validate_email, validate_password,
    validate_positive, ValidationError,
};

/// Which credential store an identity comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Trainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Trainer => "trainer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (account ID)
    pub role: Role,   // Credential store
    pub exp: usize,   // Expiration time
    pub iat: usize,   // Issued at
}

/// Body of `POST /signup`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /trainers/signup`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub contact_number: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup fields after validation, password still in the clear
#[derive(Debug)]
pub struct ValidatedSignup {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub email: String,
    pub contact_number: Option<String>,
    pub password: String,
}

#[derive(Debug)]
pub struct ValidatedTrainerSignup {
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub contact_number: Option<String>,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(self) -> Result<ValidatedSignup, ValidationError> {
        Ok(ValidatedSignup {
            name: required_text("name", self.name.as_deref())?,
            age: self.age.map(validate_age).transpose()?,
            gender: optional_text(self.gender.as_deref()),
            height: self
                .height
                .map(|height| validate_positive("height", height))
                .transpose()?,
            weight: self
                .weight
                .map(|weight| validate_positive("weight", weight))
                .transpose()?,
            email: validate_email(self.email.as_deref())?,
            contact_number: optional_text(self.contact_number.as_deref()),
            password: validate_password(self.password.as_deref())?,
        })
    }
}

impl TrainerSignupRequest {
    pub fn validate(self) -> Result<ValidatedTrainerSignup, ValidationError> {
        let experience_years = match self.experience_years {
            Some(years) if years < 0 => {
                return Err(ValidationError::invalid(
                    "experienceYears",
                    "cannot be negative",
                ))
            }
            years => years,
        };

        Ok(ValidatedTrainerSignup {
            name: required_text("name", self.name.as_deref())?,
            email: validate_email(self.email.as_deref())?,
            specialization: optional_text(self.specialization.as_deref()),
            experience_years,
            contact_number: optional_text(self.contact_number.as_deref()),
            password: validate_password(self.password.as_deref())?,
        })
    }
}

/// Authentication response models
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Identity injected into request extensions by the auth middleware
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub account_id: Uuid,
    pub role: Role,
}

impl UserSession {
    pub fn from_claims(claims: &Claims) -> Result<Self, uuid::Error> {
        Ok(Self {
            account_id: Uuid::parse_str(&claims.sub)?,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation_normalizes_email() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "John Doe",
            "age": 30,
            "gender": "Male",
            "height": 180,
            "weight": 75,
            "email": "John.Doe@Example.com",
            "contactNumber": "1234567890",
            "password": "password123"
        }))
        .unwrap();

        let signup = request.validate().unwrap();
        assert_eq!(signup.email, "john.doe@example.com");
        assert_eq!(signup.contact_number.as_deref(), Some("1234567890"));
        assert_eq!(signup.height, Some(180.0));
    }

    #[test]
    fn test_signup_requires_name() {
        let request = SignupRequest {
            email: Some("john.doe@example.com".to_string()),
            password: Some("password123".to_string()),
            ..Default::default()
        };

        assert_eq!(request.validate().unwrap_err(), ValidationError::Missing("name"));
    }

    #[test]
    fn test_trainer_experience_cannot_be_negative() {
        let request = TrainerSignupRequest {
            name: Some("Sam Coach".to_string()),
            email: Some("sam@example.com".to_string()),
            experience_years: Some(-1),
            password: Some("password123".to_string()),
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Trainer).unwrap(), "\"trainer\"");
        assert_eq!(Role::User.to_string(), "user");
    }
}
