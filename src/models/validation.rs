use thiserror::Error;

/// A payload field that failed validation before reaching storage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Email validation
pub fn validate_email(email: Option<&str>) -> Result<String, ValidationError> {
    let email = required_text("email", email)?;

    if email.len() > 255 {
        return Err(ValidationError::invalid(
            "email",
            "cannot be longer than 255 characters",
        ));
    }

    if !looks_like_email(&email) {
        return Err(ValidationError::invalid("email", "is not a valid address"));
    }

    Ok(email.to_lowercase())
}

/// Password validation. bcrypt only looks at the first 72 bytes.
pub fn validate_password(password: Option<&str>) -> Result<String, ValidationError> {
    let password = password.ok_or(ValidationError::Missing("password"))?;

    if password.len() < 8 {
        return Err(ValidationError::invalid(
            "password",
            "must be at least 8 characters long",
        ));
    }

    if password.len() > 72 {
        return Err(ValidationError::invalid(
            "password",
            "cannot be longer than 72 characters",
        ));
    }

    Ok(password.to_string())
}

/// A non-blank string field, trimmed.
pub fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::Missing(field)),
    }
}

/// Optional string field; blank counts as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Replacement for a stored string field; present-but-blank is rejected.
pub fn replacement_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(text) => required_text(field, Some(text)).map(Some),
        None => Ok(None),
    }
}

pub fn validate_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::invalid(
            field,
            "must be a non-negative number",
        ));
    }
    Ok(value)
}

pub fn validate_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

pub fn validate_age(age: i32) -> Result<i32, ValidationError> {
    if !(1..=130).contains(&age) {
        return Err(ValidationError::invalid("age", "must be between 1 and 130"));
    }
    Ok(age)
}
