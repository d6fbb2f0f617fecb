use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// The single profile row describing the portfolio owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

/// Body of `PUT /profile`. Every field is written on update; optionals
/// left out of the body are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "Field 'name' must not be empty".to_string(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "Field 'email' must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> ProfileInput {
        ProfileInput {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        assert!(input("Ada", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = input("   ", "ada@example.com").validate().unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(msg) if msg.contains("name")));
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let err = input("Ada", "").validate().unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(msg) if msg.contains("email")));
    }

    #[test]
    fn test_missing_optionals_deserialize_as_none() {
        let parsed: ProfileInput =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(parsed.bio, None);
        assert_eq!(parsed.portfolio, None);
    }

    #[test]
    fn test_missing_required_field_fails_to_deserialize() {
        assert!(serde_json::from_str::<ProfileInput>(r#"{"name":"Ada"}"#).is_err());
    }
}
