//! User domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// Create/replace schema.
///
/// `name` and `email` are required; a missing `age` means "no age", which on
/// replace clears any stored value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Age in years
    #[serde(default)]
    #[schema(example = 30)]
    pub age: Option<i32>,
}

/// Partial update with an explicit allow-list of mutable fields.
///
/// Absent keys leave the field untouched. `age: null` clears the age, while
/// `name: null` and `email: null` are rejected by validation. Any other key,
/// `id` included, fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    /// New display name
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Alice")]
    pub name: Option<Option<String>>,
    /// New email address
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "a@x.com")]
    pub email: Option<Option<String>>,
    /// New age, or null to clear it
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>, nullable, example = 41)]
    pub age: Option<Option<i32>>,
}

impl UserPatch {
    /// True when no field is targeted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if matches!(self.name, Some(None)) {
            errors.add("name", not_null("name"));
        }
        if matches!(self.email, Some(None)) {
            errors.add("email", not_null("email"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn not_null(field: &str) -> ValidationError {
    let mut error = ValidationError::new("not_null");
    error.message = Some(format!("{} cannot be null", field).into());
    error
}

/// Distinguishes a key sent as `null` (`Some(None)`) from an absent key
/// (`None`, via `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// User representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Age in years, null when unknown
    #[schema(example = 30)]
    pub age: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            age: Some(30),
        }
    }

    #[test]
    fn test_payload_age_defaults_to_none() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.age, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_payload_requires_email() {
        let result = serde_json::from_str::<UserPayload>(r#"{"name":"Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: UserPatch = serde_json::from_str(r#"{"age":null}"#).unwrap();
        assert_eq!(patch.age, Some(None));
        assert_eq!(patch.name, None);

        let patch: UserPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_rejects_unknown_keys() {
        let result = serde_json::from_str::<UserPatch>(r#"{"id":99}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<UserPatch>(r#"{"age":41,"is_admin":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_null_required_fields() {
        let patch: UserPatch = serde_json::from_str(r#"{"name":null,"email":null}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_response_serializes_null_age() {
        let mut user = alice();
        user.age = None;
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "a@x.com", "age": null})
        );
    }
}
