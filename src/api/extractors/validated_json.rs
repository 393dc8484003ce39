//! Validated JSON extractor - Combines deserialization with validation.
//!
//! Every stage maps to `AppError::Validation` (422): a body that is not a
//! JSON object, one that does not deserialize into `T` (missing required
//! field, wrong type, unknown key) and one that deserializes but fails
//! `Validate`.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, FieldError};

/// Validated JSON extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// use user_crud::api::extractors::ValidatedJson;
/// use user_crud::domain::UserPayload;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserPayload>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        // Derived struct deserializers also accept positional arrays
        if !body.is_object() {
            return Err(AppError::validation("Request body must be a JSON object"));
        }

        let value: T =
            serde_json::from_value(body).map_err(|e| AppError::validation(e.to_string()))?;

        value.validate().map_err(|e| {
            AppError::validation_with_details("Request validation failed", field_errors(&e))
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validator errors into field-level details
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field)),
                code: e.code.to_string(),
            })
        })
        .collect();

    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}
