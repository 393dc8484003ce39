//! User id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::{AppError, FieldError};

/// The `{id}` path segment of a single-user route.
///
/// An id that is not an integer is a validation error (422) like any other
/// malformed input, instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation_with_details(
                    "Invalid user id",
                    vec![FieldError {
                        field: "id".to_string(),
                        message: rejection.body_text(),
                        code: "type_error".to_string(),
                    }],
                )
            })?;

        Ok(UserId(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new().route(
            "/users/:id",
            get(|UserId(id): UserId| async move { id.to_string() }),
        )
    }

    async fn get_status(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_integer_id_is_extracted() {
        let (status, body) = get_status("/users/17").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"17");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_validation_error() {
        let (status, body) = get_status("/users/abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["details"][0]["field"], "id");
    }

    #[tokio::test]
    async fn test_out_of_range_id_is_validation_error() {
        let (status, _) = get_status("/users/99999999999").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
