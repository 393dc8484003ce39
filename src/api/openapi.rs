//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/openapi.json` with Swagger UI at `/docs`.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{UserPatch, UserPayload, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "CRUD operations over a single User resource",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::replace_user,
        user_handler::patch_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserPayload,
            UserPatch,
            UserResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
