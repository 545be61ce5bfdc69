//! User request and response contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::user;

/// User creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    #[schema(example = "jdoe")]
    pub username: String,
    /// Plain-text password, hashed before storage
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Full-replacement update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchUser {
    /// Filled from the request path by the handler
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// User representation returned to clients (never includes the hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
