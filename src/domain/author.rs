//! Author request and response contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::author;

/// Author creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    /// Author display name
    #[validate(length(min = 3, max = 15, message = "Author name must be 3 to 15 characters"))]
    #[schema(example = "C. Cornbury")]
    pub name: String,
}

/// Full-replacement update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 3, max = 15, message = "Author name must be 3 to 15 characters"))]
    pub name: String,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchAuthor {
    /// Filled from the request path by the handler
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 3, max = 15, message = "Author name must be 3 to 15 characters"))]
    pub name: Option<String>,
}

/// Author representation returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<author::Model> for AuthorResponse {
    fn from(model: author::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
