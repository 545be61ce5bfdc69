//! Tag request and response contracts.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::tag;

/// Tag creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTag {
    #[validate(length(min = 3, max = 15, message = "Tag name must be 3 to 15 characters"))]
    #[schema(example = "climate")]
    pub name: String,
}

/// Full-replacement update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTag {
    #[validate(length(min = 3, max = 15, message = "Tag name must be 3 to 15 characters"))]
    pub name: String,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchTag {
    /// Filled from the request path by the handler
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 3, max = 15, message = "Tag name must be 3 to 15 characters"))]
    pub name: Option<String>,
}

/// Tag representation returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<tag::Model> for TagResponse {
    fn from(model: tag::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
