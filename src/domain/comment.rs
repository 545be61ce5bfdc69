//! Comment request and response contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::comment;

/// Comment creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComment {
    #[validate(length(min = 5, max = 255, message = "Comment content must be 5 to 255 characters"))]
    #[schema(example = "Great piece, well sourced.")]
    pub content: String,
    /// Id of the news item being commented on
    pub news_id: i32,
}

/// Full-replacement update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateComment {
    #[validate(length(min = 5, max = 255, message = "Comment content must be 5 to 255 characters"))]
    pub content: String,
    pub news_id: i32,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchComment {
    /// Filled from the request path by the handler
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 5, max = 255, message = "Comment content must be 5 to 255 characters"))]
    pub content: Option<String>,
    pub news_id: Option<i32>,
}

/// Comment representation returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub news_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<comment::Model> for CommentResponse {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            news_id: model.news_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
