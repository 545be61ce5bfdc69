//! News request and response contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::news;

/// News creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNews {
    #[validate(length(min = 5, max = 30, message = "News title must be 5 to 30 characters"))]
    #[schema(example = "Ferris ships a new release")]
    pub title: String,
    #[validate(length(min = 5, max = 255, message = "News content must be 5 to 255 characters"))]
    pub content: String,
    /// Id of an existing author
    pub author_id: i32,
    /// Ids of existing tags; the news is linked to exactly this set
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

/// Full-replacement update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateNews {
    #[validate(length(min = 5, max = 30, message = "News title must be 5 to 30 characters"))]
    pub title: String,
    #[validate(length(min = 5, max = 255, message = "News content must be 5 to 255 characters"))]
    pub content: String,
    pub author_id: i32,
    /// Replaces the current tag set wholesale
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchNews {
    /// Filled from the request path by the handler
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 5, max = 30, message = "News title must be 5 to 30 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 5, max = 255, message = "News content must be 5 to 255 characters"))]
    pub content: Option<String>,
    pub author_id: Option<i32>,
    pub tag_ids: Option<Vec<i32>>,
}

/// News representation returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NewsResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub tag_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsResponse {
    /// Assemble from the stored row and its current tag associations.
    pub fn from_model(model: news::Model, tag_ids: Vec<i32>) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            tag_ids,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
