//! Success bodies shared by the entity handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `201 Created` body carrying the storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "created")]
    pub message: String,
    #[schema(example = 99)]
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "created".to_string(),
            id,
        }
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// `200 OK` acknowledgement for updates and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "updated")]
    pub message: String,
}

impl MessageResponse {
    pub fn updated() -> Self {
        Self {
            message: "updated".to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            message: "deleted".to_string(),
        }
    }

    /// Acknowledges an accepted outbound message such as an email.
    pub fn sent() -> Self {
        Self {
            message: "sent".to_string(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
