use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenAIResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Errors surfaced by the handlers, each with its own status and body shape.
#[derive(Debug)]
pub enum ApiError {
    Validation {
        status: StatusCode,
        body: ValidationErrorResponse,
    },
    Generation(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data_error",
            JsonRejection::JsonSyntaxError(_) => "json_syntax_error",
            JsonRejection::MissingJsonContentType(_) => "missing_json_content_type",
            JsonRejection::BytesRejection(_) => "body_read_error",
            _ => "invalid_body",
        };

        Self::Validation {
            status: rejection.status(),
            body: ValidationErrorResponse {
                detail: vec![ValidationErrorDetail {
                    loc: vec!["body".to_string()],
                    msg: rejection.body_text(),
                    kind: kind.to_string(),
                }],
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { status, body } => (status, Json(body)).into_response(),
            Self::Generation(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { detail }),
            )
                .into_response(),
        }
    }
}
