use super::types::{ApiError, GenAIResponse, HealthResponse, PromptRequest};
use crate::genai::TextGenerator;
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<GenAIResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    info!(
        "Received generate request ({} chars) for backend {}",
        request.prompt.chars().count(),
        state.generator.name()
    );

    match state.generator.generate(&request.prompt).await {
        Ok(response) => {
            info!("Generated response ({} chars)", response.chars().count());
            Ok(Json(GenAIResponse { response }))
        }
        Err(e) => {
            error!("Failed to generate response: {}", e);
            Err(ApiError::Generation(e.to_string()))
        }
    }
}
