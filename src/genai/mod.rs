mod mock;
mod openai;

pub use mock::{CANNED_RESPONSES, DOCKER_RESPONSE, KUBERNETES_RESPONSE, MockGenerator};
pub use openai::OpenAiGenerator;

use crate::{Result, config::GenAiConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Produces a response for a prompt. Implementations may fail; the HTTP layer
/// turns failures into a 500.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Picks the backend once at startup. The real backend is used only when the
/// mock is disabled and a `genai.llm` section exists; otherwise the mock serves.
pub fn select_backend(config: &GenAiConfig) -> Result<Arc<dyn TextGenerator>> {
    if config.use_mock {
        info!("Using mock GenAI backend");
        return Ok(Arc::new(MockGenerator::from_config(&config.mock)));
    }

    match &config.llm {
        Some(llm) => {
            info!("Using OpenAI-compatible GenAI backend with model {}", llm.model);
            Ok(Arc::new(OpenAiGenerator::new(llm.clone())))
        }
        None => {
            warn!(
                "USE_MOCK_GENAI is disabled but no genai.llm section is configured, \
                 falling back to the mock GenAI backend"
            );
            Ok(Arc::new(MockGenerator::from_config(&config.mock)))
        }
    }
}
