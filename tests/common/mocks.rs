use async_trait::async_trait;
use genai_inference::{Error, Result, genai::TextGenerator};
use std::sync::{Arc, Mutex};

/// Mock generator that always answers with the same text and records prompts
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    pub response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Mock generator whose every call fails
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    pub message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::generation(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
