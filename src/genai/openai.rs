use super::TextGenerator;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// Real backend talking to any OpenAI-compatible chat-completions endpoint.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: Option<String>,
}

impl OpenAiGenerator {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            system_prompt: config.system_prompt,
        }
    }

    fn build_messages(&self, prompt: &str) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages = Vec::with_capacity(2);

        if let Some(system_prompt) = &self.system_prompt {
            let msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(ChatCompletionRequestSystemMessageContent::Text(
                    system_prompt.clone(),
                ))
                .build()?;
            messages.push(msg.into());
        }

        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()?;
        messages.push(msg.into());

        Ok(messages)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(self.build_messages(prompt)?)
            .build()?;

        debug!("Requesting chat completion from model {}", self.model);
        let response = self.client.chat().create(request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::generation("model returned no choices"))?;

        match choice.message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(Error::generation("model returned an empty response")),
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
