//! services/api/src/adapters/chat_llm.rs
//!
//! This module contains the adapter for the portfolio chatbot LLM.
//! It implements the `CompletionService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use portfolio_core::ports::{CompletionService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CompletionService` using an OpenAI-compatible chat API.
#[derive(Clone)]
pub struct OpenAiChatAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatAdapter {
    /// Creates a new `OpenAiChatAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Builds the client configuration, pointing it at `base_url` when one is given.
    pub fn client_config(api_key: &str, base_url: Option<&str>) -> OpenAIConfig {
        let config = OpenAIConfig::new().with_api_key(api_key);
        match base_url {
            Some(url) => config.with_api_base(url.trim_end_matches('/')),
            None => config,
        }
    }
}

//=========================================================================================
// `CompletionService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CompletionService for OpenAiChatAdapter {
    /// Sends the instructions as the system message and the visitor's message as
    /// the only user turn. One completion, no streaming, no prior history.
    async fn complete(&self, instructions: &str, message: &str) -> PortResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(instructions)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(message)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Completion(e.to_string()))?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            PortError::Completion("Chat completion returned no choices.".to_string())
        })?;

        match choice.message.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(PortError::Completion(
                "Chat completion response contained no text content.".to_string(),
            )),
        }
    }
}
