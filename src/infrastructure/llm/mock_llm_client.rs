use crate::application::ports::{LlmClient, LlmClientError};

/// Replies with a fixed body regardless of the prompt.
pub struct MockLlmClient {
    reply: String,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(
            r#"{"evaluations":[{"lang":"ja","quality":"good"},{"lang":"en","quality":"good"},{"lang":"zh","quality":"bad"}],"final":{"ja":"こんにちは","en":"Hello","zh":"你好"}}"#,
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete_json(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        Ok(self.reply.clone())
    }
}
