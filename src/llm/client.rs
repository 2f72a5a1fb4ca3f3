use std::path::Path;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoachError, Result};

use super::prompts::{build_system_prompt, build_user_prompt};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-5.1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI API client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY)
    pub api_key: String,
    /// Chat model to use
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// API root, without trailing slash
    pub base_url: String,
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load the API key from a `.env` file
    ///
    /// The file must exist. A key already set in the process environment
    /// takes precedence over the file, the same way dotenv never overrides
    /// existing variables.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        Self::from_env_file_with(path, std::env::var(API_KEY_VAR).ok())
    }

    /// Same as [`from_env_file`](Self::from_env_file) with the process
    /// environment value passed in explicitly
    pub fn from_env_file_with(path: &Path, env_key: Option<String>) -> Result<Self> {
        if !path.is_file() {
            return Err(CoachError::CredentialFileMissing(path.to_path_buf()));
        }

        let api_key = match env_key.filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => read_key_from_file(path)?
                .ok_or_else(|| CoachError::MissingApiKey(path.to_path_buf()))?,
        };

        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

fn read_key_from_file(path: &Path) -> Result<Option<String>> {
    let mut found = None;
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        if key == API_KEY_VAR && !value.is_empty() {
            found = Some(value);
        }
    }
    Ok(found)
}

/// OpenAI chat-completions client
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one system + user exchange and return the reply text
    pub async fn send_message(&self, system: &str, user: &str) -> Result<String> {
        let request = self.build_request(system, user);
        debug!(
            "POST {}/chat/completions (model={}, {} chars)",
            self.config.base_url,
            self.config.model,
            user.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::Api { status, body });
        }

        let response: ChatCompletionResponse = response.json().await?;
        response.into_content()
    }

    /// Ask for English-learning feedback on a formatted transcript
    pub async fn request_correction(&self, transcript: &str, learner: &str) -> Result<String> {
        let system = build_system_prompt(learner);
        let user = build_user_prompt(transcript);
        self.send_message(&system, &user).await
    }

    fn build_request(&self, system: &str, user: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: Some(self.config.temperature),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice
    fn into_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CoachError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_env(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_config_from_env_file() {
        let file = write_env("# credentials\nOPENAI_API_KEY=sk-test-123\n");
        let config = OpenAiConfig::from_env_file_with(file.path(), None).unwrap();

        assert_eq!(config.api_key, "sk-test-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_process_env_wins_over_file() {
        let file = write_env("OPENAI_API_KEY=from-file\n");
        let config =
            OpenAiConfig::from_env_file_with(file.path(), Some("from-env".to_string())).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn test_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let err = OpenAiConfig::from_env_file_with(&path, Some("key".to_string())).unwrap_err();
        assert!(matches!(err, CoachError::CredentialFileMissing(_)));
        assert!(err.to_string().contains("echo 'OPENAI_API_KEY=your-api-key'"));
    }

    #[test]
    fn test_missing_key_in_file() {
        let file = write_env("OTHER_KEY=value\nOPENAI_API_KEY=\n");
        let err = OpenAiConfig::from_env_file_with(file.path(), None).unwrap_err();
        assert!(matches!(err, CoachError::MissingApiKey(_)));
    }

    #[test]
    fn test_builders() {
        let config = OpenAiConfig::new("k".to_string())
            .with_model("gpt-4o")
            .with_temperature(0.2)
            .with_base_url("http://localhost:8080/v1/");

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_request_shape() {
        let client = OpenAiClient::new(OpenAiConfig::new("k".to_string()));
        let request = client.build_request("be a teacher", "---\nNeal: Hi.\n---");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be a teacher");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "---\nNeal: Hi.\n---");
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_content_extracted() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Score: 72"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_content().unwrap(), "Score: 72");
    }

    #[test]
    fn test_empty_response_is_error() {
        let no_choices: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            no_choices.into_content(),
            Err(CoachError::EmptyResponse)
        ));

        let null_content: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(null_content.into_content().is_err());
    }
}
