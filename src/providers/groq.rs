use serde::{Deserialize, Serialize};
use log::{debug, trace, error, info};
use std::time::Duration;

const GROQ_API_BASE: &str
  = "https://api.groq.com/openai/v1";

/// Environment variable consulted when no key is passed in
pub const GROQ_KEY_ENV: &str = "GROQ_API_KEY";

/// Model the host GUI offers by default
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Models the host GUI offers for this provider
pub const GROQ_MODELS: [&str; 5] =
[   "llama-3.3-70b-versatile"
  , "llama-3.1-8b-instant"
  , "llama3-70b-8192"
  , "mixtral-8x7b-32768"
  , "gemma2-9b-it"
];

/// Prefix put in front of the user message so chat models treat the
/// input as a prompt to expand, not a question to answer
const USER_MESSAGE_PREFIX: &str
  = "Expand this simple prompt into a detailed image generation prompt: ";

/// Swap decommissioned model ids for their current equivalents.
/// Ids without a replacement pass through unchanged.
pub fn resolve_model_id(model: &str) -> &str
{   match model
    {   "llama3-70b-8192" => "llama-3.3-70b-versatile"
      , "llama-3.1-70b-versatile" => "llama-3.3-70b-versatile"
      , "llama3-8b-8192" => "llama-3.1-8b-instant"
      , "mixtral-8x7b-32768" => "llama-3.3-70b-versatile"
      , "gemma-7b-it" => "gemma2-9b-it"
      , other => other
    }
}

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct GroqChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: usize
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqModelsResponse
{   pub data: Vec<ModelData>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelData
{   pub id: String
  , #[serde(default)]
    pub owned_by: Option<String>
}

// ===== Groq Client =====

/// Client for the Groq cloud endpoint
pub struct GroqClient
{   http_client: reqwest::Client
  , base_url: String
  , timeout: Duration
  , api_key: Option<String>
  , temperature: f32
  , max_tokens: usize
}

impl GroqClient
{   pub fn new(
      config: &crate::config::ExpanderConfig
    , api_key: Option<String>
    ) -> Self
    {   debug!("Creating GroqClient");
        GroqClient
        {   http_client: reqwest::Client::new()
          , base_url: config.groq_base_url
              .clone()
              .unwrap_or_else(|| GROQ_API_BASE.to_string())
          , timeout: Duration::from_secs(config.groq_timeout_secs)
          , api_key
          , temperature: config.temperature
          , max_tokens: config.max_tokens
        }
    }

    /// Resolve the key: per-request override, client key, then the
    /// environment. All absent means no network call is attempted.
    fn get_api_key(&self, request_key: Option<&str>)
      -> Result<String, crate::error::Error>
    {   if let Some(key) = request_key
        {   if !key.is_empty()
            {   debug!("Using per-request API key");
                return Ok(key.to_string());
            }
        }

        if let Some(key) = &self.api_key
        {   if !key.is_empty()
            {   debug!("Using client API key");
                return Ok(key.clone());
            }
        }

        if let Ok(key) = std::env::var(GROQ_KEY_ENV)
        {   if !key.is_empty()
            {   debug!("Using API key from {}", GROQ_KEY_ENV);
                return Ok(key);
            }
        }

        error!("No Groq API key available");
        Err(crate::error::Error::MissingApiKey(
          "Groq (get a free key at console.groq.com)".to_string()
        ))
    }

    /// Expand one prompt. Failures come back as marked text,
    /// never as an Err.
    pub async fn expand_prompt(
      &self
    , prompt: &str
    , system_instruction: &str
    , model: &str
    , request_key: Option<&str>
    ) -> String
    {   match self
          .handle_chat(prompt, system_instruction, model, request_key)
          .await
        {   Ok(text) => text
          , Err(e) => {
              error!("Groq expansion failed: {}", e);
              e.to_marked()
            }
        }
    }

    async fn handle_chat(
      &self
    , prompt: &str
    , system_instruction: &str
    , model: &str
    , request_key: Option<&str>
    ) -> Result<String, crate::error::Error>
    {   debug!("Handling chat completion for model: {}", model);

        let api_key = self.get_api_key(request_key)?;

        let groq_model = resolve_model_id(model);
        if groq_model != model
        {   info!(
              "Remapped deprecated model {} -> {}",
              model, groq_model
            );
        }

        let request = GroqChatRequest
        {   model: groq_model.to_string()
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: system_instruction.to_string()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: format!(
                    "{}{}", USER_MESSAGE_PREFIX, prompt
                  )
              }
            ]
          , temperature: self.temperature
          , max_tokens: self.max_tokens
        };

        trace!("Groq request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.base_url))
          .timeout(self.timeout)
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            if e.is_timeout()
            {   error!("Groq request timed out");
                crate::error::Error::Timeout("Groq".to_string())
            } else if e.is_connect()
            {   error!("Cannot reach Groq: {}", e);
                crate::error::Error::CannotConnect(
                  "Groq".to_string()
                )
            } else
            {   error!("HTTP error: {}", e);
                crate::error::Error::HttpError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("Groq response status: {}", status);

        if status.as_u16() == 401
        {   error!("Groq rejected the API key");
            return Err(crate::error::Error::InvalidApiKey(
              "Groq".to_string()
            ));
        }

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Groq API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!(
                "Groq {}: {}",
                status.as_u16(),
                crate::error::truncate_body(&error_text)
              )
            ));
        }

        let chat_response: GroqChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.choices.first()
          .map(|c| c.message.content.clone())
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }

    /// List the model ids the account can use
    pub async fn list_models(
      &self
    , request_key: Option<&str>
    ) -> Result<Vec<String>, crate::error::Error>
    {   debug!("Listing Groq models");

        let api_key = self.get_api_key(request_key)?;

        let response = self.http_client
          .get(format!("{}/models", self.base_url))
          .timeout(self.timeout)
          .header("Authorization", format!("Bearer {}", api_key))
          .send()
          .await
          .map_err(|e| {
            error!("Failed to fetch models: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Models response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Failed to list models: {}", error_text);
            return Err(crate::error::Error::ApiError(
              error_text
            ));
        }

        let models_response: GroqModelsResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        let model_ids: Vec<String>
          = models_response.data
            .iter()
            .map(|m| m.id.clone())
            .collect();

        debug!("Retrieved {} models", model_ids.len());
        Ok(model_ids)
    }
}
