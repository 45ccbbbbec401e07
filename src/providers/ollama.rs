use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::time::Duration;

const OLLAMA_API_BASE: &str
  = "http://localhost:11434";

/// Model the reduced-option entry point targets
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct OllamaGenerateRequest
{   pub model: String
  , pub prompt: String
  , pub system: String
  , pub stream: bool
  , pub options: OllamaOptions
}

#[derive(Debug, Clone, Serialize)]
pub struct OllamaOptions
{   pub temperature: f32
  , pub top_p: f32
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaGenerateResponse
{   /// Generated text; an absent field decodes as empty text
    #[serde(default)]
    pub response: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaTagsResponse
{   pub models: Vec<OllamaModelTag>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaModelTag
{   pub name: String
}

// ===== Ollama Client =====

/// Client for a local Ollama instance
pub struct OllamaClient
{   http_client: reqwest::Client
  , base_url: String
  , timeout: Duration
  , temperature: f32
  , top_p: f32
}

impl OllamaClient
{   pub fn new(config: &crate::config::ExpanderConfig) -> Self
    {   debug!("Creating OllamaClient");
        OllamaClient
        {   http_client: reqwest::Client::new()
          , base_url: config.ollama_base_url
              .clone()
              .unwrap_or_else(|| OLLAMA_API_BASE.to_string())
          , timeout: Duration::from_secs(config.ollama_timeout_secs)
          , temperature: config.temperature
          , top_p: config.top_p
        }
    }

    /// Expand one prompt. Failures come back as marked text,
    /// never as an Err.
    pub async fn expand_prompt(
      &self
    , prompt: &str
    , system_instruction: &str
    , model: &str
    ) -> String
    {   match self
          .handle_generate(prompt, system_instruction, model)
          .await
        {   Ok(text) => text
          , Err(e) => {
              error!("Ollama expansion failed: {}", e);
              e.to_marked()
            }
        }
    }

    async fn handle_generate(
      &self
    , prompt: &str
    , system_instruction: &str
    , model: &str
    ) -> Result<String, crate::error::Error>
    {   debug!("Handling generate for model: {}", model);

        let request = OllamaGenerateRequest
        {   model: model.to_string()
          , prompt: prompt.to_string()
          , system: system_instruction.to_string()
          , stream: false
          , options: OllamaOptions
            {   temperature: self.temperature
              , top_p: self.top_p
            }
        };

        trace!("Ollama request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/api/generate", self.base_url))
          .timeout(self.timeout)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            if e.is_timeout()
            {   error!("Ollama request timed out");
                crate::error::Error::Timeout("Ollama".to_string())
            } else if e.is_connect()
            {   error!("Cannot reach Ollama: {}", e);
                crate::error::Error::CannotConnect(
                  "Ollama. Make sure Ollama is running (ollama serve)"
                    .to_string()
                )
            } else
            {   error!("HTTP error: {}", e);
                crate::error::Error::HttpError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("Ollama response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Ollama API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!(
                "Ollama {}: {}",
                status.as_u16(),
                crate::error::truncate_body(&error_text)
              )
            ));
        }

        let generate_response: OllamaGenerateResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        Ok(generate_response.response)
    }

    /// List the models the local instance has pulled
    pub async fn list_models(
      &self
    ) -> Result<Vec<String>, crate::error::Error>
    {   debug!("Listing local Ollama models");

        let response = self.http_client
          .get(format!("{}/api/tags", self.base_url))
          .timeout(self.timeout)
          .send()
          .await
          .map_err(|e| {
            error!("Failed to fetch local models: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Tags response status: {}", status);

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

        let tags_response: OllamaTagsResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        let model_names: Vec<String>
          = tags_response.models
            .iter()
            .map(|m| m.name.clone())
            .collect();

        debug!("Retrieved {} local models", model_names.len());
        Ok(model_names)
    }
}
