use log::{debug, info};

/// Prompt expander: builds the system instruction, calls one
/// provider, parses the reply.
///
/// Holds only configuration and HTTP handles; every call is one
/// shot and nothing carries over to the next one.
pub struct PromptExpander
{   ollama: crate::providers::ollama::OllamaClient
  , groq: crate::providers::groq::GroqClient
}

impl PromptExpander
{   /// Expander with the default endpoints and timeouts
    pub fn new(groq_api_key: Option<String>) -> Self
    {   PromptExpander::with_config(
          crate::config::ExpanderConfig::default(),
          groq_api_key
        )
    }

    /// Expander with custom endpoints, timeouts or sampling
    pub fn with_config(
      config: crate::config::ExpanderConfig
    , groq_api_key: Option<String>
    ) -> Self
    {   debug!("Creating PromptExpander");
        let ollama
          = crate::providers::ollama::OllamaClient::new(&config);
        let groq
          = crate::providers::groq::GroqClient::new(
              &config,
              groq_api_key
            );
        PromptExpander
        {   ollama
          , groq
        }
    }

    /// Expand one request into a positive/negative prompt pair.
    ///
    /// Provider failures surface as marked text in the positive
    /// field with an empty negative, never as a panic or an Err.
    pub async fn expand(
      &self
    , request: &crate::request::GenerationRequest
    ) -> crate::request::PromptPair
    {   debug!(
          "Expanding via {:?} with model: {}",
          request.provider, request.model
        );

        let system_instruction
          = crate::instruction::build_system_instruction(
              &request.style
            , &request.detail_level
            , request.include_negative
            , request.custom_instructions.as_deref()
            , request.merge_custom_instructions
            );

        let reply = match request.provider
        {   crate::Provider::Ollama => {
              self.ollama
                .expand_prompt(
                  &request.simple_prompt,
                  &system_instruction,
                  &request.model
                )
                .await
            }
          , crate::Provider::Groq => {
              self.groq
                .expand_prompt(
                  &request.simple_prompt,
                  &system_instruction,
                  &request.model,
                  request.api_key.as_deref()
                )
                .await
            }
        };

        let mut pair = crate::parser::parse_response(
          &reply,
          request.include_negative
        );
        pair.system_instruction = Some(system_instruction);
        pair
    }

    /// Reduced-option entry point: local model, single output.
    ///
    /// When the local endpoint is unavailable the input comes back
    /// with generic quality tags instead of an error.
    pub async fn expand_simple(
      &self
    , simple_prompt: &str
    ) -> String
    {   debug!("Simple expansion");
        let request = crate::request::GenerationRequest::simple(
          simple_prompt.to_string()
        );
        let pair = self.expand(&request).await;

        if pair.positive.starts_with(crate::parser::ERROR_MARKER)
        {   info!("Local expansion unavailable; using fallback");
            return format!(
              "{}, detailed, high quality, masterpiece",
              simple_prompt.trim()
            );
        }
        pair.positive
    }
}
