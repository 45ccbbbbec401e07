//! Unified request and response types for promptx

use serde::{Deserialize, Serialize};

/// One prompt expansion request
/// Built once per call; nothing in it survives the call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// The short prompt to expand
    pub simple_prompt: String
  , /// Provider to use
    pub provider: crate::Provider
  , /// Model name
    pub model: String
  , /// Visual style the expansion should lean into
    pub style: crate::Style
  , /// How long the expanded prompt should be
    pub detail_level: crate::DetailLevel
  , /// Ask the model for a POSITIVE:/NEGATIVE: pair
    pub include_negative: bool
  , /// Caller-supplied instruction text
    pub custom_instructions: Option<String>
  , /// Append custom text after the generated instruction
    /// instead of replacing it
    pub merge_custom_instructions: bool
  , /// Groq API key; falls back to the GROQ_API_KEY variable
    pub api_key: Option<String>
}

impl GenerationRequest
{   /// Request with the GUI defaults: Groq, negative pair on
    pub fn new(simple_prompt: String) -> Self
    {   GenerationRequest
        {   simple_prompt
          , provider: crate::Provider::Groq
          , model: crate::providers::groq::DEFAULT_GROQ_MODEL
              .to_string()
          , style: crate::Style::Cinematic
          , detail_level: crate::DetailLevel::Detailed
          , include_negative: true
          , custom_instructions: None
          , merge_custom_instructions: true
          , api_key: None
        }
    }

    /// Reduced-option request: local Ollama, single output string
    pub fn simple(simple_prompt: String) -> Self
    {   GenerationRequest
        {   simple_prompt
          , provider: crate::Provider::Ollama
          , model: crate::providers::ollama::DEFAULT_OLLAMA_MODEL
              .to_string()
          , style: crate::Style::Cinematic
          , detail_level: crate::DetailLevel::Detailed
          , include_negative: false
          , custom_instructions: None
          , merge_custom_instructions: true
          , api_key: None
        }
    }
}

/// Terminal output of one expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptPair
{   /// Expanded positive prompt, or the marked error text
    pub positive: String
  , /// Negative prompt; empty when the reply was an error
    pub negative: String
  , /// The system instruction that produced this pair
    pub system_instruction: Option<String>
}
