//! Configuration for promptx endpoints, timeouts and sampling

use serde::{Deserialize, Serialize};

/// Expander configuration
///
/// Defaults reproduce the fixed values the hosting GUI ships with;
/// overriding the base URLs is mainly useful for pointing tests at
/// a stand-in endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpanderConfig
{   /// Ollama base URL (if not the local default)
    pub ollama_base_url: Option<String>
  , /// Groq API base URL (if custom)
    pub groq_base_url: Option<String>
  , /// Ollama request timeout in seconds
    pub ollama_timeout_secs: u64
  , /// Groq request timeout in seconds
    pub groq_timeout_secs: u64
  , /// Sampling temperature sent to both providers
    pub temperature: f32
  , /// Nucleus sampling cutoff (Ollama only)
    pub top_p: f32
  , /// Response length cap (Groq only)
    pub max_tokens: usize
}

impl Default for ExpanderConfig
{   fn default() -> Self
    {   ExpanderConfig
        {   ollama_base_url: None
          , groq_base_url: None
          , ollama_timeout_secs: 120
          , groq_timeout_secs: 30
          , temperature: 0.7
          , top_p: 0.9
          , max_tokens: 1024
        }
    }
}
