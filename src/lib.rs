pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod instruction;
pub mod parser;
pub mod client;
use serde::{Deserialize, Serialize};

/*

im making a small async rust library called promptx; it takes the
short prompt a user types into a node based image generation ui,
ships it to a free llm endpoint (local ollama or groq cloud) together
with a generated system instruction, and splits the reply back into a
positive / negative prompt pair for the sampler. one shot per call,
nothing is kept between calls, and a dead endpoint never panics the
host - it just becomes text the user can read in place of a prompt.

promptx/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports, core enums and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Endpoint, timeout and sampling configuration
│   ├── client.rs       # PromptExpander: build -> call -> parse
│   ├── providers/      # Provider-specific implementations
│   │   ├── mod.rs      # Re-exports all providers
│   │   ├── ollama.rs   # Local Ollama /api/generate client
│   │   └── groq.rs     # Groq OpenAI-compatible chat client
│   ├── request.rs      # Unified request/response types
│   ├── instruction.rs  # System instruction builder (pure)
│   └── parser.rs       # Reply parser (pure)
└── tests/              # Integration and unit tests

*/

/// PROMPTX STRUCTURES:

/// Enum representing the supported expansion providers.
/// Each variant corresponds to one HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Provider
{   /// Local Ollama instance (on-device, no key needed)
    Ollama
  , /// Groq cloud (OpenAI-compatible, free tier available)
    Groq
}

impl Provider
{   /// Map a GUI dropdown string to a provider.
    /// Unknown names fall back to Groq, the GUI default.
    pub fn from_name(name: &str) -> Self
    {   match name
        {   "ollama" => Provider::Ollama
          , "groq" => Provider::Groq
          , _ => Provider::Groq
        }
    }
}

/// Visual style the expanded prompt should lean into
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Style
{   Cinematic
  , Anime
  , Photorealistic
  , Artistic
  , Niji
}

impl Style
{   /// Map a GUI dropdown string to a style.
    /// Unknown names fall back to Cinematic.
    pub fn from_name(name: &str) -> Self
    {   match name
        {   "cinematic" => Style::Cinematic
          , "anime" => Style::Anime
          , "photorealistic" => Style::Photorealistic
          , "artistic" => Style::Artistic
          , "niji" => Style::Niji
          , _ => Style::Cinematic
        }
    }
}

/// How long and dense the expanded prompt should be
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum DetailLevel
{   Minimal
  , Medium
  , Detailed
  , Extreme
}

impl DetailLevel
{   /// Map a GUI dropdown string to a detail level.
    /// Unknown names fall back to Detailed.
    pub fn from_name(name: &str) -> Self
    {   match name
        {   "minimal" => DetailLevel::Minimal
          , "medium" => DetailLevel::Medium
          , "detailed" => DetailLevel::Detailed
          , "extreme" => DetailLevel::Extreme
          , _ => DetailLevel::Detailed
        }
    }
}
