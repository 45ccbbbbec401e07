//! LLM provider implementations

pub mod ollama;
pub mod groq;

// Re-export for convenience
pub use ollama::OllamaClient;
pub use groq::GroqClient;
