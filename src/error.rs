use std::fmt;

/// Custom error type for promptx operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing for a provider
    MissingApiKey(String)
  , /// Provider rejected the API key
    InvalidApiKey(String)
  , /// Endpoint could not be reached
    CannotConnect(String)
  , /// Request hit the client-side timeout
    Timeout(String)
  , /// API returned a non-success status
    ApiError(String)
  , /// HTTP transport error
    HttpError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Generic error
    Other(String)
}

impl Error
{   /// Render as the marked string surfaced in place of a prompt.
    /// Everything the providers catch leaves through here; nothing
    /// is raised past the provider boundary.
    pub fn to_marked(&self) -> String
    {   format!("{} {}", crate::parser::ERROR_MARKER, self)
    }
}

/// Cap an HTTP error body before it rides along in an error message
pub fn truncate_body(body: &str) -> String
{   const MAX_BODY_CHARS: usize = 200;
    if body.chars().count() <= MAX_BODY_CHARS
    {   body.to_string()
    } else
    {   let head: String = body
          .chars()
          .take(MAX_BODY_CHARS)
          .collect();
        format!("{}...", head)
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(provider) => {
              write!(f, "Missing API key for {}", provider)
            }
          , Error::InvalidApiKey(provider) => {
              write!(f, "Invalid {} API key", provider)
            }
          , Error::CannotConnect(endpoint) => {
              write!(f, "Cannot connect to {}", endpoint)
            }
          , Error::Timeout(endpoint) => {
              write!(f, "Request to {} timed out", endpoint)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
