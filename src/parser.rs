//! Reply parser
//!
//! Splits the raw provider reply into a positive/negative pair using
//! the fixed marker convention. Marked error strings pass through as
//! the positive output so the host shows them in place of a prompt.

use log::debug;

/// Prefix the providers put on failure text
pub const ERROR_MARKER: &str = "ERROR:";

/// Marker opening the positive segment of a reply
pub const POSITIVE_MARKER: &str = "POSITIVE:";

/// Marker opening the negative segment of a reply
pub const NEGATIVE_MARKER: &str = "NEGATIVE:";

/// Negative prompt used when the model did not supply one
pub const DEFAULT_NEGATIVE_PROMPT: &str
  = "blurry, low quality, distorted, deformed, ugly, bad anatomy, \
     watermark, signature, text";

/// Split a provider reply into a prompt pair.
///
/// Only the first NEGATIVE: occurrence splits the reply; anything
/// after it, duplicate markers included, stays in the negative half.
pub fn parse_response(
  response: &str
, include_negative: bool
) -> crate::request::PromptPair
{   if response.starts_with(ERROR_MARKER)
    {   debug!("Passing marked error through: {}", response);
        return crate::request::PromptPair
        {   positive: response.to_string()
          , negative: String::new()
          , system_instruction: None
        };
    }

    if include_negative
    {   let positive_at = response.find(POSITIVE_MARKER);
        let negative_at = response.find(NEGATIVE_MARKER);

        if let (Some(p), Some(n)) = (positive_at, negative_at)
        {   if p < n
            {   let positive = response[..n]
                  .replacen(POSITIVE_MARKER, "", 1)
                  .trim()
                  .to_string();
                let negative = response[n + NEGATIVE_MARKER.len()..]
                  .trim()
                  .to_string();
                return crate::request::PromptPair
                {   positive
                  , negative
                  , system_instruction: None
                };
            }
        }
    }

    debug!("Markers absent or not requested; using default negative");
    crate::request::PromptPair
    {   positive: response.trim().to_string()
      , negative: DEFAULT_NEGATIVE_PROMPT.to_string()
      , system_instruction: None
    }
}
