//! System instruction builder
//!
//! Pure string assembly: style/detail lookup, fixed rules block,
//! output format section. No I/O and no failure mode.

use log::debug;

/// Fixed preamble every generated instruction starts with
const PREAMBLE: &str
  = "You are an expert AI image generation prompt engineer. \
     Your task is to expand simple prompts into detailed, \
     high-quality prompts for image generation models like \
     Stable Diffusion, Midjourney, or Flux.";

/// Rules appended to every generated instruction
const RULES: &str = r#"Rules:
- Add specific details about lighting, atmosphere, composition, colors, textures
- Include quality tags appropriate for the style (e.g., "masterpiece, best quality" for anime)
- Describe clothing, environment, mood, time of day when relevant
- Use comma-separated descriptive phrases
- DO NOT add any explanations, just output the prompt(s)"#;

/// Output format section when a negative prompt is requested
const NEGATIVE_FORMAT: &str = r#"Also provide a negative prompt that lists things to avoid. Format your response EXACTLY as:
POSITIVE: [your expanded positive prompt here]
NEGATIVE: [your negative prompt here]"#;

/// Output format section when only one prompt is wanted
const PLAIN_FORMAT: &str
  = "Format your response as just the expanded prompt, nothing else.";

/// Style lookup table
pub fn style_fragment(style: &crate::Style) -> &'static str
{   match style
    {   crate::Style::Cinematic => {
          "Focus on cinematic lighting, dramatic composition, \
           film-like quality, depth of field, color grading."
        }
      , crate::Style::Anime => {
          "Focus on anime/manga aesthetics, vibrant colors, \
           expressive features, dynamic poses, cel-shading style."
        }
      , crate::Style::Photorealistic => {
          "Focus on photorealistic details, natural lighting, \
           real-world textures, authentic materials, high resolution."
        }
      , crate::Style::Artistic => {
          "Focus on artistic interpretation, creative composition, \
           painterly qualities, unique visual style."
        }
      , crate::Style::Niji => {
          "Focus on Japanese anime style, cute aesthetics, soft \
           colors, detailed backgrounds, Studio Ghibli or modern \
           anime influence."
        }
    }
}

/// Detail level lookup table
pub fn detail_fragment(level: &crate::DetailLevel) -> &'static str
{   match level
    {   crate::DetailLevel::Minimal => {
          "Keep the expanded prompt concise, around 50-80 words."
        }
      , crate::DetailLevel::Medium => {
          "Create a moderately detailed prompt, around 80-120 words."
        }
      , crate::DetailLevel::Detailed => {
          "Create a comprehensive detailed prompt, around 120-180 words."
        }
      , crate::DetailLevel::Extreme => {
          "Create an extremely detailed prompt with every possible \
           detail, around 180-250 words."
        }
    }
}

/// Assemble the system instruction for one request.
///
/// Non-empty custom text replaces the generated instruction, or is
/// appended after it when merge_with_default is set. The caller
/// picks the policy; the text itself is not validated.
pub fn build_system_instruction(
  style: &crate::Style
, detail_level: &crate::DetailLevel
, include_negative: bool
, custom_instructions: Option<&str>
, merge_with_default: bool
) -> String
{   debug!(
      "Building system instruction: {:?}/{:?} negative={}",
      style, detail_level, include_negative
    );

    let format_section = if include_negative
      { NEGATIVE_FORMAT } else { PLAIN_FORMAT };

    let generated = format!(
      "{}\n\nStyle focus: {}\n\n{}\n\n{}\n\n{}",
      PREAMBLE,
      style_fragment(style),
      detail_fragment(detail_level),
      RULES,
      format_section
    );

    match custom_instructions
    {   Some(custom) if !custom.is_empty() => {
          if merge_with_default
          {   format!(
                "{}\n\nAdditional instructions: {}",
                generated, custom
              )
          } else
          {   debug!("Custom instructions replace the generated text");
              custom.to_string()
          }
        }
      , _ => generated
    }
}
