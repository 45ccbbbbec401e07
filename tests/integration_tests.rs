/// Route log output through the test harness
fn init_logging()
{   let _ = env_logger::builder()
      .is_test(true)
      .try_init();
}

fn all_styles() -> Vec<promptx::Style>
{   vec![
      promptx::Style::Cinematic
    , promptx::Style::Anime
    , promptx::Style::Photorealistic
    , promptx::Style::Artistic
    , promptx::Style::Niji
    ]
}

fn all_detail_levels() -> Vec<promptx::DetailLevel>
{   vec![
      promptx::DetailLevel::Minimal
    , promptx::DetailLevel::Medium
    , promptx::DetailLevel::Detailed
    , promptx::DetailLevel::Extreme
    ]
}

// ===== Instruction Builder =====

#[test]
fn test_build_contains_fragments_for_all_pairs()
{   init_logging();
    for style in &all_styles()
    {   for level in &all_detail_levels()
        {   let instruction
              = promptx::instruction::build_system_instruction(
                  style, level, true, None, false
                );
            assert!(!instruction.is_empty());
            assert!(
              instruction.contains(
                promptx::instruction::style_fragment(style)
              ),
              "missing style fragment for {:?}", style
            );
            assert!(
              instruction.contains(
                promptx::instruction::detail_fragment(level)
              ),
              "missing detail fragment for {:?}", level
            );
        }
    }
}

#[test]
fn test_negative_format_only_when_requested()
{   let with_negative
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Cinematic
        , &promptx::DetailLevel::Detailed
        , true
        , None
        , false
        );
    assert!(with_negative.contains("POSITIVE:"));
    assert!(with_negative.contains("NEGATIVE:"));

    let plain
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Cinematic
        , &promptx::DetailLevel::Detailed
        , false
        , None
        , false
        );
    assert!(!plain.contains("POSITIVE:"));
    assert!(!plain.contains("NEGATIVE:"));
    assert!(plain.contains("just the expanded prompt"));
}

#[test]
fn test_custom_instructions_replace_generated_text()
{   let custom = "Only output tags understood by SDXL.";
    let instruction
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Anime
        , &promptx::DetailLevel::Medium
        , true
        , Some(custom)
        , false
        );
    assert_eq!(instruction, custom);
}

#[test]
fn test_custom_instructions_merge_after_generated_text()
{   let custom = "Always mention golden hour light.";
    let generated
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Cinematic
        , &promptx::DetailLevel::Detailed
        , true
        , None
        , true
        );
    let merged
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Cinematic
        , &promptx::DetailLevel::Detailed
        , true
        , Some(custom)
        , true
        );
    assert!(merged.contains(&generated));
    assert!(merged.contains(custom));
    assert!(merged.len() > generated.len());
}

#[test]
fn test_empty_custom_instructions_are_ignored()
{   let generated
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Niji
        , &promptx::DetailLevel::Extreme
        , false
        , None
        , true
        );
    let with_empty
      = promptx::instruction::build_system_instruction(
          &promptx::Style::Niji
        , &promptx::DetailLevel::Extreme
        , false
        , Some("")
        , true
        );
    assert_eq!(generated, with_empty);
}

#[test]
fn test_unknown_names_fall_back_to_defaults()
{   assert_eq!(
      promptx::Style::from_name("anime"),
      promptx::Style::Anime
    );
    assert_eq!(
      promptx::Style::from_name("vaporwave"),
      promptx::Style::Cinematic
    );
    assert_eq!(
      promptx::DetailLevel::from_name("extreme"),
      promptx::DetailLevel::Extreme
    );
    assert_eq!(
      promptx::DetailLevel::from_name(""),
      promptx::DetailLevel::Detailed
    );
    assert_eq!(
      promptx::Provider::from_name("ollama"),
      promptx::Provider::Ollama
    );
    assert_eq!(
      promptx::Provider::from_name("something else"),
      promptx::Provider::Groq
    );
}

// ===== Response Parser =====

#[test]
fn test_parse_splits_positive_and_negative()
{   let pair = promptx::parser::parse_response(
      "POSITIVE: a cat\nNEGATIVE: blurry",
      true
    );
    assert_eq!(pair.positive, "a cat");
    assert_eq!(pair.negative, "blurry");
}

#[test]
fn test_parse_falls_back_to_default_negative()
{   let pair = promptx::parser::parse_response(
      "just some text",
      true
    );
    assert_eq!(pair.positive, "just some text");
    assert_eq!(
      pair.negative,
      promptx::parser::DEFAULT_NEGATIVE_PROMPT
    );
}

#[test]
fn test_parse_passes_marked_errors_through()
{   let pair = promptx::parser::parse_response(
      "ERROR: timeout",
      true
    );
    assert_eq!(pair.positive, "ERROR: timeout");
    assert_eq!(pair.negative, "");
}

#[test]
fn test_parse_ignores_markers_when_negative_not_requested()
{   let pair = promptx::parser::parse_response(
      "POSITIVE: a cat\nNEGATIVE: blurry",
      false
    );
    assert_eq!(pair.positive, "POSITIVE: a cat\nNEGATIVE: blurry");
    assert_eq!(
      pair.negative,
      promptx::parser::DEFAULT_NEGATIVE_PROMPT
    );
}

#[test]
fn test_parse_requires_markers_in_order()
{   let pair = promptx::parser::parse_response(
      "NEGATIVE: blurry\nPOSITIVE: a cat",
      true
    );
    assert_eq!(pair.positive, "NEGATIVE: blurry\nPOSITIVE: a cat");
    assert_eq!(
      pair.negative,
      promptx::parser::DEFAULT_NEGATIVE_PROMPT
    );
}

#[test]
fn test_parse_splits_at_first_negative_marker()
{   let pair = promptx::parser::parse_response(
      "POSITIVE: a cat\nNEGATIVE: blurry\nNEGATIVE: grainy",
      true
    );
    assert_eq!(pair.positive, "a cat");
    assert_eq!(pair.negative, "blurry\nNEGATIVE: grainy");
}

#[test]
fn test_parse_trims_surrounding_whitespace()
{   let pair = promptx::parser::parse_response(
      "  POSITIVE:   a dog\n NEGATIVE:   grainy  ",
      true
    );
    assert_eq!(pair.positive, "a dog");
    assert_eq!(pair.negative, "grainy");
}

// ===== Wire Decoding =====

#[test]
fn test_groq_reply_decodes_first_choice()
{   let raw = r#"{
      "choices": [
        { "message": { "role": "assistant", "content": "a cat, cinematic" }
        , "finish_reason": "stop"
        }
      ]
    }"#;
    let decoded: promptx::providers::groq::GroqChatResponse
      = serde_json::from_str(raw).unwrap();
    assert_eq!(
      decoded.choices[0].message.content,
      "a cat, cinematic"
    );
}

#[test]
fn test_ollama_reply_missing_field_decodes_empty()
{   let raw = r#"{ "model": "llama3.2", "done": true }"#;
    let decoded: promptx::providers::ollama::OllamaGenerateResponse
      = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded.response, "");
}

// ===== Model Remap =====

#[test]
fn test_deprecated_model_ids_are_remapped()
{   assert_eq!(
      promptx::providers::groq::resolve_model_id("llama3-70b-8192"),
      "llama-3.3-70b-versatile"
    );
    assert_eq!(
      promptx::providers::groq::resolve_model_id("llama3-8b-8192"),
      "llama-3.1-8b-instant"
    );
    assert_eq!(
      promptx::providers::groq::resolve_model_id("mixtral-8x7b-32768"),
      "llama-3.3-70b-versatile"
    );
    assert_eq!(
      promptx::providers::groq::resolve_model_id("gemma-7b-it"),
      "gemma2-9b-it"
    );
}

#[test]
fn test_current_model_ids_pass_through()
{   assert_eq!(
      promptx::providers::groq::resolve_model_id(
        "llama-3.3-70b-versatile"
      ),
      "llama-3.3-70b-versatile"
    );
    assert_eq!(
      promptx::providers::groq::resolve_model_id("gemma2-9b-it"),
      "gemma2-9b-it"
    );
}

#[test]
fn test_catalog_contains_default_model()
{   assert!(
      promptx::providers::groq::GROQ_MODELS
        .contains(&promptx::providers::groq::DEFAULT_GROQ_MODEL)
    );
}

// ===== Request Defaults =====

#[test]
fn test_request_defaults_match_the_gui()
{   let request = promptx::request::GenerationRequest::new(
      "a cat".to_string()
    );
    assert_eq!(request.provider, promptx::Provider::Groq);
    assert_eq!(
      request.model,
      promptx::providers::groq::DEFAULT_GROQ_MODEL
    );
    assert_eq!(request.style, promptx::Style::Cinematic);
    assert_eq!(
      request.detail_level,
      promptx::DetailLevel::Detailed
    );
    assert!(request.include_negative);

    let simple = promptx::request::GenerationRequest::simple(
      "a cat".to_string()
    );
    assert_eq!(simple.provider, promptx::Provider::Ollama);
    assert_eq!(
      simple.model,
      promptx::providers::ollama::DEFAULT_OLLAMA_MODEL
    );
    assert!(!simple.include_negative);
}

// ===== Groq Client =====

#[tokio::test]
async fn test_missing_api_key_short_circuits()
{   init_logging();
    std::env::remove_var(promptx::providers::groq::GROQ_KEY_ENV);

    let config = promptx::config::ExpanderConfig::default();
    let client = promptx::providers::groq::GroqClient::new(
      &config,
      None
    );

    let reply = client
      .expand_prompt(
        "a cat",
        "expand prompts",
        "llama-3.3-70b-versatile",
        None
      )
      .await;
    assert!(reply.starts_with("ERROR:"));
    assert!(reply.contains("API key"));

    // An empty override is the same as no override
    let reply = client
      .expand_prompt(
        "a cat",
        "expand prompts",
        "llama-3.3-70b-versatile",
        Some("")
      )
      .await;
    assert!(reply.starts_with("ERROR:"));
    assert!(reply.contains("API key"));
}

// ===== PromptExpander =====

#[tokio::test]
async fn test_expand_surfaces_connection_error_as_text()
{   init_logging();
    let mut config = promptx::config::ExpanderConfig::default();
    config.ollama_base_url
      = Some("http://127.0.0.1:9".to_string());
    let expander = promptx::client::PromptExpander::with_config(
      config,
      None
    );

    let mut request = promptx::request::GenerationRequest::new(
      "a cat".to_string()
    );
    request.provider = promptx::Provider::Ollama;
    request.model
      = promptx::providers::ollama::DEFAULT_OLLAMA_MODEL
          .to_string();

    let pair = expander.expand(&request).await;
    assert!(pair.positive.starts_with("ERROR:"));
    assert!(pair.negative.is_empty());

    let instruction = pair.system_instruction.unwrap();
    assert!(instruction.contains(
      promptx::instruction::style_fragment(&request.style)
    ));
}

#[tokio::test]
async fn test_expand_simple_falls_back_offline()
{   init_logging();
    let mut config = promptx::config::ExpanderConfig::default();
    config.ollama_base_url
      = Some("http://127.0.0.1:9".to_string());
    let expander = promptx::client::PromptExpander::with_config(
      config,
      None
    );

    let result = expander
      .expand_simple("a girl walking in rain")
      .await;
    assert_eq!(
      result,
      "a girl walking in rain, detailed, high quality, masterpiece"
    );
}

#[test]
fn test_groq_error_path_from_blocking_context()
{   init_logging();
    let pair = tokio_test::block_on(async {
      let mut config = promptx::config::ExpanderConfig::default();
      config.groq_base_url
        = Some("http://127.0.0.1:9".to_string());
      let expander = promptx::client::PromptExpander::with_config(
        config,
        Some("test-key".to_string())
      );
      let request = promptx::request::GenerationRequest::new(
        "a cat".to_string()
      );
      expander.expand(&request).await
    });
    assert!(pair.positive.starts_with("ERROR:"));
    assert!(pair.negative.is_empty());
}

// ===== Live Endpoint Tests =====

#[tokio::test]
#[ignore]
async fn test_ollama_expand_live()
{   init_logging();
    let expander = promptx::client::PromptExpander::new(None);

    let mut request = promptx::request::GenerationRequest::new(
      "a girl walking in rain".to_string()
    );
    request.provider = promptx::Provider::Ollama;
    request.model
      = promptx::providers::ollama::DEFAULT_OLLAMA_MODEL
          .to_string();

    let pair = expander.expand(&request).await;
    if pair.positive.starts_with("ERROR:")
    {   println!("Skipping: {}", pair.positive);
        return;
    }
    println!("Positive: {}", pair.positive);
    println!("Negative: {}", pair.negative);
    assert!(!pair.positive.is_empty());
    assert!(!pair.negative.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_groq_expand_live()
{   init_logging();
    let api_key
      = std::env::var(promptx::providers::groq::GROQ_KEY_ENV).ok();
    if api_key.is_none()
    {   println!(
          "Skipping: {} not set",
          promptx::providers::groq::GROQ_KEY_ENV
        );
        return;
    }

    let expander = promptx::client::PromptExpander::new(api_key);
    let request = promptx::request::GenerationRequest::new(
      "boy, blonde, driving a car in San Francisco".to_string()
    );

    let pair = expander.expand(&request).await;
    println!("Positive: {}", pair.positive);
    println!("Negative: {}", pair.negative);
    assert!(!pair.positive.starts_with("ERROR:"));
    assert!(!pair.positive.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_ollama_list_models_live()
{   init_logging();
    let config = promptx::config::ExpanderConfig::default();
    let client = promptx::providers::ollama::OllamaClient::new(
      &config
    );

    match client.list_models().await
    {   Ok(models) => {
          println!("Local models:");
          for model in models
          {   println!("  - {}", model);
          }
        }
      , Err(e) => {
          println!("Failed to list local models: {}", e);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_groq_list_models_live()
{   init_logging();
    let api_key
      = std::env::var(promptx::providers::groq::GROQ_KEY_ENV).ok();
    if api_key.is_none()
    {   println!(
          "Skipping: {} not set",
          promptx::providers::groq::GROQ_KEY_ENV
        );
        return;
    }

    let config = promptx::config::ExpanderConfig::default();
    let client = promptx::providers::groq::GroqClient::new(
      &config,
      api_key
    );

    match client.list_models(None).await
    {   Ok(models) => {
          println!("Available Groq models:");
          for model in &models
          {   println!("  - {}", model);
          }
          assert!(!models.is_empty());
        }
      , Err(e) => {
          println!("Failed to list models: {}", e);
        }
    }
}
