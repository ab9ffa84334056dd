//! Diagnostic binary for checking the inference endpoint
//! This is a utility binary, not part of the main application

use std::time::Instant;
use wellness_guide_backend::provider::InferenceClient;
use wellness_guide_backend::{Config, ProviderError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    println!("Probing inference endpoint...\n");

    // Test 1: Show the endpoint being used
    println!("1. Endpoint: {}", config.provider.endpoint_url);
    println!("   Timeout: {:?}", config.provider.timeout);

    // Test 2: Check if API key is available
    println!("\n2. Checking for HF_API_KEY environment variable...");
    let Some(api_key) = config.initial_credential.clone() else {
        eprintln!("   ✗ HF_API_KEY not found in environment");
        eprintln!("   Make sure to export it: export HF_API_KEY=\"your-key\"");
        return Err("HF_API_KEY not set".into());
    };
    println!("   ✓ HF_API_KEY is set (length: {} chars)", api_key.len());

    // Test 3: Send a single prompt
    let prompt = "How can I manage stress better?";
    println!("\n3. Sending test prompt...");
    println!("   Prompt: '{}'", prompt);

    let client = InferenceClient::new(config.provider);
    let started = Instant::now();
    match client.generate(&api_key, prompt).await {
        Ok(text) => {
            println!("   ✓ Response received in {:?}:", started.elapsed());
            println!("   {}", text.trim());
        }
        Err(e @ ProviderError::Status { .. }) => {
            eprintln!("   ✗ {}", e);
            eprintln!("\n   Troubleshooting:");
            eprintln!("   - Check that the key is valid and has inference access");
            eprintln!("   - Some models return 503 while loading; try again shortly");
        }
        Err(e) => {
            eprintln!("   ✗ {}", e);
        }
    }

    println!("\n✓ Probe completed!");
    Ok(())
}
