/// Farewell tour: walks through the main generation options.
///
/// Basic use, names and places, emoji stripping, timezones, repeated draws
/// and a toy translator that fails for one language.
///
/// Run with: cargo run --example farewell_tour

use farewell_engine::{generate, generate_async, GenerationOptions};
use std::time::Duration;

async fn pirate_translator(language: String, message: String) -> anyhow::Result<String> {
    match language.as_str() {
        "en-US" => Ok(message.replace("Goodbye", "So long")),
        "xx-XX" => anyhow::bail!("no phrasebook for {}", language),
        _ => Ok(format!("Arr! {}", message)),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("========================================");
    println!("   FAREWELL TOUR");
    println!("========================================");
    println!();

    // --- Defaults ---
    println!("Defaults:        {}", generate(&GenerationOptions::default()));

    // --- Name and location ---
    let named = GenerationOptions::new().with_name("Alice");
    println!("Named:           {}", generate(&named));

    let placed = GenerationOptions::new()
        .with_name("Bob")
        .with_location("Manchester");
    println!("Placed:          {}", generate(&placed));

    // --- Emoji ---
    let plain = GenerationOptions::new().with_name("Carol").strip_emojis(true);
    println!("Plain:           {}", generate(&plain));

    // --- Timezones ---
    for zone in ["Europe/London", "Asia/Tokyo", "America/New_York", "Not/AZone"] {
        let options = GenerationOptions::new()
            .with_name("Dana")
            .with_location(zone)
            .with_timezone(zone);
        println!("{:<16} {}", format!("{}:", zone), generate(&options));
    }

    // --- Several draws ---
    println!();
    println!("Five draws for Erin:");
    let erin = GenerationOptions::new().with_name("Erin").with_location("Bristol");
    for i in 1..=5 {
        println!("  {}. {}", i, generate(&erin));
    }

    // --- Translation ---
    println!();
    println!("Translated:");
    for language in ["en-GB", "en-US", "fr-FR", "xx-XX"] {
        let options = GenerationOptions::new()
            .with_name("Frankie")
            .with_language(language)
            .with_translation_timeout(Duration::from_millis(250))
            .with_translator(pirate_translator);
        println!("  {}: {}", language, generate_async(&options).await);
    }

    println!();
    println!("========================================");
}
