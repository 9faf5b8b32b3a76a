//! PromoReel demo binary.
//!
//! Runs one generation sequence end to end: select a theme, generate a
//! script (or substitute the fixed ad), drive the video pipeline, and write
//! the materialized asset to disk.
//!
//! Configuration via environment:
//! - `GEMINI_API_KEY` (required)
//! - `THEME` (default `safety`)
//! - `SCRIPT_MODE` (`auto` or `fixed`, default `auto`)
//! - `OUTPUT` (default `promoreel.mp4`)

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use promoreel_content::{ContentConfig, SnippetStore};
use promoreel_models::{GenerationStatus, ThemeId};
use promoreel_pipeline::{Coordinator, ScriptMode};
use promoreel_script::{ScriptConfig, ScriptGenerator};
use promoreel_veo::{VeoConfig, VideoGenerator};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Colored output for dev, JSON opt-in for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("promoreel=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(true).with_target(true))
            .with(env_filter)
            .init();
    }

    info!("Starting promoreel");

    let script_config = match ScriptConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let veo_config = match VeoConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let theme = ThemeId::new(std::env::var("THEME").unwrap_or_else(|_| "safety".to_string()));
    let mode = match std::env::var("SCRIPT_MODE").as_deref() {
        Ok("fixed") => ScriptMode::FixedAd,
        _ => ScriptMode::Auto,
    };
    let output = std::env::var("OUTPUT").unwrap_or_else(|_| "promoreel.mp4".to_string());

    let mut coordinator = Coordinator::new(
        SnippetStore::new(ContentConfig::from_env()),
        ScriptGenerator::new(script_config),
        VideoGenerator::new(veo_config),
    );

    coordinator.select_theme(theme).await;
    info!(
        theme = %coordinator.theme(),
        snippets = coordinator.snippets().len(),
        "theme ready"
    );

    coordinator.generate(mode).await;

    match coordinator.status() {
        GenerationStatus::Completed => {
            let asset = coordinator
                .asset()
                .expect("completed status implies an asset");
            if let Err(e) = asset.save(&output) {
                error!("Failed to write {output}: {e}");
                std::process::exit(1);
            }
            info!(
                output = %output,
                size = asset.size(),
                mime = %asset.mime_type,
                "video written"
            );
        }
        status => {
            error!(
                status = %status,
                "generation did not complete: {}",
                coordinator.error_message().unwrap_or("no error message")
            );
            std::process::exit(1);
        }
    }
}
