use std::env;
use std::path::PathBuf;

use anyhow::Context;
use slidecraft::converters::export::save_export;
use slidecraft::models::template::template_by_id;
use slidecraft::outline::{generate_outline, validate_outline_request};
use slidecraft::{export_presentation, ExportFormat, Presentation, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info) // Set default level
        .parse_default_env() // Allow RUST_LOG override
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example export_deck -- <TOPIC> [SLIDE_COUNT] [OUT_DIR]");
        return Ok(());
    }
    let topic = &args[1];
    let slide_count: usize = match args.get(2) {
        Some(raw) => raw.parse().context("SLIDE_COUNT must be a number")?,
        None => 5,
    };
    let out_dir = args.get(3).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let settings = Settings::from_env();
    validate_outline_request(topic, slide_count)?;

    // Start from the blank template and replace its slide with a generated outline
    let template = template_by_id("blank").context("blank template is missing")?;
    let mut presentation = Presentation::from_template(template, topic)?;
    presentation.slides.clear();
    presentation.append_slides(generate_outline(topic, slide_count));
    log::info!(
        "Built '{}' with {} slides",
        presentation.title,
        presentation.slides.len()
    );

    for format in ExportFormat::ALL {
        let file = export_presentation(&presentation, format, &settings.export)
            .with_context(|| format!("Failed to render {:?}", format))?;
        let path = save_export(&file, &out_dir)
            .await
            .with_context(|| format!("Failed to save {}", file.file_name))?;
        log::info!("{:?} -> {}", format, path.display());
    }
    Ok(())
}
