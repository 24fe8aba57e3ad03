use std::env;
use std::path::Path;

use anyhow::Context;
use slidecraft::formatter::format_slide;
use slidecraft::store::FileStore;
use slidecraft::viewer::Playback;
use slidecraft::{import_file, PresentationLibrary, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example import_document -- <FILE> [TITLE]");
        eprintln!("Supported: .json, .md, .markdown, .html, .htm, .txt");
        return Ok(());
    }
    let path = Path::new(&args[1]);
    let title = args.get(2).map(String::as_str);

    let presentation = import_file(path, title)
        .await
        .with_context(|| format!("Failed to import {}", path.display()))?;

    let mut playback = Playback::new(&presentation)?;
    loop {
        let slide = playback.current();
        let preview = format_slide(&slide.title, &slide.content);
        println!("[{}] {}", playback.position_label(), preview.title);
        for line in preview.content.lines().take(3) {
            println!("    {}", line);
        }
        if !playback.next() {
            break;
        }
    }

    let settings = Settings::from_env();
    let library = PresentationLibrary::new(
        FileStore::open(&settings.store_path)
            .with_context(|| format!("Failed to open {}", settings.store_path.display()))?,
    );
    let saved = library.add(presentation)?;
    log::info!(
        "Stored '{}' ({} presentations in {})",
        saved.title,
        library.list()?.len(),
        settings.store_path.display()
    );
    Ok(())
}
