use anyhow::Result;
use colored::Colorize;

use collector::link_image_collector::LinkImageCollector;
use collector::progress::ConsoleProgress;
use fetcher::Fetcher;
use utilities::http_client::build_client;
use utilities::links_reader::read_links;
use utilities::output::render_links;

mod collector;
mod config;
mod extractors;
mod fetcher;
mod utilities;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration settings
    let config = match config::configuration::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    // Read the URL list before any request goes out
    let links = read_links(&config.file.links).await?;

    let client = build_client(&config.http)?;
    let fetcher = Fetcher::from_config(&config, client)?;

    let collector = LinkImageCollector::new(fetcher)
        .with_policy(config.fetch.on_error)
        .with_progress(ConsoleProgress::new(config.progress.enabled));

    let collection = match collector.collect(links.as_slice()).await {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!(
                "{}",
                format!(
                    "Aborting on {}: {} ({} image(s) collected before the failure are not printed)",
                    e.url,
                    e.source,
                    e.partial.len()
                )
                .red()
            );
            return Err(e.into());
        }
    };

    for failure in &collection.failures {
        eprintln!("{}", format!("Skipped {}: {}", failure.url, failure.error).yellow());
    }

    // Only the results go to stdout
    print!("{}", render_links(&collection.images));

    Ok(())
}
