//! Generate Static Practice Pages
//!
//! Renders the home page, the 404 page and one page per practice area slug,
//! then writes them under OUTPUT_DIR (default: dist).
//! Run with: cargo run --bin generate_static_pages

use practice_catalog::static_gen::{generate_pages, write_pages};
use practice_catalog::{PracticePresenter, PracticeRegistry, SiteConfig};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "practice_catalog=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    let start = Instant::now();

    let registry = Arc::new(PracticeRegistry::builtin()?);
    let presenter = PracticePresenter::new(registry, &config);

    let pages = generate_pages(&presenter)?;
    write_pages(&config.output_dir, &pages)?;

    tracing::info!(
        "Wrote {} pages to {} in {:?}",
        pages.len(),
        config.output_dir.display(),
        start.elapsed()
    );

    Ok(())
}
