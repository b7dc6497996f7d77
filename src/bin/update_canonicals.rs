use site_upkeep::{update_canonical_links, CanonicalConfig};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();
    let _ = dotenv::dotenv();

    let config = CanonicalConfig::from_env();
    let report = update_canonical_links(&config).await?;

    println!("\n{}", report.summary());
    Ok(())
}
