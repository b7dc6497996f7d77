use site_upkeep::{update_timestamps, TimestampConfig};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();
    let _ = dotenv::dotenv();

    let config = TimestampConfig::from_env();
    update_timestamps(&config).await?;

    Ok(())
}
