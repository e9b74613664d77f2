use anyhow::Result;
use giscraper::{pipeline, Config, Outcome};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    // ─── 2) scrape ───────────────────────────────────────────────────
    let cfg = Config::default();
    match pipeline::run(&cfg).await {
        Ok(Outcome::Saved { path, count }) => {
            info!(count, path = %path.display(), "done");
            Ok(())
        }
        Ok(Outcome::NoValidEntries) => Ok(()),
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
