/// urlcat Fetcher - Main Entry Point
///
/// Opens one output file, streams two URLs into it back to back, and exits.
/// Strictly sequential: the second fetch starts only after the first has
/// fully completed, and a failure anywhere aborts the run with a non-zero
/// status. The file handle is released on every exit path.
use std::fs::File;

use anyhow::Context;
use tracing::info;

use urlcat_copier::copy_url;

const DEFAULT_OUTPUT_PATH: &str = "/tmp/urlcat";
const DEFAULT_FIRST_URL: &str = "http://www.scala-lang.org";
const DEFAULT_SECOND_URL: &str = "http://www.scala-tools.org";

fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlcat_fetcher=info,urlcat_copier=info".into()),
        )
        .init();

    // Read configuration from environment
    let output_path = std::env::var("OUTPUT_PATH")
        .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());
    let first_url = std::env::var("FIRST_URL")
        .unwrap_or_else(|_| DEFAULT_FIRST_URL.to_string());
    let second_url = std::env::var("SECOND_URL")
        .unwrap_or_else(|_| DEFAULT_SECOND_URL.to_string());

    info!("Writing {} then {} into {}", first_url, second_url, output_path);

    // Created/truncated here, closed by drop on all exit paths.
    let mut sink = File::create(&output_path)
        .with_context(|| format!("Failed to create output file {}", output_path))?;

    copy_url(&mut sink, &first_url)
        .with_context(|| format!("Failed to copy {}", first_url))?;
    copy_url(&mut sink, &second_url)
        .with_context(|| format!("Failed to copy {}", second_url))?;

    info!("Done");
    Ok(())
}
