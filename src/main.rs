#![allow(dead_code, clippy::similar_names)]
mod http_handler;
mod keychain;
mod logger;
mod neo;
mod orbit;
mod pipeline;

use crate::keychain::Keychain;
use crate::pipeline::{ArtifactWriter, Pipeline, PipelineConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = PipelineConfig::from_env()
        .unwrap_or_else(|e| fatal!("Invalid configuration: {e}"));
    info!(
        "Fetching near-earth objects for {} ({} days), writing to {}.",
        config.window(),
        config.window().days(),
        config.output_dir().display()
    );

    let keychain =
        Keychain::new(&config).unwrap_or_else(|e| fatal!("Could not set up HTTP clients: {e}"));
    let pipeline = Pipeline::new(keychain, config.window());
    let report = pipeline.run().await.unwrap_or_else(|e| fatal!("Run aborted: {e}"));
    report.log_summary();

    ArtifactWriter::new(config.output_dir())
        .write(&report)
        .await
        .unwrap_or_else(|e| fatal!("Could not save results: {e}"));
}
