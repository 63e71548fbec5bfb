mod artifact;
pub mod discover;
mod error;
mod extract;

pub use artifact::ArtifactRef;
pub use error::ExportError;
pub use extract::export_artifact;

use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::fs;
use tracing::warn;

use crate::config::Config;

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub exported: Vec<String>,
    pub failed: Vec<(String, ExportError)>,
}

impl ExportSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Exports every configured artifact. All units are dispatched together and
/// joined; a failing unit does not cancel its siblings, so outputs of
/// successful units stay on disk even when the batch as a whole fails.
pub async fn run(config: &Config) -> Result<ExportSummary> {
    fs::create_dir_all(&config.output_root)
        .await
        .with_context(|| {
            format!(
                "failed to create output directory {}",
                config.output_root.display()
            )
        })?;

    let tasks = config
        .artifacts
        .iter()
        .map(|artifact| export_artifact(artifact, &config.input_root, &config.output_root));
    let results = join_all(tasks).await;

    let mut summary = ExportSummary::default();
    for (artifact, result) in config.artifacts.iter().zip(results) {
        match result {
            Ok(()) => summary.exported.push(artifact.contract_name().to_string()),
            Err(e) => {
                warn!("failed to export {}: {:?}", artifact.contract_name(), e);
                summary.failed.push((artifact.contract_name().to_string(), e));
            }
        }
    }
    Ok(summary)
}
