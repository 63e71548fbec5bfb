use std::path::Path;

use serde_json::Value;
use tokio::fs;
use tracing::debug;

use super::{ArtifactRef, ExportError};

/// Reads one artifact, pulls out its `abi` field and writes the value,
/// compactly serialized, to `<output_root>/<ContractName>.json`. An existing
/// file at that path is overwritten. An artifact without an `abi` field fails
/// the unit and writes nothing.
pub async fn export_artifact(
    artifact: &ArtifactRef,
    input_root: &Path,
    output_root: &Path,
) -> Result<(), ExportError> {
    let source = artifact.source_path(input_root);
    let content = fs::read_to_string(&source)
        .await
        .map_err(|e| ExportError::Read {
            path: source.clone(),
            source: e,
        })?;
    let json: Value = serde_json::from_str(&content).map_err(|e| ExportError::Parse {
        path: source.clone(),
        source: e,
    })?;
    let abi = json
        .get("abi")
        .ok_or(ExportError::MissingAbi { path: source })?;

    let target = artifact.output_path(output_root);
    fs::write(&target, abi.to_string())
        .await
        .map_err(|e| ExportError::Write {
            path: target.clone(),
            source: e,
        })?;
    debug!("exported {} to {}", artifact.contract_name(), target.display());
    Ok(())
}
