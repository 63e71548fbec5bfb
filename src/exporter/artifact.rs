use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// A build artifact, referenced by its path relative to the build output
/// directory. The contract name is the file stem of the final path segment,
/// so `CyberEngine.sol/CyberEngine.json` names the contract `CyberEngine`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    path: PathBuf,
    contract: String,
}

impl ArtifactRef {
    pub fn parse(reference: &str) -> Result<Self> {
        let path = PathBuf::from(reference);
        let contract = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or(anyhow!("invalid artifact reference {:?}", reference))?
            .to_string();
        Ok(ArtifactRef { path, contract })
    }

    pub fn contract_name(&self) -> &str {
        &self.contract
    }

    pub fn source_path(&self, input_root: &Path) -> PathBuf {
        input_root.join(&self.path)
    }

    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(format!("{}.json", self.contract))
    }
}
