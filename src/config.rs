use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Deserialize;
use tracing::warn;

use crate::cli::Cli;
use crate::exporter::{discover, ArtifactRef};

/// Resolved configuration for one invocation: which artifacts to process and
/// the two directory roots. The artifact list comes from the command line,
/// falling back to the manifest file, falling back to discovering every
/// artifact under the input root.
#[derive(Debug, Clone)]
pub struct Config {
    pub artifacts: Vec<ArtifactRef>,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    artifacts: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let input_root = shellexpand::path::full(&cli.out_dir)?.into_owned();
        let output_root = shellexpand::path::full(&cli.docs_dir)?.into_owned();

        let artifacts = if !cli.artifacts.is_empty() {
            _parse_references(&cli.artifacts)?
        } else if let Some(manifest) = &cli.manifest {
            _parse_references(&load_manifest(manifest)?)?
        } else {
            let artifacts = discover::discover_artifacts(&input_root)?;
            if artifacts.is_empty() {
                warn!("no artifacts found under {}", input_root.display());
            }
            artifacts
        };
        let artifacts = artifacts.into_iter().unique().collect();

        Ok(Config {
            artifacts,
            input_root,
            output_root,
        })
    }
}

fn load_manifest(path: &Path) -> Result<Vec<String>> {
    let expanded = shellexpand::path::full(path)?;
    let content = std::fs::read_to_string(&expanded)
        .with_context(|| format!("failed to read manifest {}", expanded.display()))?;
    let manifest: Manifest = serde_json::from_str(&content)
        .with_context(|| format!("invalid manifest {}", expanded.display()))?;
    Ok(manifest.artifacts)
}

fn _parse_references(references: &[String]) -> Result<Vec<ArtifactRef>> {
    references.iter().map(|r| ArtifactRef::parse(r)).collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn _cli(artifacts: &[&str], manifest: Option<PathBuf>) -> Cli {
        Cli {
            artifacts: artifacts.iter().map(|s| s.to_string()).collect(),
            out_dir: PathBuf::from("./out"),
            docs_dir: PathBuf::from("docs/abi"),
            manifest,
            debug: false,
        }
    }

    #[test]
    fn test_explicit_artifacts_deduplicated() {
        let cli = _cli(
            &[
                "Soul.sol/Soul.json",
                "W3st.sol/W3st.json",
                "Soul.sol/Soul.json",
            ],
            None,
        );
        let config = Config::from_cli(&cli).unwrap();
        let names: Vec<_> = config.artifacts.iter().map(|a| a.contract_name()).collect();
        assert_eq!(names, vec!["Soul", "W3st"]);
    }

    #[test]
    fn test_manifest_artifacts() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = dir.path().join("abi.json");
        fs::write(
            &manifest,
            r#"{"artifacts": ["CyberEngine.sol/CyberEngine.json", "Essence.sol/Essence.json"]}"#,
        )
        .unwrap();

        let cli = _cli(&[], Some(manifest));
        let config = Config::from_cli(&cli).unwrap();
        let names: Vec<_> = config.artifacts.iter().map(|a| a.contract_name()).collect();
        assert_eq!(names, vec!["CyberEngine", "Essence"]);
    }

    #[test]
    fn test_invalid_manifest() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = dir.path().join("abi.json");
        fs::write(&manifest, "not json").unwrap();

        let cli = _cli(&[], Some(manifest));
        assert!(Config::from_cli(&cli).is_err());
    }
}
