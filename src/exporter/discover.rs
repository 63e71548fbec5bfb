use std::path::Path;

use anyhow::{anyhow, Result};

use super::ArtifactRef;

/// Collects every JSON artifact under the build output directory, skipping
/// test and script artifacts. Paths come back in alphabetical order.
pub fn discover_artifacts(input_root: &Path) -> Result<Vec<ArtifactRef>> {
    let pattern = input_root.join("**/*.json");
    let pattern = pattern
        .to_str()
        .ok_or(anyhow!("invalid input root {:?}", input_root))?;

    let mut artifacts = vec![];
    for file in glob::glob(pattern)? {
        let file = file?;
        if should_exclude_file(&file) {
            continue;
        }
        let relative = file.strip_prefix(input_root)?;
        let reference = relative.to_str().ok_or(anyhow!("invalid file path"))?;
        artifacts.push(ArtifactRef::parse(reference)?);
    }
    Ok(artifacts)
}

fn should_exclude_file(path: &Path) -> bool {
    path.to_str()
        .map_or(true, |f| f.contains(".t.sol/") || f.contains(".s.sol/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_should_exclude_file() {
        assert!(should_exclude_file(Path::new("out/Engine.t.sol/EngineTest.json")));
        assert!(should_exclude_file(Path::new("out/Deploy.s.sol/Deploy.json")));
        assert!(!should_exclude_file(Path::new("out/Engine.sol/Engine.json")));
    }

    #[test]
    fn test_discover_artifacts() {
        let dir = tempfile::TempDir::new().unwrap();
        for file in [
            "Soul.sol/Soul.json",
            "Soul.t.sol/SoulTest.json",
            "DeploySoul.s.sol/DeploySoul.json",
            "W3st.sol/W3st.json",
        ] {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "{}").unwrap();
        }

        let artifacts = discover_artifacts(dir.path()).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.contract_name()).collect();
        assert_eq!(names, vec!["Soul", "W3st"]);
    }
}
