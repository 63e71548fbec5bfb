use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Artifacts to process, relative to the build output directory
    /// (e.g. CyberEngine.sol/CyberEngine.json)
    #[arg(value_name = "ARTIFACT")]
    pub artifacts: Vec<String>,

    /// Build output directory containing the compiled artifacts
    #[arg(long, value_name = "DIR", env = "ABI_EXPORTER_OUT_DIR", default_value = "./out")]
    pub out_dir: PathBuf,

    /// Directory where the extracted ABI files are written
    #[arg(long, value_name = "DIR", env = "ABI_EXPORTER_DOCS_DIR", default_value = "docs/abi")]
    pub docs_dir: PathBuf,

    /// JSON manifest listing the artifacts to process
    #[arg(long, value_name = "FILE", env = "ABI_EXPORTER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(long, env = "DEBUG")]
    pub debug: bool,
}
