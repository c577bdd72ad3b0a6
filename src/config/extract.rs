use crate::output::OutputLocation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub output: ExtractOutputConfig,
}

/// Raw threshold pair; checked by the validator before use.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ThresholdConfig {
    pub lower: i64,
    pub upper: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtractOutputConfig {
    /// Directory for edge maps. `None` means `output/` beside the executable.
    pub directory: Option<PathBuf>,
    /// Optional JSON report of the run.
    #[serde(rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

impl ExtractOutputConfig {
    pub fn location(&self) -> Result<OutputLocation, String> {
        match &self.directory {
            Some(dir) => Ok(OutputLocation::new(dir)),
            None => OutputLocation::beside_executable().map_err(|e| e.to_string()),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
