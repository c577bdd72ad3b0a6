//! Where edge maps are written and how they are named.
use crate::error::Result;
use crate::validate::Thresholds;
use log::info;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used for the default location next to the executable.
pub const OUTPUT_DIR_NAME: &str = "output";
/// Every edge map is written in this raster format, whatever the input was.
pub const OUTPUT_EXTENSION: &str = "png";

/// Output directory for edge maps. Created lazily on first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLocation {
    dir: PathBuf,
}

impl OutputLocation {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `output/` beside the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = env::current_exe()
            .map_err(|e| format!("Failed to locate running executable: {e}"))?;
        let exe_dir = exe
            .parent()
            .ok_or_else(|| format!("Executable {} has no parent directory", exe.display()))?;
        Ok(Self::new(exe_dir.join(OUTPUT_DIR_NAME)))
    }

    /// Configured directory, without creating it.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute output directory, created (with parents) if absent.
    pub fn output_directory(&self) -> Result<PathBuf> {
        let dir = if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            env::current_dir()
                .map_err(|e| format!("Failed to read current directory: {e}"))?
                .join(&self.dir)
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
            info!("created output directory {}", dir.display());
        }
        Ok(dir)
    }

    /// `{dir}/{stem}_{lower}_{upper}.png` for the given input.
    pub fn output_file_path(&self, input: &Path, thresholds: Thresholds) -> Result<PathBuf> {
        let dir = self.output_directory()?;
        Ok(dir.join(output_file_name(input, thresholds)))
    }
}

/// File name without directory or extension. Non-UTF-8 bytes are kept.
pub fn base_name_without_extension(path: &Path) -> OsString {
    path.file_stem().map(OsStr::to_os_string).unwrap_or_default()
}

pub fn output_file_name(input: &Path, thresholds: Thresholds) -> OsString {
    let mut name = base_name_without_extension(input);
    name.push(format!(
        "_{}_{}.{OUTPUT_EXTENSION}",
        thresholds.lower, thresholds.upper
    ));
    name
}
