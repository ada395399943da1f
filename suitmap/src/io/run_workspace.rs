use crate::{config::SuitabilityConfiguration, SuitabilityError};
use std::path::{Path, PathBuf};

/// directories read from and written to by a suitability run
#[derive(Debug, Clone)]
pub struct RunWorkspace {
    pub input: PathBuf,
    pub residuals: PathBuf,
    pub output: PathBuf,
}

impl RunWorkspace {
    pub fn new(root: &Path, conf: &SuitabilityConfiguration) -> RunWorkspace {
        RunWorkspace {
            input: root.join(&conf.input_directory),
            residuals: root.join(&conf.residuals_directory),
            output: root.join(&conf.output_directory),
        }
    }

    /// creates the residuals and output directories if missing
    pub fn create_directories(&self) -> Result<(), SuitabilityError> {
        for dir in [&self.residuals, &self.output] {
            std::fs::create_dir_all(dir).map_err(|e| SuitabilityError::ArtifactWriteError {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn residual_path(&self, stem: &str, extension: &str) -> PathBuf {
        self.residuals.join(format!("{stem}.{extension}"))
    }

    pub fn output_path(&self, stem: &str, extension: &str) -> PathBuf {
        self.output.join(format!("{stem}.{extension}"))
    }
}
