use super::report::{OrbitMap, PipelineReport, PropertiesMap};
use super::runner::PipelineError;
use crate::info;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};

pub const ORBIT_ARTIFACT: &str = "asteroid_orbit_coords.json";
pub const PROPERTIES_ARTIFACT: &str = "asteroid_properties.json";

/// Writes the two JSON artifacts of a run into one directory, replacing earlier files.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn orbit_path(&self) -> PathBuf { self.dir.join(ORBIT_ARTIFACT) }
    pub fn properties_path(&self) -> PathBuf { self.dir.join(PROPERTIES_ARTIFACT) }

    /// Writes the orbit map and the properties map of `report`.
    ///
    /// # Errors
    /// Returns a [`PipelineError`] if the directory cannot be created or a file cannot be
    /// written.
    pub async fn write(&self, report: &PipelineReport) -> Result<(), PipelineError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PipelineError::Artifact { path: self.dir.clone(), source })?;
        Self::write_json(&self.orbit_path(), report.orbits()).await?;
        Self::write_json(&self.properties_path(), report.properties()).await?;
        info!(
            "Saved {} orbits to {} and their properties to {}.",
            report.orbits().len(),
            self.orbit_path().display(),
            self.properties_path().display()
        );
        Ok(())
    }

    /// Reads back a previously written orbit artifact.
    ///
    /// # Errors
    /// Returns a [`PipelineError`] if the file is missing or not a valid orbit map.
    pub async fn read_orbits(&self) -> Result<OrbitMap, PipelineError> {
        Self::read_json(&self.orbit_path()).await
    }

    /// Reads back a previously written properties artifact.
    ///
    /// # Errors
    /// Returns a [`PipelineError`] if the file is missing or not a valid properties map.
    pub async fn read_properties(&self) -> Result<PropertiesMap, PipelineError> {
        Self::read_json(&self.properties_path()).await
    }

    async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
        let content = serde_json::to_vec(value)
            .map_err(|source| PipelineError::Json { path: path.to_path_buf(), source })?;
        tokio::fs::write(path, content)
            .await
            .map_err(|source| PipelineError::Artifact { path: path.to_path_buf(), source })
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|source| PipelineError::Artifact { path: path.to_path_buf(), source })?;
        serde_json::from_slice(&content)
            .map_err(|source| PipelineError::Json { path: path.to_path_buf(), source })
    }
}
