//! Configuration for the diff engine.
//!
//! `DiffConfig` centralizes the algorithm thresholds so no magic numbers are
//! scattered through the differs. The spatial-match cutoffs are empirical
//! values in document points; changing them shifts which moved elements are
//! reported as one modification versus a delete/add pair.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum centroid distance (document points) at which two tables are
    /// considered the same table.
    pub table_match_max_dist: f64,
    /// Maximum centroid distance (document points) at which two images are
    /// considered the same image.
    pub image_match_max_dist: f64,
    /// Upper bound on LCS DP table cells before alignment falls back to
    /// positional opcodes.
    pub lcs_work_limit: usize,
    /// Whether document-level reports include pages without changes.
    pub include_identical_pages: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            table_match_max_dist: 200.0,
            image_match_max_dist: 150.0,
            lcs_work_limit: 1_000_000,
            include_identical_pages: true,
        }
    }
}

impl DiffConfig {
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_distance(self.table_match_max_dist, "table_match_max_dist")?;
        ensure_distance(self.image_match_max_dist, "image_match_max_dist")?;
        if self.lcs_work_limit == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "lcs_work_limit",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and non-negative (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero")]
    NonPositiveLimit { field: &'static str },
}

fn ensure_distance(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidDistance { field, value });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl Default for DiffConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn table_match_max_dist(mut self, value: f64) -> Self {
        self.inner.table_match_max_dist = value;
        self
    }

    pub fn image_match_max_dist(mut self, value: f64) -> Self {
        self.inner.image_match_max_dist = value;
        self
    }

    pub fn lcs_work_limit(mut self, value: usize) -> Self {
        self.inner.lcs_work_limit = value;
        self
    }

    pub fn include_identical_pages(mut self, value: bool) -> Self {
        self.inner.include_identical_pages = value;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
