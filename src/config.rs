//! Engine configuration.
//!
//! A single YAML file supplies the deployment defaults for the week-start
//! convention and the negative-duration policy. Both can still be overridden
//! per request; the configuration only fills in what a caller omits.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregation::DurationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::WeekStart;

/// Deployment-level defaults for aggregation runs.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::EngineConfig;
///
/// let config = EngineConfig::load("./config/engine.yaml")?;
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// The day reporting weeks begin on.
    #[serde(default)]
    pub week_start: WeekStart,
    /// How reversed clock pairs are treated.
    #[serde(default)]
    pub duration_policy: DurationPolicy,
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read and
    /// [`EngineError::ConfigParseError`] if it is not valid YAML for this
    /// structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
