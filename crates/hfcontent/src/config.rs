//! Scoring configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::luma::Luminance;

/// Default divisor applied to the half-size of the image to get the
/// low-frequency cutoff radius: `cutoff = min(R/2, C/2) / 4`.
///
/// This is a tunable heuristic. Larger divisors shrink the excluded disk and
/// count more of the low band as "high frequency".
pub const DEFAULT_CUTOFF_DIVISOR: usize = 4;

/// Configuration for [`Scorer`](crate::Scorer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Divisor of `min(R/2, C/2)` that yields the cutoff radius. Must be >= 1.
    pub cutoff_divisor: usize,
    /// Color-to-intensity mapping applied before the transform.
    pub luminance: Luminance,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            cutoff_divisor: DEFAULT_CUTOFF_DIVISOR,
            luminance: Luminance::default(),
        }
    }
}

impl ScoreConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON form of this configuration.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.cutoff_divisor == 0 {
            return Err(ScoreError::InvalidConfig {
                message: "cutoff_divisor must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}
