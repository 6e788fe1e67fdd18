// Analysis configuration: what a full row report contains.
//
// `AnalysisConfig` is plain serde data with a `Default` that matches the
// usual survey of a twelve-tone row: overlapping trichords and tetrachords
// (wrapping), derivation checks at every proper divisor size from 2 to 6,
// and hexachordal combinatoriality. Missing JSON fields fall back to the
// defaults, so a config file only needs the fields it changes.

use dodeca_pcset::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sizes of the overlapping segments described in the report.
    pub overlapping_sizes: Vec<usize>,
    /// Whether overlapping segments wrap around the end of the row.
    pub wrap: bool,
    /// Discrete segment sizes checked for derivation.
    pub derived_sizes: Vec<usize>,
    /// Partition sizes searched for combinatoriality.
    pub partition_sizes: Vec<usize>,
    /// Reject rows that aren't twelve-tone before analysing them. When
    /// false, segment sizes that don't fit the row are skipped instead of
    /// failing the report.
    pub require_twelve_tone: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            overlapping_sizes: vec![3, 4],
            wrap: true,
            derived_sizes: vec![2, 3, 4, 6],
            partition_sizes: vec![6],
            require_twelve_tone: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
