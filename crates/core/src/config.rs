use serde::{Deserialize, Serialize};

use crate::error::AlignError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AlignConfig {
    pub name: String,
    pub mode: MatchMode,
    pub input: InputConfig,
    #[serde(default)]
    pub threshold: ThresholdConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which matching policy pairs the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Best similarity ratio per source; only an exact normalized match
    /// (ratio 100) counts as consistent, everything else is reported.
    Ratio,
    /// Minimum raw edit distance across the two difference sets; accepted
    /// when strictly below the configured threshold.
    Distance,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio => write!(f, "ratio"),
            Self::Distance => write!(f, "distance"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Workbook holding both tables (xlsx/xls/ods), or the journals CSV when
    /// `abbreviations_file` is set.
    pub file: String,
    /// Separate abbreviations CSV; leave unset for single-workbook input.
    #[serde(default)]
    pub abbreviations_file: Option<String>,
    #[serde(default = "default_journals_sheet")]
    pub journals_sheet: String,
    #[serde(default = "default_abbreviations_sheet")]
    pub abbreviations_sheet: String,
}

fn default_journals_sheet() -> String {
    "sheet1".into()
}

fn default_abbreviations_sheet() -> String {
    "sheet2".into()
}

// ---------------------------------------------------------------------------
// Threshold + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    /// Distance-mode acceptance bound: a best candidate is accepted only
    /// when its distance is strictly below this.
    pub max_distance: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self { max_distance: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report path; extension picks the format (.xlsx or .csv).
    #[serde(default)]
    pub file: Option<String>,
    /// Abbreviation columns in the merged alignment table.
    #[serde(default = "default_max_abbreviations")]
    pub max_abbreviations: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: None,
            max_abbreviations: default_max_abbreviations(),
        }
    }
}

fn default_max_abbreviations() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AlignConfig {
    pub fn from_toml(input: &str) -> Result<Self, AlignError> {
        let config: AlignConfig =
            toml::from_str(input).map_err(|e| AlignError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        if self.input.file.is_empty() {
            return Err(AlignError::ConfigValidation("input.file is empty".into()));
        }

        if self.input.journals_sheet.is_empty() || self.input.abbreviations_sheet.is_empty() {
            return Err(AlignError::ConfigValidation(
                "sheet names must be non-empty".into(),
            ));
        }

        if self.input.abbreviations_file.is_none()
            && self.input.journals_sheet == self.input.abbreviations_sheet
        {
            return Err(AlignError::ConfigValidation(format!(
                "journals and abbreviations share sheet '{}'",
                self.input.journals_sheet
            )));
        }

        if self.threshold.max_distance == 0 {
            return Err(AlignError::ConfigValidation(
                "threshold.max_distance must be greater than 0".into(),
            ));
        }

        if self.output.max_abbreviations == 0 {
            return Err(AlignError::ConfigValidation(
                "output.max_abbreviations must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
