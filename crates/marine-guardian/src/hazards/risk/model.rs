use super::factor::FactorSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

const BALANCE_TOLERANCE: f64 = 1e-9;

/// Score cutoff above which `label` applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryThreshold {
    pub threshold: f64,
    pub label: String,
}

impl CategoryThreshold {
    pub fn new(threshold: f64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// Whether normalized factor values are clamped to [0, 1] before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    #[default]
    Unclamped,
    Clamped,
}

/// Ordered factors plus descending category thresholds for one hazard assessment.
///
/// Sensitivities are expected to sum to 1.0 but this is not enforced; see
/// [`RiskModel::is_balanced`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    pub factors: Vec<FactorSpec>,
    pub thresholds: Vec<CategoryThreshold>,
    pub default_category: String,
    #[serde(default)]
    pub normalization_mode: NormalizationMode,
}

impl RiskModel {
    pub fn new(
        factors: Vec<FactorSpec>,
        thresholds: Vec<CategoryThreshold>,
        default_category: impl Into<String>,
    ) -> Self {
        Self {
            factors,
            thresholds,
            default_category: default_category.into(),
            normalization_mode: NormalizationMode::Unclamped,
        }
    }

    pub fn with_normalization_mode(mut self, mode: NormalizationMode) -> Self {
        self.normalization_mode = mode;
        self
    }

    /// Loads an alternative model from JSON, rejecting structurally unusable ones.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ModelLoadError> {
        let model: RiskModel = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.factors.is_empty() {
            return Err(ModelLoadError::NoFactors);
        }
        if self.default_category.trim().is_empty() {
            return Err(ModelLoadError::MissingDefaultCategory);
        }

        let mut seen = HashSet::new();
        for factor in &self.factors {
            if !seen.insert(factor.name.as_str()) {
                return Err(ModelLoadError::DuplicateFactor(factor.name.clone()));
            }
            if !factor.sensitivity.is_finite() {
                return Err(ModelLoadError::InvalidSensitivity {
                    factor: factor.name.clone(),
                });
            }
            if !factor.normalization.is_well_formed() {
                return Err(ModelLoadError::InvalidNormalization {
                    factor: factor.name.clone(),
                });
            }
        }

        if let Some(entry) = self
            .thresholds
            .iter()
            .find(|entry| !entry.threshold.is_finite())
        {
            return Err(ModelLoadError::InvalidThreshold {
                label: entry.label.clone(),
            });
        }

        Ok(())
    }

    pub fn factor(&self, name: &str) -> Option<&FactorSpec> {
        self.factors.iter().find(|factor| factor.name == name)
    }

    pub fn weight_total(&self) -> f64 {
        self.factors.iter().map(|factor| factor.sensitivity).sum()
    }

    pub fn is_balanced(&self) -> bool {
        (self.weight_total() - 1.0).abs() <= BALANCE_TOLERANCE
    }

    /// Returns the first label whose threshold `score` strictly exceeds, scanning in
    /// list order, or the default category when none match.
    pub fn classify(&self, score: f64) -> &str {
        self.thresholds
            .iter()
            .find(|entry| score > entry.threshold)
            .map(|entry| entry.label.as_str())
            .unwrap_or(self.default_category.as_str())
    }

    /// All category labels from most to least severe, ending with the default.
    pub fn category_labels(&self) -> Vec<&str> {
        self.thresholds
            .iter()
            .map(|entry| entry.label.as_str())
            .chain(std::iter::once(self.default_category.as_str()))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("risk model is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("risk model declares no factors")]
    NoFactors,
    #[error("risk model declares factor '{0}' more than once")]
    DuplicateFactor(String),
    #[error("risk model is missing a default category")]
    MissingDefaultCategory,
    #[error("factor '{factor}' needs a finite, positive normalization divisor")]
    InvalidNormalization { factor: String },
    #[error("factor '{factor}' has a non-finite sensitivity")]
    InvalidSensitivity { factor: String },
    #[error("threshold for '{label}' is not a finite number")]
    InvalidThreshold { label: String },
    #[error("factor '{factor}' has no input control")]
    UncontrolledFactor { factor: String },
}
