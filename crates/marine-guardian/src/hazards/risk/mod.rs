//! Weighted-factor risk scoring.
//!
//! A [`RiskModel`] is immutable configuration. Evaluating it against a set of raw
//! readings is pure: no clamping of inputs, no I/O, no shared state.

mod factor;
mod model;

#[cfg(test)]
mod tests;

pub use factor::{FactorSpec, Normalization};
pub use model::{CategoryThreshold, ModelLoadError, NormalizationMode, RiskModel};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raised when a factor declared by the model has no supplied reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no input supplied for factor '{factor}'")]
pub struct MissingFactorError {
    pub factor: String,
}

/// Weighted contribution of a single factor, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: String,
    pub raw_value: f64,
    pub normalized: f64,
    pub weighted: f64,
}

/// Composite score and resolved category for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub category: String,
    pub contributions: Vec<FactorContribution>,
}

/// Stateless evaluator bound to one model.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    model: RiskModel,
}

impl RiskEngine {
    pub fn new(model: RiskModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &RiskModel {
        &self.model
    }

    pub fn evaluate(
        &self,
        raw_inputs: &HashMap<String, f64>,
    ) -> Result<RiskAssessment, MissingFactorError> {
        evaluate(&self.model, raw_inputs)
    }
}

/// Scores `raw_inputs` against `model`.
///
/// Fails on the first factor (in model order) missing from `raw_inputs`; keys the
/// model does not declare are ignored.
pub fn evaluate(
    model: &RiskModel,
    raw_inputs: &HashMap<String, f64>,
) -> Result<RiskAssessment, MissingFactorError> {
    let mut contributions = Vec::with_capacity(model.factors.len());

    for factor in &model.factors {
        let raw_value = *raw_inputs
            .get(&factor.name)
            .ok_or_else(|| MissingFactorError {
                factor: factor.name.clone(),
            })?;

        let mut normalized = factor.normalization.apply(raw_value);
        if model.normalization_mode == NormalizationMode::Clamped {
            normalized = normalized.clamp(0.0, 1.0);
        }

        contributions.push(FactorContribution {
            factor: factor.name.clone(),
            raw_value,
            normalized,
            weighted: factor.sensitivity * normalized,
        });
    }

    let score = contributions
        .iter()
        .fold(0.0, |total, contribution| total + contribution.weighted);
    let category = model.classify(score).to_string();

    Ok(RiskAssessment {
        score,
        category,
        contributions,
    })
}
