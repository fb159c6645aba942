use serde::{Deserialize, Serialize};

/// Shape used to turn a raw measurement into a unit-interval contribution.
///
/// Neither shape clamps its output. Readings past `max_reference` produce values
/// above 1.0 and readings further than `tolerance` from `ideal` go negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Normalization {
    LinearRatio { max_reference: f64 },
    IdealMidpointDecay { ideal: f64, tolerance: f64 },
}

impl Normalization {
    pub fn apply(&self, raw: f64) -> f64 {
        match *self {
            Normalization::LinearRatio { max_reference } => raw / max_reference,
            Normalization::IdealMidpointDecay { ideal, tolerance } => {
                1.0 - (raw - ideal).abs() / tolerance
            }
        }
    }

    /// Finite parameters with a strictly positive divisor.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Normalization::LinearRatio { max_reference } => {
                max_reference.is_finite() && max_reference > 0.0
            }
            Normalization::IdealMidpointDecay { ideal, tolerance } => {
                ideal.is_finite() && tolerance.is_finite() && tolerance > 0.0
            }
        }
    }

    /// Raw value at which the shape reaches its nominal peak of 1.0.
    pub fn peak(&self) -> f64 {
        match *self {
            Normalization::LinearRatio { max_reference } => max_reference,
            Normalization::IdealMidpointDecay { ideal, .. } => ideal,
        }
    }
}

/// One named, weighted environmental input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSpec {
    pub name: String,
    pub label: String,
    pub sensitivity: f64,
    pub normalization: Normalization,
}

impl FactorSpec {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        sensitivity: f64,
        normalization: Normalization,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            sensitivity,
            normalization,
        }
    }

    pub fn linear_ratio(
        name: impl Into<String>,
        label: impl Into<String>,
        sensitivity: f64,
        max_reference: f64,
    ) -> Self {
        Self::new(
            name,
            label,
            sensitivity,
            Normalization::LinearRatio { max_reference },
        )
    }

    pub fn ideal_midpoint(
        name: impl Into<String>,
        label: impl Into<String>,
        sensitivity: f64,
        ideal: f64,
        tolerance: f64,
    ) -> Self {
        Self::new(
            name,
            label,
            sensitivity,
            Normalization::IdealMidpointDecay { ideal, tolerance },
        )
    }
}
