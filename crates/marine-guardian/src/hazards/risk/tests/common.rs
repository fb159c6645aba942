use std::collections::HashMap;

use crate::hazards::risk::{CategoryThreshold, FactorSpec, RiskEngine, RiskModel};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn bloom_model() -> RiskModel {
    RiskModel::new(
        vec![
            FactorSpec::linear_ratio("water_temperature", "Water Temperature", 0.3, 35.0),
            FactorSpec::linear_ratio("nutrient_levels", "Nutrient Levels", 0.3, 10.0),
            FactorSpec::ideal_midpoint("salinity", "Salinity", 0.2, 35.0, 10.0),
            FactorSpec::ideal_midpoint("ph_level", "pH Levels", 0.2, 8.0, 2.0),
        ],
        vec![
            CategoryThreshold::new(0.8, "Critical"),
            CategoryThreshold::new(0.6, "High"),
            CategoryThreshold::new(0.4, "Moderate"),
        ],
        "Low",
    )
}

pub(super) fn bloom_engine() -> RiskEngine {
    RiskEngine::new(bloom_model())
}

pub(super) fn readings(
    temperature: f64,
    nutrients: f64,
    salinity: f64,
    ph: f64,
) -> HashMap<String, f64> {
    HashMap::from([
        ("water_temperature".to_string(), temperature),
        ("nutrient_levels".to_string(), nutrients),
        ("salinity".to_string(), salinity),
        ("ph_level".to_string(), ph),
    ])
}

/// Single linear factor with weight 1.0 so that the score equals the raw reading.
pub(super) fn passthrough_model() -> RiskModel {
    RiskModel::new(
        vec![FactorSpec::linear_ratio("signal", "Signal", 1.0, 1.0)],
        vec![
            CategoryThreshold::new(0.8, "Critical"),
            CategoryThreshold::new(0.6, "High"),
            CategoryThreshold::new(0.4, "Moderate"),
        ],
        "Low",
    )
}

pub(super) fn signal(value: f64) -> HashMap<String, f64> {
    HashMap::from([("signal".to_string(), value)])
}
