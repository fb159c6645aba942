use super::risk::{CategoryThreshold, FactorSpec, ModelLoadError, RiskModel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const WATER_TEMPERATURE: &str = "water_temperature";
pub const NUTRIENT_LEVELS: &str = "nutrient_levels";
pub const SALINITY: &str = "salinity";
pub const PH_LEVEL: &str = "ph_level";

/// Four-factor harmful algal bloom model with Critical/High/Moderate/Low bands.
pub fn standard_model() -> RiskModel {
    RiskModel::new(
        vec![
            FactorSpec::linear_ratio(WATER_TEMPERATURE, "Water Temperature", 0.3, 35.0),
            FactorSpec::linear_ratio(NUTRIENT_LEVELS, "Nutrient Levels", 0.3, 10.0),
            FactorSpec::ideal_midpoint(SALINITY, "Salinity", 0.2, 35.0, 10.0),
            FactorSpec::ideal_midpoint(PH_LEVEL, "pH Levels", 0.2, 8.0, 2.0),
        ],
        vec![
            CategoryThreshold::new(0.8, "Critical"),
            CategoryThreshold::new(0.6, "High"),
            CategoryThreshold::new(0.4, "Moderate"),
        ],
        "Low",
    )
}

/// Bounded numeric control feeding one factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorControl {
    pub factor: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FactorControl {
    pub fn new(factor: &str, label: &str, min: f64, max: f64, default: f64) -> Self {
        Self {
            factor: factor.to_string(),
            label: label.to_string(),
            min,
            max,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{factor} reading {value} is outside the accepted range {min}..={max}")]
pub struct InputRangeError {
    pub factor: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Input boundary for the HAB assessment. The scoring engine never clamps, so
/// range checks happen here before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabControls {
    pub controls: Vec<FactorControl>,
}

impl HabControls {
    pub fn standard() -> Self {
        Self {
            controls: vec![
                FactorControl::new(WATER_TEMPERATURE, "Water Temperature (°C)", 20.0, 35.0, 25.0),
                FactorControl::new(NUTRIENT_LEVELS, "Nutrient Concentration", 0.0, 10.0, 2.0),
                FactorControl::new(SALINITY, "Salinity", 30.0, 40.0, 35.0),
                FactorControl::new(PH_LEVEL, "Water pH", 6.0, 9.0, 8.0),
            ],
        }
    }

    pub fn control(&self, factor: &str) -> Option<&FactorControl> {
        self.controls.iter().find(|control| control.factor == factor)
    }

    pub fn defaults(&self) -> HashMap<String, f64> {
        self.controls
            .iter()
            .map(|control| (control.factor.clone(), control.default))
            .collect()
    }

    /// Fails on the first model factor that no control feeds.
    pub fn ensure_covers(&self, model: &RiskModel) -> Result<(), ModelLoadError> {
        match model
            .factors
            .iter()
            .find(|factor| self.control(&factor.name).is_none())
        {
            Some(factor) => Err(ModelLoadError::UncontrolledFactor {
                factor: factor.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Completes `partial` with control defaults, keeping any supplied readings.
    pub fn fill_defaults(&self, mut partial: HashMap<String, f64>) -> HashMap<String, f64> {
        for control in &self.controls {
            partial
                .entry(control.factor.clone())
                .or_insert(control.default);
        }
        partial
    }

    /// Checks every supplied reading that has a control. Missing readings are left
    /// for the engine to report.
    pub fn validate(&self, inputs: &HashMap<String, f64>) -> Result<(), InputRangeError> {
        for control in &self.controls {
            if let Some(&value) = inputs.get(&control.factor) {
                if !control.contains(value) {
                    return Err(InputRangeError {
                        factor: control.factor.clone(),
                        value,
                        min: control.min,
                        max: control.max,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_factor_has_a_control() {
        let model = standard_model();
        let controls = HabControls::standard();

        for factor in &model.factors {
            assert!(
                controls.control(&factor.name).is_some(),
                "missing control for {}",
                factor.name
            );
        }
        assert!(model.is_balanced());
        assert!(controls.ensure_covers(&model).is_ok());
    }

    #[test]
    fn ensure_covers_names_the_uncontrolled_factor() {
        let model = RiskModel::new(
            vec![FactorSpec::linear_ratio("turbidity", "Turbidity", 1.0, 50.0)],
            Vec::new(),
            "Low",
        );

        match HabControls::standard().ensure_covers(&model) {
            Err(ModelLoadError::UncontrolledFactor { factor }) => assert_eq!(factor, "turbidity"),
            other => panic!("expected uncontrolled factor error, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_inclusive_bounds() {
        let controls = HabControls::standard();
        let inputs = HashMap::from([
            (WATER_TEMPERATURE.to_string(), 20.0),
            (NUTRIENT_LEVELS.to_string(), 10.0),
            (SALINITY.to_string(), 40.0),
            (PH_LEVEL.to_string(), 6.0),
        ]);

        assert!(controls.validate(&inputs).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_readings() {
        let controls = HabControls::standard();
        let mut inputs = controls.defaults();
        inputs.insert(PH_LEVEL.to_string(), 9.5);

        let error = controls.validate(&inputs).expect_err("ph out of range");

        assert_eq!(error.factor, PH_LEVEL);
        assert_eq!(error.value, 9.5);
        assert_eq!((error.min, error.max), (6.0, 9.0));
    }

    #[test]
    fn validate_rejects_nan() {
        let controls = HabControls::standard();
        let mut inputs = controls.defaults();
        inputs.insert(SALINITY.to_string(), f64::NAN);

        assert!(controls.validate(&inputs).is_err());
    }

    #[test]
    fn fill_defaults_keeps_supplied_values() {
        let controls = HabControls::standard();
        let partial = HashMap::from([(WATER_TEMPERATURE.to_string(), 31.0)]);

        let filled = controls.fill_defaults(partial);

        assert_eq!(filled.len(), 4);
        assert_eq!(filled[WATER_TEMPERATURE], 31.0);
        assert_eq!(filled[NUTRIENT_LEVELS], 2.0);
        assert_eq!(filled[SALINITY], 35.0);
        assert_eq!(filled[PH_LEVEL], 8.0);
    }
}
