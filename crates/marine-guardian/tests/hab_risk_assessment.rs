use std::collections::HashMap;

use marine_guardian::hazards::hab::{self, NUTRIENT_LEVELS, PH_LEVEL, SALINITY, WATER_TEMPERATURE};
use marine_guardian::hazards::{
    evaluate, AssessmentError, HazardCatalog, HazardKind, HazardService, NormalizationMode,
    RiskModel,
};

fn inputs(temperature: f64, nutrients: f64, salinity: f64, ph: f64) -> HashMap<String, f64> {
    HashMap::from([
        (WATER_TEMPERATURE.to_string(), temperature),
        (NUTRIENT_LEVELS.to_string(), nutrients),
        (SALINITY.to_string(), salinity),
        (PH_LEVEL.to_string(), ph),
    ])
}

#[test]
fn reference_scenarios_resolve_expected_categories() {
    let model = hab::standard_model();

    let scenarios = [
        (inputs(25.0, 2.0, 35.0, 8.0), 0.6743, "High"),
        (inputs(35.0, 10.0, 35.0, 8.0), 1.0, "Critical"),
        (inputs(20.0, 0.0, 30.0, 6.0), 0.2714, "Low"),
    ];

    for (readings, expected_score, expected_category) in scenarios {
        let assessment = evaluate(&model, &readings).expect("standard inputs evaluate");
        assert!(
            (assessment.score - expected_score).abs() < 1e-4,
            "score {} vs {expected_score}",
            assessment.score
        );
        assert_eq!(assessment.category, expected_category);
    }
}

#[test]
fn service_view_formats_score_as_percentage() {
    let service = HazardService::new(HazardCatalog::standard());

    let view = service
        .assess(&inputs(25.0, 2.0, 35.0, 8.0))
        .expect("defaults assess");

    assert_eq!(view.score_pct, "67.43%");
    assert_eq!(view.category, "High");
    assert_eq!(view.contributions.len(), 4);
    assert_eq!(view.contributions[0].label, "Water Temperature");
    assert_eq!(view.charts[0].points.len(), 4);
    assert_eq!(view.advisory.heading, "Potential Ecological Consequences");
}

#[test]
fn service_rejects_readings_outside_control_ranges() {
    let service = HazardService::new(HazardCatalog::standard());

    let error = service
        .assess(&inputs(25.0, 2.0, 50.0, 8.0))
        .expect_err("salinity 50 is outside the control range");

    match error {
        AssessmentError::InvalidInput(range) => {
            assert_eq!(range.factor, SALINITY);
            assert_eq!(range.max, 40.0);
        }
        other => panic!("expected range error, got {other:?}"),
    }
}

#[test]
fn service_reports_missing_factor_without_partial_score() {
    let service = HazardService::new(HazardCatalog::standard());
    let mut readings = inputs(25.0, 2.0, 35.0, 8.0);
    readings.remove(NUTRIENT_LEVELS);

    match service.assess(&readings) {
        Err(AssessmentError::MissingFactor(error)) => assert_eq!(error.factor, NUTRIENT_LEVELS),
        other => panic!("expected missing factor, got {other:?}"),
    }
}

#[test]
fn assess_with_defaults_matches_slider_defaults() {
    let service = HazardService::new(HazardCatalog::standard());

    let view = service
        .assess_with_defaults(HashMap::new())
        .expect("defaults assess");

    assert_eq!(view.category, "High");
}

#[test]
fn alternative_model_can_be_loaded_from_json() {
    let json = r#"{
        "factors": [
            { "name": "water_temperature", "label": "Water Temperature", "sensitivity": 0.5,
              "normalization": { "shape": "linear_ratio", "max_reference": 30.0 } },
            { "name": "salinity", "label": "Salinity", "sensitivity": 0.5,
              "normalization": { "shape": "ideal_midpoint_decay", "ideal": 32.0, "tolerance": 4.0 } }
        ],
        "thresholds": [
            { "threshold": 0.75, "label": "Bloom Likely" }
        ],
        "default_category": "Bloom Unlikely",
        "normalization_mode": "clamped"
    }"#;

    let model = RiskModel::from_json_reader(json.as_bytes()).expect("model loads");
    assert_eq!(model.normalization_mode, NormalizationMode::Clamped);

    let catalog = HazardCatalog::standard()
        .with_hab_model(model)
        .expect("controls cover the alternative model");
    let service = HazardService::new(catalog);

    let view = service
        .assess(&HashMap::from([
            (WATER_TEMPERATURE.to_string(), 30.0),
            (SALINITY.to_string(), 32.0),
        ]))
        .expect("alternative model evaluates");

    assert_eq!(view.category, "Bloom Likely");
    assert_eq!(view.score_pct, "100.00%");
}

#[test]
fn static_profiles_are_reported_for_image_hazards() {
    let service = HazardService::new(HazardCatalog::standard());

    let coral = service
        .report(HazardKind::CoralHealth)
        .expect("coral profile present");
    assert_eq!(coral.rows[2].category, "Advanced Bleaching");
    assert_eq!(coral.rows[2].secondary_pct, "20.00%");

    assert!(service.report(HazardKind::HarmfulAlgalBloom).is_none());
}
