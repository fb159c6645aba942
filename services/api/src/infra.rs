use marine_guardian::config::ScoringConfig;
use marine_guardian::error::AppError;
use marine_guardian::hazards::{HazardCatalog, NormalizationMode, RiskModel};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_model(path: &Path) -> Result<RiskModel, AppError> {
    let file = File::open(path)?;
    let model = RiskModel::from_json_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        factors = model.factors.len(),
        "loaded bloom risk model"
    );
    Ok(model)
}

/// Builds the startup catalog, swapping in a configured bloom model when present.
/// A clamped mode from configuration overrides whatever the model file declares.
pub(crate) fn build_catalog(
    scoring: &ScoringConfig,
    model_override: Option<&Path>,
) -> Result<HazardCatalog, AppError> {
    let catalog = HazardCatalog::standard();

    let model = match model_override.or(scoring.hab_model_path.as_deref()) {
        Some(path) => load_model(path)?,
        None => catalog.hab_model().clone(),
    };

    let model = match scoring.normalization_mode {
        NormalizationMode::Clamped => model.with_normalization_mode(NormalizationMode::Clamped),
        NormalizationMode::Unclamped => model,
    };

    Ok(catalog.with_hab_model(model)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marine_guardian::hazards::ModelLoadError;

    #[test]
    fn build_catalog_applies_clamped_mode() {
        let scoring = ScoringConfig {
            normalization_mode: NormalizationMode::Clamped,
            hab_model_path: None,
        };

        let catalog = build_catalog(&scoring, None).expect("catalog builds");

        assert_eq!(
            catalog.hab_model().normalization_mode,
            NormalizationMode::Clamped
        );
    }

    #[test]
    fn build_catalog_reports_missing_model_file() {
        let scoring = ScoringConfig {
            normalization_mode: NormalizationMode::Unclamped,
            hab_model_path: None,
        };

        let result = build_catalog(&scoring, Some(Path::new("does/not/exist.json")));

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn build_catalog_rejects_models_without_matching_controls() {
        let path = std::env::temp_dir().join(format!(
            "marine-guardian-turbidity-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{
                "factors": [
                    { "name": "turbidity", "label": "Turbidity", "sensitivity": 1.0,
                      "normalization": { "shape": "linear_ratio", "max_reference": 50.0 } }
                ],
                "thresholds": [ { "threshold": 0.5, "label": "High" } ],
                "default_category": "Low"
            }"#,
        )
        .expect("write model file");
        let scoring = ScoringConfig {
            normalization_mode: NormalizationMode::Unclamped,
            hab_model_path: Some(path.clone()),
        };

        let result = build_catalog(&scoring, None);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(AppError::Model(ModelLoadError::UncontrolledFactor { factor })) if factor == "turbidity"
        ));
    }
}
