use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::HazardCatalog;
use super::domain::HazardKind;
use super::hab::{HabControls, InputRangeError};
use super::report::views::{HabAssessmentView, HazardReportView, HazardSummaryEntry};
use super::report::{hab_assessment_view, hazard_index};
use super::risk::{MissingFactorError, RiskEngine};

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    InvalidInput(#[from] InputRangeError),
    #[error(transparent)]
    MissingFactor(#[from] MissingFactorError),
}

/// Service composing the hazard catalog with the bloom risk engine.
pub struct HazardService {
    catalog: Arc<HazardCatalog>,
    engine: Arc<RiskEngine>,
}

impl HazardService {
    pub fn new(catalog: HazardCatalog) -> Self {
        let model = catalog.hab_model().clone();
        if !model.is_balanced() {
            warn!(
                weight_total = model.weight_total(),
                "bloom model sensitivities do not sum to 1.0"
            );
        }

        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(RiskEngine::new(model)),
        }
    }

    pub fn catalog(&self) -> &HazardCatalog {
        &self.catalog
    }

    pub fn index(&self) -> Vec<HazardSummaryEntry> {
        hazard_index()
    }

    /// Static table view for image-backed hazards. `None` for the bloom assessment,
    /// which is computed rather than looked up.
    pub fn report(&self, kind: HazardKind) -> Option<HazardReportView> {
        self.catalog.profile(kind).map(|profile| profile.report())
    }

    pub fn controls(&self) -> &HabControls {
        self.catalog.hab_controls()
    }

    /// Range-checks `inputs` against the controls, then scores them.
    pub fn assess(
        &self,
        inputs: &HashMap<String, f64>,
    ) -> Result<HabAssessmentView, AssessmentError> {
        self.controls().validate(inputs)?;
        let assessment = self.engine.evaluate(inputs)?;

        debug!(
            score = assessment.score,
            category = %assessment.category,
            "bloom risk assessed"
        );

        Ok(hab_assessment_view(
            self.engine.model(),
            &assessment,
            self.catalog.hab_advisory(),
        ))
    }

    /// Assesses `partial` after filling any absent readings with control defaults.
    pub fn assess_with_defaults(
        &self,
        partial: HashMap<String, f64>,
    ) -> Result<HabAssessmentView, AssessmentError> {
        let inputs = self.controls().fill_defaults(partial);
        self.assess(&inputs)
    }
}
