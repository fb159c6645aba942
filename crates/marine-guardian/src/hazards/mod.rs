//! Marine hazard impact models and the harmful algal bloom risk assessment.

pub mod catalog;
pub mod domain;
pub mod hab;
pub mod report;
pub mod risk;
pub mod router;
pub mod service;

pub use catalog::HazardCatalog;
pub use domain::{Advisory, AdvisoryTone, HazardKind, HazardProfile, ProfileEntry};
pub use hab::{FactorControl, HabControls, InputRangeError};
pub use risk::{
    evaluate, FactorSpec, MissingFactorError, ModelLoadError, Normalization, NormalizationMode,
    RiskAssessment, RiskEngine, RiskModel,
};
pub use router::hazard_router;
pub use service::{AssessmentError, HazardService};
