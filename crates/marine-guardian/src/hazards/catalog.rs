use super::domain::{
    Advisory, AdvisoryTone, ChartSpec, HazardKind, HazardProfile, ProfileEntry, ProfileMetric,
};
use super::hab::{self, HabControls};
use super::risk::{ModelLoadError, RiskModel};

/// Immutable set of impact models, built once at startup and passed to the service.
#[derive(Debug, Clone)]
pub struct HazardCatalog {
    profiles: Vec<HazardProfile>,
    hab_model: RiskModel,
    hab_controls: HabControls,
    hab_advisory: Advisory,
}

impl HazardCatalog {
    pub fn standard() -> Self {
        Self {
            profiles: vec![plastic_waste(), coral_health(), oil_spill()],
            hab_model: hab::standard_model(),
            hab_controls: HabControls::standard(),
            hab_advisory: hab_advisory(),
        }
    }

    /// Rejects bloom models that fail validation or declare a factor without a control.
    pub fn new(
        profiles: Vec<HazardProfile>,
        hab_model: RiskModel,
        hab_controls: HabControls,
    ) -> Result<Self, ModelLoadError> {
        hab_model.validate()?;
        hab_controls.ensure_covers(&hab_model)?;
        Ok(Self {
            profiles,
            hab_model,
            hab_controls,
            hab_advisory: hab_advisory(),
        })
    }

    /// Replaces the bloom model, keeping the static profiles and controls.
    pub fn with_hab_model(mut self, model: RiskModel) -> Result<Self, ModelLoadError> {
        model.validate()?;
        self.hab_controls.ensure_covers(&model)?;
        self.hab_model = model;
        Ok(self)
    }

    pub fn profile(&self, kind: HazardKind) -> Option<&HazardProfile> {
        self.profiles.iter().find(|profile| profile.kind == kind)
    }

    pub fn profiles(&self) -> &[HazardProfile] {
        &self.profiles
    }

    pub fn hab_model(&self) -> &RiskModel {
        &self.hab_model
    }

    pub fn hab_controls(&self) -> &HabControls {
        &self.hab_controls
    }

    pub fn hab_advisory(&self) -> &Advisory {
        &self.hab_advisory
    }
}

fn plastic_waste() -> HazardProfile {
    HazardProfile {
        kind: HazardKind::PlasticWaste,
        title: "Plastic Waste Ecological Impact Analysis".to_string(),
        primary_metric: "Detection Probability".to_string(),
        secondary_metric: "Ecological Impact Score".to_string(),
        entries: vec![
            ProfileEntry::new("Microplastics", 0.3, 0.8),
            ProfileEntry::new("Fishing Nets", 0.2, 0.7),
            ProfileEntry::new("Plastic Bottles", 0.25, 0.6),
            ProfileEntry::new("Industrial Plastic Waste", 0.15, 0.9),
        ],
        charts: vec![
            ChartSpec::bar(
                "Plastic Waste Type Distribution",
                ProfileMetric::Primary,
                "Plastic Categories",
                "Detection Probability",
            ),
            ChartSpec::pie("Ecological Impact by Plastic Type", ProfileMetric::Secondary),
        ],
        advisory: Advisory::new(
            AdvisoryTone::Warning,
            "Recommendations",
            &[
                "Implement targeted waste reduction strategies",
                "Support local recycling initiatives",
                "Promote sustainable packaging alternatives",
            ],
        ),
    }
}

fn coral_health() -> HazardProfile {
    HazardProfile {
        kind: HazardKind::CoralHealth,
        title: "Coral Reef Health Monitoring".to_string(),
        primary_metric: "Prevalence".to_string(),
        secondary_metric: "Recovery Potential".to_string(),
        entries: vec![
            ProfileEntry::new("Healthy Coral", 0.4, 0.9),
            ProfileEntry::new("Early Bleaching", 0.3, 0.6),
            ProfileEntry::new("Advanced Bleaching", 0.2, 0.2),
            ProfileEntry::new("Coral Disease", 0.1, 0.1),
        ],
        charts: vec![ChartSpec::pie(
            "Coral Reef Health Status Distribution",
            ProfileMetric::Primary,
        )],
        advisory: Advisory::new(
            AdvisoryTone::Info,
            "Environmental Stress Factors",
            &[
                "Rising ocean temperatures",
                "Ocean acidification",
                "Pollution",
                "Coastal development",
            ],
        ),
    }
}

fn oil_spill() -> HazardProfile {
    HazardProfile {
        kind: HazardKind::OilSpill,
        title: "Oil Spill Detection and Ecological Impact".to_string(),
        primary_metric: "Detection Probability".to_string(),
        secondary_metric: "Ecological Impact Score".to_string(),
        entries: vec![
            ProfileEntry::new("Minor Spill", 0.4, 0.3),
            ProfileEntry::new("Moderate Spill", 0.3, 0.6),
            ProfileEntry::new("Major Spill", 0.2, 0.9),
            ProfileEntry::new("Catastrophic Spill", 0.1, 1.0),
        ],
        charts: vec![ChartSpec::bar(
            "Oil Spill Severity Distribution",
            ProfileMetric::Primary,
            "Spill Severity Levels",
            "Detection Probability",
        )],
        advisory: Advisory::new(
            AdvisoryTone::Critical,
            "Potential Ecological Consequences",
            &[
                "Marine life habitat destruction",
                "Long-term ecosystem damage",
                "Biodiversity loss",
                "Economic impact on fishing industries",
            ],
        ),
    }
}

fn hab_advisory() -> Advisory {
    Advisory::new(
        AdvisoryTone::Warning,
        "Potential Ecological Consequences",
        &[
            "Oxygen depletion in water",
            "Marine life suffocation",
            "Toxin production",
            "Disruption of marine food chains",
        ],
    )
}
