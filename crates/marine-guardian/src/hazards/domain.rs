use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    PlasticWaste,
    CoralHealth,
    OilSpill,
    HarmfulAlgalBloom,
}

impl HazardKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PlasticWaste,
            Self::CoralHealth,
            Self::OilSpill,
            Self::HarmfulAlgalBloom,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PlasticWaste => "Plastic Waste Impact",
            Self::CoralHealth => "Coral Reef Health",
            Self::OilSpill => "Oil Spill Detection",
            Self::HarmfulAlgalBloom => "Harmful Algal Bloom Risk",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PlasticWaste => "plastic_waste",
            Self::CoralHealth => "coral_health",
            Self::OilSpill => "oil_spill",
            Self::HarmfulAlgalBloom => "harmful_algal_bloom",
        }
    }

    /// Accepts the snake_case key plus a few short aliases used on the command line.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "plastic_waste" | "plastic" => Some(Self::PlasticWaste),
            "coral_health" | "coral" => Some(Self::CoralHealth),
            "oil_spill" | "oil" => Some(Self::OilSpill),
            "harmful_algal_bloom" | "hab" => Some(Self::HarmfulAlgalBloom),
            _ => None,
        }
    }

    /// Static-table hazards are presented alongside an uploaded image.
    pub const fn uses_imagery(self) -> bool {
        !matches!(self, Self::HarmfulAlgalBloom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTone {
    Info,
    Warning,
    Critical,
}

impl AdvisoryTone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

/// Guidance block shown beneath an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub tone: AdvisoryTone,
    pub heading: String,
    pub points: Vec<String>,
}

impl Advisory {
    pub fn new(tone: AdvisoryTone, heading: &str, points: &[&str]) -> Self {
        Self {
            tone,
            heading: heading.to_string(),
            points: points.iter().map(|point| point.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Which column of a profile table a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMetric {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub metric: ProfileMetric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
}

impl ChartSpec {
    pub fn bar(title: &str, metric: ProfileMetric, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Bar,
            metric,
            x_label: Some(x_label.to_string()),
            y_label: Some(y_label.to_string()),
        }
    }

    pub fn pie(title: &str, metric: ProfileMetric) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Pie,
            metric,
            x_label: None,
            y_label: None,
        }
    }
}

/// One row of a static impact table. Both metrics are fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub category: String,
    pub primary: f64,
    pub secondary: f64,
}

impl ProfileEntry {
    pub fn new(category: &str, primary: f64, secondary: f64) -> Self {
        Self {
            category: category.to_string(),
            primary,
            secondary,
        }
    }
}

/// Pre-configured impact model for a hazard that has no scoring procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardProfile {
    pub kind: HazardKind,
    pub title: String,
    pub primary_metric: String,
    pub secondary_metric: String,
    pub entries: Vec<ProfileEntry>,
    pub charts: Vec<ChartSpec>,
    pub advisory: Advisory,
}

impl HazardProfile {
    pub fn primary_total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.primary).sum()
    }

    pub fn secondary_total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.secondary).sum()
    }

    pub fn metric_name(&self, metric: ProfileMetric) -> &str {
        match metric {
            ProfileMetric::Primary => &self.primary_metric,
            ProfileMetric::Secondary => &self.secondary_metric,
        }
    }

    pub fn entry(&self, category: &str) -> Option<&ProfileEntry> {
        self.entries.iter().find(|entry| entry.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_key_resolves() {
        for kind in HazardKind::ordered() {
            assert_eq!(HazardKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn from_key_accepts_aliases() {
        assert_eq!(HazardKind::from_key("HAB"), Some(HazardKind::HarmfulAlgalBloom));
        assert_eq!(HazardKind::from_key("oil-spill"), Some(HazardKind::OilSpill));
        assert_eq!(HazardKind::from_key("kelp"), None);
    }
}
