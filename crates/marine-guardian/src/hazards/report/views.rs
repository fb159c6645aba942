use super::super::domain::{AdvisoryTone, ChartKind, HazardKind};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HazardSummaryEntry {
    pub kind: HazardKind,
    pub key: &'static str,
    pub label: &'static str,
    pub uses_imagery: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Plot-ready series. Pie values are shares of the series total.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryView {
    pub tone: AdvisoryTone,
    pub tone_label: &'static str,
    pub heading: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricRowView {
    pub category: String,
    pub primary: f64,
    pub primary_pct: String,
    pub secondary: f64,
    pub secondary_pct: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardReportView {
    pub kind: HazardKind,
    pub kind_label: &'static str,
    pub title: String,
    pub primary_metric: String,
    pub secondary_metric: String,
    pub rows: Vec<MetricRowView>,
    pub charts: Vec<ChartSeries>,
    pub advisory: AdvisoryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionView {
    pub factor: String,
    pub label: String,
    pub sensitivity: f64,
    pub raw_value: f64,
    pub normalized: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabAssessmentView {
    pub title: &'static str,
    pub score: f64,
    pub score_pct: String,
    pub category: String,
    pub contributions: Vec<ContributionView>,
    pub charts: Vec<ChartSeries>,
    pub advisory: AdvisoryView,
}
