use super::super::domain::{
    Advisory, ChartKind, ChartSpec, HazardKind, HazardProfile, ProfileMetric,
};
use super::super::risk::{RiskAssessment, RiskModel};
use super::views::{
    AdvisoryView, ChartPoint, ChartSeries, ContributionView, HabAssessmentView,
    HazardReportView, HazardSummaryEntry, MetricRowView,
};

const HAB_TITLE: &str = "Harmful Algal Bloom (HAB) Risk Assessment";

/// Formats a fraction as a percentage with two decimals, e.g. `0.3` -> `"30.00%"`.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn hazard_index() -> Vec<HazardSummaryEntry> {
    HazardKind::ordered()
        .into_iter()
        .map(|kind| HazardSummaryEntry {
            kind,
            key: kind.key(),
            label: kind.label(),
            uses_imagery: kind.uses_imagery(),
        })
        .collect()
}

impl Advisory {
    pub fn to_view(&self) -> AdvisoryView {
        AdvisoryView {
            tone: self.tone,
            tone_label: self.tone.label(),
            heading: self.heading.clone(),
            points: self.points.clone(),
        }
    }
}

impl HazardProfile {
    pub fn report(&self) -> HazardReportView {
        let rows = self
            .entries
            .iter()
            .map(|entry| MetricRowView {
                category: entry.category.clone(),
                primary: entry.primary,
                primary_pct: format_pct(entry.primary),
                secondary: entry.secondary,
                secondary_pct: format_pct(entry.secondary),
            })
            .collect();

        let charts = self
            .charts
            .iter()
            .map(|spec| {
                let points = self
                    .entries
                    .iter()
                    .map(|entry| {
                        let value = match spec.metric {
                            ProfileMetric::Primary => entry.primary,
                            ProfileMetric::Secondary => entry.secondary,
                        };
                        (entry.category.clone(), value)
                    })
                    .collect();
                series(spec, points)
            })
            .collect();

        HazardReportView {
            kind: self.kind,
            kind_label: self.kind.label(),
            title: self.title.clone(),
            primary_metric: self.primary_metric.clone(),
            secondary_metric: self.secondary_metric.clone(),
            rows,
            charts,
            advisory: self.advisory.to_view(),
        }
    }
}

pub fn hab_assessment_view(
    model: &RiskModel,
    assessment: &RiskAssessment,
    advisory: &Advisory,
) -> HabAssessmentView {
    let contributions = assessment
        .contributions
        .iter()
        .map(|contribution| {
            let spec = model.factor(&contribution.factor);
            ContributionView {
                factor: contribution.factor.clone(),
                label: spec
                    .map(|spec| spec.label.clone())
                    .unwrap_or_else(|| contribution.factor.clone()),
                sensitivity: spec.map(|spec| spec.sensitivity).unwrap_or_default(),
                raw_value: contribution.raw_value,
                normalized: contribution.normalized,
                weighted: contribution.weighted,
            }
        })
        .collect();

    let sensitivities = ChartSpec::bar(
        "HAB Risk Factor Sensitivities",
        ProfileMetric::Primary,
        "Environmental Factors",
        "Sensitivity Weight",
    );
    let points = model
        .factors
        .iter()
        .map(|factor| (factor.label.clone(), factor.sensitivity))
        .collect();

    HabAssessmentView {
        title: HAB_TITLE,
        score: assessment.score,
        score_pct: format_pct(assessment.score),
        category: assessment.category.clone(),
        contributions,
        charts: vec![series(&sensitivities, points)],
        advisory: advisory.to_view(),
    }
}

fn series(spec: &ChartSpec, values: Vec<(String, f64)>) -> ChartSeries {
    let total: f64 = values.iter().map(|(_, value)| value).sum();
    let points = values
        .into_iter()
        .map(|(label, value)| {
            let value = match spec.kind {
                ChartKind::Pie if total > 0.0 => value / total,
                ChartKind::Pie => 0.0,
                ChartKind::Bar => value,
            };
            ChartPoint { label, value }
        })
        .collect();

    ChartSeries {
        title: spec.title.clone(),
        kind: spec.kind,
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        points,
    }
}
