use crate::infra::build_catalog;
use chrono::{DateTime, Local, Utc};
use clap::Args;
use marine_guardian::config::AppConfig;
use marine_guardian::error::AppError;
use marine_guardian::hazards::hab::{NUTRIENT_LEVELS, PH_LEVEL, SALINITY, WATER_TEMPERATURE};
use marine_guardian::hazards::report::format_pct;
use marine_guardian::hazards::report::views::{
    AdvisoryView, ChartSeries, HabAssessmentView, HazardReportView,
};
use marine_guardian::hazards::{HazardKind, HazardService};
use marine_guardian::telemetry;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct HazardShowArgs {
    /// Hazard key (plastic_waste, coral_health, oil_spill, harmful_algal_bloom)
    pub(crate) kind: String,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct HabAssessArgs {
    /// Water temperature in °C (20-35). Defaults to 25.
    #[arg(long)]
    pub(crate) temperature: Option<f64>,
    /// Nutrient concentration (0-10). Defaults to 2.
    #[arg(long)]
    pub(crate) nutrients: Option<f64>,
    /// Salinity (30-40). Defaults to 35.
    #[arg(long)]
    pub(crate) salinity: Option<f64>,
    /// Water pH (6-9). Defaults to 8.
    #[arg(long)]
    pub(crate) ph: Option<f64>,
    /// Alternative bloom risk model as JSON
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Emit the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the bloom risk assessment at the end of the demo.
    #[arg(long)]
    pub(crate) skip_hab: bool,
}

#[derive(Serialize)]
struct HabAssessmentOutput<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    assessment: &'a HabAssessmentView,
}

fn cli_service(model: Option<&Path>) -> Result<HazardService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;
    let catalog = build_catalog(&config.scoring, model)?;
    Ok(HazardService::new(catalog))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_hazard_list() -> Result<(), AppError> {
    let service = cli_service(None)?;
    println!("Available analyses");
    for entry in service.index() {
        let input = if entry.uses_imagery {
            "image upload"
        } else {
            "environmental readings"
        };
        println!("- {} ({}) | input: {}", entry.label, entry.key, input);
    }
    Ok(())
}

pub(crate) fn run_hazard_show(args: HazardShowArgs) -> Result<(), AppError> {
    let HazardShowArgs { kind, json } = args;
    let hazard = HazardKind::from_key(&kind).ok_or(AppError::UnknownHazard(kind))?;
    let service = cli_service(None)?;

    if hazard == HazardKind::HarmfulAlgalBloom {
        let view = service.assess(&service.controls().defaults())?;
        return emit_assessment(&view, json);
    }

    let view = service
        .report(hazard)
        .ok_or_else(|| AppError::UnknownHazard(hazard.key().to_string()))?;
    if json {
        print_json(&view)
    } else {
        print!("{}", format_hazard_report(&view));
        Ok(())
    }
}

pub(crate) fn run_hab_assess(args: HabAssessArgs) -> Result<(), AppError> {
    let service = cli_service(args.model.as_deref())?;
    let view = service.assess_with_defaults(supplied_readings(&args))?;
    emit_assessment(&view, args.json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = cli_service(None)?;

    println!("Marine Ecosystem Guardian demo");
    println!("Generated {}", Local::now().format("%Y-%m-%d %H:%M"));

    for kind in HazardKind::ordered() {
        if let Some(view) = service.report(kind) {
            println!();
            print!("{}", format_hazard_report(&view));
        }
    }

    if args.skip_hab {
        return Ok(());
    }

    println!();
    let view = service.assess(&service.controls().defaults())?;
    print!("{}", format_hab_assessment(&view));
    Ok(())
}

fn supplied_readings(args: &HabAssessArgs) -> HashMap<String, f64> {
    [
        (WATER_TEMPERATURE, args.temperature),
        (NUTRIENT_LEVELS, args.nutrients),
        (SALINITY, args.salinity),
        (PH_LEVEL, args.ph),
    ]
    .into_iter()
    .filter_map(|(factor, value)| value.map(|value| (factor.to_string(), value)))
    .collect()
}

fn emit_assessment(view: &HabAssessmentView, json: bool) -> Result<(), AppError> {
    if json {
        print_json(&HabAssessmentOutput {
            generated_at: Utc::now(),
            assessment: view,
        })
    } else {
        print!("{}", format_hab_assessment(view));
        Ok(())
    }
}

pub(crate) fn format_hazard_report(view: &HazardReportView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);
    for row in &view.rows {
        let _ = writeln!(
            out,
            "- {}: {} {} | {} {}",
            row.category,
            view.primary_metric,
            row.primary_pct,
            view.secondary_metric,
            row.secondary_pct
        );
    }
    for chart in &view.charts {
        write_chart(&mut out, chart);
    }
    write_advisory(&mut out, &view.advisory);
    out
}

pub(crate) fn format_hab_assessment(view: &HabAssessmentView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);
    let _ = writeln!(out, "HAB Risk Score: {}", view.score_pct);
    let _ = writeln!(out, "Risk Category: {}", view.category);
    for contribution in &view.contributions {
        let _ = writeln!(
            out,
            "- {}: reading {} | normalized {:.3} | weight {:.2} | contribution {:.4}",
            contribution.label,
            contribution.raw_value,
            contribution.normalized,
            contribution.sensitivity,
            contribution.weighted
        );
    }
    for chart in &view.charts {
        write_chart(&mut out, chart);
    }
    write_advisory(&mut out, &view.advisory);
    out
}

fn write_chart(out: &mut String, chart: &ChartSeries) {
    let _ = writeln!(out, "{} ({:?}):", chart.title, chart.kind);
    for point in &chart.points {
        let _ = writeln!(out, "  {:<28} {}", point.label, format_pct(point.value));
    }
}

fn write_advisory(out: &mut String, advisory: &AdvisoryView) {
    let _ = writeln!(out, "[{}] {}:", advisory.tone_label, advisory.heading);
    for point in &advisory.points {
        let _ = writeln!(out, "  - {point}");
    }
}
