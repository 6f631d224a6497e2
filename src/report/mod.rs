pub mod json;
pub mod md;
pub mod text;

use crate::error::ObservatoryError;
use crate::stats::InventorySummary;
use crate::types::enriched::{CountryDetail, EnrichedCountry};
use crate::types::record::Study;
use crate::types::recommend::ScoredTool;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Md,
    Json,
}

pub(crate) const COUNTRY_COLUMNS: [&str; 11] = [
    "Country",
    "ISO",
    "Region",
    "Studies",
    "Gap",
    "Readiness",
    "Electr. %",
    "Data",
    "Capacity",
    "NDC",
    "LTS",
];

pub(crate) const STUDY_COLUMNS: [&str; 9] = [
    "ID",
    "Model",
    "Authors",
    "Year",
    "Scale",
    "Approach",
    "License",
    "Frequency",
    "Countries",
];

pub(crate) const TOOL_COLUMNS: [&str; 8] = [
    "Rank",
    "Tool",
    "Score",
    "License",
    "Learning",
    "Programming",
    "Training",
    "Africa studies",
];

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let clipped: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}\u{2026}")
    }
}

pub(crate) fn country_cells(row: &EnrichedCountry) -> Vec<String> {
    let country = &row.country;
    vec![
        clip(&country.name, 24),
        country.iso_code.clone(),
        country.region.clone(),
        row.n_studies_actual.to_string(),
        row.gap_score.to_string(),
        format!("{:.1}", row.readiness_score),
        format!("{:.1}", country.electrification_rate),
        format!("{:?}", country.data_availability).to_lowercase(),
        format!("{:?}", country.capacity).to_lowercase(),
        yes_no(country.has_ndc).to_string(),
        yes_no(country.has_lts).to_string(),
    ]
}

pub(crate) fn study_cells(study: &Study) -> Vec<String> {
    vec![
        study.id.to_string(),
        clip(&study.model_name, 28),
        clip(&study.authors, 24),
        study
            .year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "-".to_string()),
        study.scale.clone(),
        study.approach.clone(),
        study.license.clone(),
        study.frequency.clone(),
        clip(
            &study
                .countries
                .codes()
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
            40,
        ),
    ]
}

pub(crate) fn tool_cells(rank: usize, scored: &ScoredTool) -> Vec<String> {
    let tool = &scored.tool;
    vec![
        rank.to_string(),
        clip(&tool.tool_name, 24),
        scored.match_score.to_string(),
        tool.license.label().to_string(),
        format!("{:?}", tool.learning_curve).to_lowercase(),
        format!("{:?}", tool.programming_required).to_lowercase(),
        yes_no(tool.training_available).to_string(),
        tool.nb_studies_in_inventory.to_string(),
    ]
}

pub fn render_summary(
    summary: &InventorySummary,
    format: OutputFormat,
) -> Result<String, ObservatoryError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ObservatoryError::Json),
        OutputFormat::Md => Ok(md::summary(summary)),
        OutputFormat::Table => Ok(text::summary(summary)),
    }
}

pub fn render_countries(
    title: &str,
    rows: &[EnrichedCountry],
    format: OutputFormat,
) -> Result<String, ObservatoryError> {
    match format {
        OutputFormat::Json => json::to_json(&rows).map_err(ObservatoryError::Json),
        OutputFormat::Md => Ok(md::countries(title, rows)),
        OutputFormat::Table => Ok(text::countries(title, rows)),
    }
}

pub fn render_studies(
    rows: &[&Study],
    format: OutputFormat,
) -> Result<String, ObservatoryError> {
    match format {
        OutputFormat::Json => json::to_json(&rows).map_err(ObservatoryError::Json),
        OutputFormat::Md => Ok(md::studies(rows)),
        OutputFormat::Table => Ok(text::studies(rows)),
    }
}

pub fn render_country_detail(
    detail: &CountryDetail,
    format: OutputFormat,
) -> Result<String, ObservatoryError> {
    match format {
        OutputFormat::Json => json::to_json(detail).map_err(ObservatoryError::Json),
        OutputFormat::Md => Ok(md::country_detail(detail)),
        OutputFormat::Table => Ok(text::country_detail(detail)),
    }
}

pub fn render_tools(
    rows: &[ScoredTool],
    format: OutputFormat,
) -> Result<String, ObservatoryError> {
    match format {
        OutputFormat::Json => json::to_json(&rows).map_err(ObservatoryError::Json),
        OutputFormat::Md => Ok(md::tools(rows)),
        OutputFormat::Table => Ok(text::tools(rows)),
    }
}
