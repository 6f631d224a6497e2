use super::{country_cells, study_cells, tool_cells, yes_no};
use super::{COUNTRY_COLUMNS, STUDY_COLUMNS, TOOL_COLUMNS};
use crate::stats::InventorySummary;
use crate::types::enriched::{CountryDetail, EnrichedCountry};
use crate::types::record::Study;
use crate::types::recommend::ScoredTool;

pub fn summary(summary: &InventorySummary) -> String {
    let mut output = String::new();
    output.push_str("# Inventory Summary\n\n");
    output.push_str(&format!(
        "{} countries, {} studies, {} tools",
        summary.n_countries, summary.n_studies, summary.n_tools
    ));
    if let (Some(from), Some(to)) = (summary.year_min, summary.year_max) {
        output.push_str(&format!(" ({from}-{to})"));
    }
    output.push_str(&format!(
        "\n\nAverage gap score {:.0}/100, average readiness {:.1}/10.\n\n",
        summary.avg_gap_score, summary.avg_readiness_score
    ));

    output.push_str("## African Feature Coverage\n\n");
    for feature in &summary.feature_coverage {
        output.push_str(&format!(
            "- {}: {} studies ({:.1}%)\n",
            feature.label, feature.count, feature.pct
        ));
    }

    output.push_str("\n## Alignment and Usage\n\n");
    for entry in [
        &summary.sdg_7,
        &summary.sdg_13,
        &summary.ndc_mention,
        &summary.ad_hoc_usage,
        &summary.no_local_ownership,
    ] {
        output.push_str(&format!(
            "- {}: {} studies ({:.1}%)\n",
            entry.label, entry.count, entry.pct
        ));
    }

    for (heading, rows) in [
        ("Developer Origin", &summary.origin_breakdown),
        ("License", &summary.license_distribution),
        ("Frequency", &summary.frequency_distribution),
        ("Scale", &summary.scale_distribution),
        ("Studies by Power Pool", &summary.power_pool_studies),
        ("Most-Applied Tools", &summary.top_tools),
    ] {
        if rows.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {heading}\n\n"));
        for row in rows {
            output.push_str(&format!("- {}: {}\n", row.label, row.count));
        }
    }

    output.push_str("\n## Technology Coverage\n\n");
    for tech in &summary.technology_coverage {
        output.push_str(&format!("- {}: {:.1}%\n", tech.label, tech.pct));
    }

    output.push_str(&format!(
        "\nDataset fingerprint: `{}`\n",
        summary.fingerprint
    ));
    output
}

pub fn countries(title: &str, rows: &[EnrichedCountry]) -> String {
    let mut output = format!("# {title}\n\n");
    if rows.is_empty() {
        output.push_str("No countries match the current filters.\n");
        return output;
    }
    let cells: Vec<Vec<String>> = rows.iter().map(country_cells).collect();
    output.push_str(&pipe_table(&COUNTRY_COLUMNS, &cells));
    output
}

pub fn studies(rows: &[&Study]) -> String {
    let mut output = String::from("# Studies\n\n");
    if rows.is_empty() {
        output.push_str("No studies match the current filters.\n");
        return output;
    }
    let cells: Vec<Vec<String>> = rows.iter().map(|study| study_cells(study)).collect();
    output.push_str(&pipe_table(&STUDY_COLUMNS, &cells));
    output.push_str(&format!("\n{} studies shown.\n", rows.len()));
    output
}

pub fn country_detail(detail: &CountryDetail) -> String {
    let enriched = &detail.enriched;
    let country = &enriched.country;
    let mut output = format!("# {} ({})\n\n", country.name, country.iso_code);
    output.push_str(&format!(
        "- region: {}\n- power pools: {}\n- studies: {}\n- gap score: {}/100\n- readiness: {:.1}/10\n- electrification: {:.1}%\n- NDC: {}\n- long-term strategy: {}\n\n",
        country.region,
        if country.power_pools.is_empty() {
            "-".to_string()
        } else {
            country.power_pools.join(", ")
        },
        enriched.n_studies_actual,
        enriched.gap_score,
        enriched.readiness_score,
        country.electrification_rate,
        yes_no(country.has_ndc),
        yes_no(country.has_lts),
    ));

    if detail.studies.is_empty() {
        output.push_str("No studies cover this country.\n");
    } else {
        let refs: Vec<&Study> = detail.studies.iter().collect();
        let cells: Vec<Vec<String>> = refs.iter().map(|study| study_cells(study)).collect();
        output.push_str(&pipe_table(&STUDY_COLUMNS, &cells));
    }
    output
}

pub fn tools(rows: &[ScoredTool]) -> String {
    let mut output = String::from("# Recommended Tools\n\n");
    if rows.is_empty() {
        output.push_str("No tools in inventory.\n");
        return output;
    }
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(index, scored)| tool_cells(index + 1, scored))
        .collect();
    output.push_str(&pipe_table(&TOOL_COLUMNS, &cells));
    output
}

fn pipe_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = String::new();
    output.push_str(&format!("| {} |\n", columns.join(" | ")));
    output.push_str(&format!(
        "|{}\n",
        columns.iter().map(|_| "---|").collect::<String>()
    ));
    for row in rows {
        let escaped: Vec<String> = row.iter().map(|cell| cell.replace('|', "\\|")).collect();
        output.push_str(&format!("| {} |\n", escaped.join(" | ")));
    }
    output
}
