use super::{country_cells, study_cells, tool_cells, yes_no};
use super::{COUNTRY_COLUMNS, STUDY_COLUMNS, TOOL_COLUMNS};
use crate::stats::InventorySummary;
use crate::types::enriched::{CountryDetail, EnrichedCountry};
use crate::types::record::Study;
use crate::types::recommend::ScoredTool;

pub fn summary(summary: &InventorySummary) -> String {
    let mut output = String::new();
    output.push_str("Inventory summary\n\n");
    output.push_str(&format!(
        "countries: {}  studies: {}  tools: {}\n",
        summary.n_countries, summary.n_studies, summary.n_tools
    ));
    if let (Some(from), Some(to)) = (summary.year_min, summary.year_max) {
        output.push_str(&format!("period: {from}-{to}\n"));
    }
    output.push_str(&format!(
        "average gap score: {:.0}/100  average readiness: {:.1}/10\n\n",
        summary.avg_gap_score, summary.avg_readiness_score
    ));

    output.push_str("African feature coverage:\n");
    for feature in &summary.feature_coverage {
        output.push_str(&format!(
            "  {:<18} {:>3} studies ({:.1}%)\n",
            feature.label, feature.count, feature.pct
        ));
    }
    output.push('\n');

    output.push_str("Alignment and usage:\n");
    for entry in [
        &summary.sdg_7,
        &summary.sdg_13,
        &summary.ndc_mention,
        &summary.ad_hoc_usage,
        &summary.no_local_ownership,
    ] {
        output.push_str(&format!(
            "  {:<18} {:>3} studies ({:.1}%)\n",
            entry.label, entry.count, entry.pct
        ));
    }
    output.push('\n');

    for (heading, rows) in [
        ("Developer origin", &summary.origin_breakdown),
        ("License", &summary.license_distribution),
        ("Frequency", &summary.frequency_distribution),
        ("Scale", &summary.scale_distribution),
        ("Studies by power pool", &summary.power_pool_studies),
    ] {
        output.push_str(&format!("{heading}:\n"));
        for row in rows {
            output.push_str(&format!("  {:<18} {}\n", row.label, row.count));
        }
        output.push('\n');
    }

    output.push_str("Technology coverage:\n");
    for tech in &summary.technology_coverage {
        output.push_str(&format!("  {:<12} {:.1}%\n", tech.label, tech.pct));
    }
    output.push('\n');

    if !summary.top_tools.is_empty() {
        output.push_str("Most-applied tools:\n");
        for tool in &summary.top_tools {
            output.push_str(&format!("  {:<24} {}\n", tool.label, tool.count));
        }
        output.push('\n');
    }

    output.push_str(&format!("dataset fingerprint: {}\n", summary.fingerprint));
    output
}

pub fn countries(title: &str, rows: &[EnrichedCountry]) -> String {
    let mut output = format!("{title}\n\n");
    if rows.is_empty() {
        output.push_str("no countries match the current filters\n");
        return output;
    }
    let cells: Vec<Vec<String>> = rows.iter().map(country_cells).collect();
    output.push_str(&layout(&COUNTRY_COLUMNS, &cells));
    output
}

pub fn studies(rows: &[&Study]) -> String {
    if rows.is_empty() {
        return "no studies match the current filters\n".to_string();
    }
    let cells: Vec<Vec<String>> = rows.iter().map(|study| study_cells(study)).collect();
    let mut output = layout(&STUDY_COLUMNS, &cells);
    output.push_str(&format!("\n{} studies shown\n", rows.len()));
    output
}

pub fn country_detail(detail: &CountryDetail) -> String {
    let enriched = &detail.enriched;
    let country = &enriched.country;
    let mut output = format!("{} ({})\n\n", country.name, country.iso_code);
    output.push_str(&format!(
        "region: {}  power pools: {}\n",
        country.region,
        if country.power_pools.is_empty() {
            "-".to_string()
        } else {
            country.power_pools.join(", ")
        }
    ));
    output.push_str(&format!(
        "studies: {}  gap score: {}/100  readiness: {:.1}/10\n",
        enriched.n_studies_actual, enriched.gap_score, enriched.readiness_score
    ));
    output.push_str(&format!(
        "electrification: {:.1}%  data: {:?}  capacity: {:?}\n",
        country.electrification_rate,
        country.data_availability,
        country.capacity
    ));
    output.push_str(&format!(
        "NDC: {}  long-term strategy: {}\n\n",
        yes_no(country.has_ndc),
        yes_no(country.has_lts)
    ));

    if detail.studies.is_empty() {
        output.push_str("no studies cover this country\n");
    } else {
        let refs: Vec<&Study> = detail.studies.iter().collect();
        output.push_str(&studies(&refs));
    }
    output
}

pub fn tools(rows: &[ScoredTool]) -> String {
    if rows.is_empty() {
        return "no tools in inventory\n".to_string();
    }
    let mut output = String::from("Recommended tools\n\n");
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(index, scored)| tool_cells(index + 1, scored))
        .collect();
    output.push_str(&layout(&TOOL_COLUMNS, &cells));

    let best = &rows[0];
    output.push_str(&format!(
        "\nbest match: {} ({}), best for: {}\n",
        best.tool.tool_name,
        best.tool.license.label(),
        if best.tool.best_for.is_empty() {
            "-".to_string()
        } else {
            best.tool.best_for.join(", ")
        }
    ));
    output
}

/// Space-padded column layout with a dashed header rule.
fn layout(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|name| name.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for (index, name) in columns.iter().enumerate() {
        output.push_str(&pad(name, widths[index]));
        if index + 1 < columns.len() {
            output.push_str("  ");
        }
    }
    output.push('\n');
    let rule_width: usize = widths.iter().sum::<usize>() + 2 * (columns.len() - 1);
    output.push_str(&"-".repeat(rule_width));
    output.push('\n');
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            output.push_str(&pad(cell, widths[index]));
            if index + 1 < row.len() {
                output.push_str("  ");
            }
        }
        output.push('\n');
    }
    output
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}
