pub mod cell;
pub mod fingerprint;
pub mod iso;
pub mod table;

use crate::error::{ObservatoryError, Result};
use crate::types::config::ObservatoryConfig;
use crate::types::record::{
    Capacity, Country, CountrySet, DataAvailability, LearningCurve, License, Programming, Study,
    Tool, TECHNOLOGY_COLUMNS,
};
use std::path::Path;
use table::{Row, Table};
use tracing::debug;
use walkdir::WalkDir;

pub const DELIMITER: char = ';';

/// The three source tables, loaded read-only once per invocation, plus the
/// content fingerprint acting as the cache key for derived views.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub studies: Vec<Study>,
    pub tools: Vec<Tool>,
    pub fingerprint: String,
}

pub fn load(root: &Path, config: Option<&ObservatoryConfig>) -> Result<Dataset> {
    let default_config = ObservatoryConfig::default();
    let config = config.unwrap_or(&default_config);

    let countries_bytes = read_table_file(root, config.countries_file())?;
    let studies_bytes = read_table_file(root, config.studies_file())?;
    let tools_bytes = read_table_file(root, config.tools_file())?;

    let countries_table = Table::parse(&countries_bytes, DELIMITER);
    let studies_table = Table::parse(&studies_bytes, DELIMITER);
    let tools_table = Table::parse(&tools_bytes, DELIMITER);
    let countries = parse_countries(&countries_table);
    let studies = parse_studies(&studies_table);
    let tools = parse_tools(&tools_table);
    debug!(
        countries = countries.len(),
        studies = studies.len(),
        tools = tools.len(),
        raw_rows = countries_table.len() + studies_table.len() + tools_table.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        countries,
        studies,
        tools,
        fingerprint: fingerprint::dataset_fingerprint(&[
            &countries_bytes,
            &studies_bytes,
            &tools_bytes,
        ]),
    })
}

fn read_table_file(root: &Path, name: &str) -> Result<Vec<u8>> {
    let path = root.join(name);
    if !path.exists() {
        return Err(ObservatoryError::TableNotFound(
            path.display().to_string(),
            available_files_hint(root),
        ));
    }
    Ok(std::fs::read(&path)?)
}

fn available_files_hint(root: &Path) -> String {
    let mut names: Vec<String> = WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(".csv"))
        .collect();
    names.sort();
    if names.is_empty() {
        String::new()
    } else {
        format!(" (available: {})", names.join(", "))
    }
}

fn parse_countries(table: &Table) -> Vec<Country> {
    table
        .rows()
        .filter_map(|row| parse_country(&row))
        .collect()
}

fn parse_country(row: &Row<'_>) -> Option<Country> {
    let iso_code = row.text("iso_code").to_ascii_uppercase();
    if iso_code.is_empty() {
        debug!("dropping country row with blank iso_code");
        return None;
    }

    Some(Country {
        name: row.text("country_name"),
        iso3: iso::iso3_for(&iso_code).map(str::to_string),
        region: row.text("region").to_ascii_lowercase(),
        power_pools: cell::list(row.get("power_pool").unwrap_or("")),
        electrification_rate: cell::lenient_f64(row.get("electrification_rate").unwrap_or(""))
            .unwrap_or(0.0),
        capacity: Capacity::parse(row.get("has_institutional_capacity").unwrap_or("no")),
        data_availability: DataAvailability::parse(row.get("data_availability").unwrap_or("poor")),
        has_ndc: cell::yes(row.get("has_ndc").unwrap_or("")),
        has_lts: cell::yes(row.get("has_lts").unwrap_or("")),
        nb_models_applied: count(row, "nb_models_applied"),
        nb_models_national: count(row, "nb_models_national"),
        iso_code,
    })
}

fn parse_studies(table: &Table) -> Vec<Study> {
    table.rows().filter_map(|row| parse_study(&row)).collect()
}

fn parse_study(row: &Row<'_>) -> Option<Study> {
    // Rows without a parseable id are trailing spreadsheet noise.
    let id = match cell::lenient_i64(row.get("id").unwrap_or("")) {
        Some(id) if id >= 0 => id as u32,
        _ => {
            debug!("dropping study row with blank or unparseable id");
            return None;
        }
    };

    let scale = {
        let raw = row.text("scale").to_ascii_lowercase();
        if raw.is_empty() {
            "unspecified".to_string()
        } else {
            raw
        }
    };

    let technologies = TECHNOLOGY_COLUMNS
        .iter()
        .filter(|column| cell::yes(row.get(column).unwrap_or("")))
        .map(|column| column.to_string())
        .collect();

    Some(Study {
        id,
        model_name: row.text("model_name"),
        authors: row.text("authors"),
        year: cell::lenient_i64(row.get("year").unwrap_or("")).map(|year| year as i32),
        scale,
        approach: row.text("approach").to_ascii_lowercase(),
        method: row.text("method").to_ascii_lowercase(),
        countries: CountrySet::parse(row.get("countries").unwrap_or("")),
        informal_economy: cell::yes(row.get("informal_economy").unwrap_or("")),
        biomass_charcoal: cell::yes(row.get("biomass_charcoal").unwrap_or("")),
        power_reliability: cell::yes(row.get("power_reliability").unwrap_or("")),
        urbanization: cell::yes(row.get("urbanization").unwrap_or("")),
        sdg_7: cell::yes(row.get("sdg_7").unwrap_or("")),
        sdg_13: cell::yes(row.get("sdg_13").unwrap_or("")),
        ndc_mention: cell::yes(row.get("ndc_mention").unwrap_or("")),
        local_ownership: cell::yes(row.get("local_ownership").unwrap_or("")),
        license: row.text("open_source").to_ascii_lowercase(),
        frequency: row.text("frequency").to_ascii_lowercase(),
        developer_origin: row.text("developer_origin"),
        technologies,
    })
}

fn parse_tools(table: &Table) -> Vec<Tool> {
    table.rows().filter_map(|row| parse_tool(&row)).collect()
}

fn parse_tool(row: &Row<'_>) -> Option<Tool> {
    let tool_name = row.text("tool_name");
    if tool_name.is_empty() {
        debug!("dropping tool row with blank tool_name");
        return None;
    }

    Some(Tool {
        tool_name,
        full_name: row.text("full_name"),
        license: License::parse(row.get("license").unwrap_or("")),
        // A missing column reads as the least demanding band; a present but
        // unrecognized value matches no scoring rule.
        learning_curve: row
            .get("learning_curve")
            .map(LearningCurve::parse)
            .unwrap_or(LearningCurve::Medium),
        programming_required: row
            .get("programming_required")
            .map(Programming::parse)
            .unwrap_or(Programming::None),
        free_for_developing: cell::yes(row.get("free_for_developing").unwrap_or("")),
        training_available: cell::yes(row.get("training_available").unwrap_or("")),
        nb_studies_in_inventory: count(row, "nb_studies_in_inventory"),
        best_for: cell::list(&row.text("best_for").to_ascii_lowercase()),
        cost_usd: cell::lenient_cost(row.get("cost_usd").unwrap_or("")),
    })
}

fn count(row: &Row<'_>, column: &str) -> u32 {
    cell::lenient_i64(row.get(column).unwrap_or(""))
        .filter(|value| *value >= 0)
        .map(|value| value as u32)
        .unwrap_or(0)
}
