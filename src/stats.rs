use crate::load::iso::is_african_iso2;
use crate::types::enriched::EnrichedCountry;
use crate::types::record::{Country, Study, Tool, TECHNOLOGY_COLUMNS};
use serde::Serialize;
use std::collections::BTreeMap;

pub const POWER_POOLS: [&str; 5] = ["COMELEC", "WAPP", "EAPP", "CAPP", "SAPP"];

const AFRICAN_FEATURES: [&str; 4] = [
    "informal_economy",
    "biomass_charcoal",
    "power_reliability",
    "urbanization",
];

#[derive(Debug, Clone, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub label: String,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    AfricanLed,
    NonAfrican,
    Mixed,
}

/// Classify a delimited developer-origin cell by the first two letters of
/// each token against the African ISO-2 set.
pub fn classify_origin(origin: &str) -> Origin {
    let codes: Vec<String> = origin
        .replace(',', ";")
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .chars()
                .take(2)
                .collect::<String>()
                .to_ascii_uppercase()
        })
        .collect();
    if codes.is_empty() {
        return Origin::NonAfrican;
    }
    let has_african = codes.iter().any(|code| is_african_iso2(code));
    let has_non_african = codes.iter().any(|code| !is_african_iso2(code));
    match (has_african, has_non_african) {
        (true, true) => Origin::Mixed,
        (true, false) => Origin::AfricanLed,
        _ => Origin::NonAfrican,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub n_countries: usize,
    pub n_studies: usize,
    pub n_tools: usize,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    /// The four African-context features, % of studies covering each.
    pub feature_coverage: Vec<Coverage>,
    pub sdg_7: Coverage,
    pub sdg_13: Coverage,
    pub ndc_mention: Coverage,
    /// Studies used ad hoc or occasionally rather than routinely.
    pub ad_hoc_usage: Coverage,
    /// Studies without local (African-led) ownership.
    pub no_local_ownership: Coverage,
    pub origin_breakdown: Vec<LabelCount>,
    pub license_distribution: Vec<LabelCount>,
    pub frequency_distribution: Vec<LabelCount>,
    pub scale_distribution: Vec<LabelCount>,
    pub technology_coverage: Vec<Coverage>,
    pub power_pool_studies: Vec<LabelCount>,
    pub top_tools: Vec<LabelCount>,
    pub avg_gap_score: f64,
    pub avg_readiness_score: f64,
    pub fingerprint: String,
}

pub fn summarize(
    countries: &[Country],
    studies: &[Study],
    tools: &[Tool],
    enriched: &[EnrichedCountry],
    fingerprint: &str,
) -> InventorySummary {
    let n = studies.len();

    let feature_coverage = AFRICAN_FEATURES
        .iter()
        .map(|feature| {
            let count = studies
                .iter()
                .filter(|study| feature_flag(study, feature))
                .count();
            coverage(feature, count, n)
        })
        .collect();

    let technology_coverage = TECHNOLOGY_COLUMNS
        .iter()
        .map(|tech| {
            let count = studies
                .iter()
                .filter(|study| study.has_technology(tech))
                .count();
            coverage(tech, count, n)
        })
        .collect();

    let mut origin_counts = BTreeMap::new();
    for study in studies {
        let label = match classify_origin(&study.developer_origin) {
            Origin::AfricanLed => "african_led",
            Origin::NonAfrican => "non_african",
            Origin::Mixed => "mixed",
        };
        *origin_counts.entry(label.to_string()).or_insert(0) += 1;
    }

    let mut top_tools: Vec<LabelCount> = tools
        .iter()
        .filter(|tool| tool.nb_studies_in_inventory > 0)
        .map(|tool| LabelCount {
            label: tool.tool_name.clone(),
            count: tool.nb_studies_in_inventory as usize,
        })
        .collect();
    top_tools.sort_by(|a, b| b.count.cmp(&a.count));
    top_tools.truncate(10);

    InventorySummary {
        n_countries: countries.len(),
        n_studies: n,
        n_tools: tools.len(),
        year_min: studies.iter().filter_map(|study| study.year).min(),
        year_max: studies.iter().filter_map(|study| study.year).max(),
        feature_coverage,
        sdg_7: coverage("sdg_7", studies.iter().filter(|s| s.sdg_7).count(), n),
        sdg_13: coverage("sdg_13", studies.iter().filter(|s| s.sdg_13).count(), n),
        ndc_mention: coverage(
            "ndc_mention",
            studies.iter().filter(|s| s.ndc_mention).count(),
            n,
        ),
        ad_hoc_usage: coverage(
            "ad_hoc_usage",
            studies
                .iter()
                .filter(|s| matches!(s.frequency.as_str(), "ad_hoc" | "occasional"))
                .count(),
            n,
        ),
        no_local_ownership: coverage(
            "no_local_ownership",
            studies.iter().filter(|s| !s.local_ownership).count(),
            n,
        ),
        origin_breakdown: origin_counts
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect(),
        license_distribution: distribution(studies.iter().map(|s| s.license.as_str())),
        frequency_distribution: distribution(studies.iter().map(|s| s.frequency.as_str())),
        scale_distribution: distribution(studies.iter().map(|s| s.scale.as_str())),
        technology_coverage,
        power_pool_studies: pool_study_counts(countries, studies),
        top_tools,
        avg_gap_score: mean(enriched.iter().map(|e| f64::from(e.gap_score))),
        avg_readiness_score: mean(enriched.iter().map(|e| e.readiness_score)),
        fingerprint: fingerprint.to_string(),
    }
}

/// Studies per power pool: a study counts for a pool when it covers at
/// least one member country, once per pool.
pub fn pool_study_counts(countries: &[Country], studies: &[Study]) -> Vec<LabelCount> {
    POWER_POOLS
        .iter()
        .map(|pool| {
            let members: Vec<&Country> = countries
                .iter()
                .filter(|country| country.power_pools.iter().any(|p| p == pool))
                .collect();
            let count = studies
                .iter()
                .filter(|study| {
                    members
                        .iter()
                        .any(|member| study.countries.contains_code(&member.iso_code))
                })
                .count();
            LabelCount {
                label: pool.to_string(),
                count,
            }
        })
        .collect()
}

fn feature_flag(study: &Study, feature: &str) -> bool {
    match feature {
        "informal_economy" => study.informal_economy,
        "biomass_charcoal" => study.biomass_charcoal,
        "power_reliability" => study.power_reliability,
        _ => study.urbanization,
    }
}

fn coverage(label: &str, count: usize, total: usize) -> Coverage {
    let pct = if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64 * 1000.0).round() / 10.0
    };
    Coverage {
        label: label.to_string(),
        count,
        pct,
    }
}

fn distribution<'a>(values: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts = BTreeMap::new();
    for value in values {
        let label = if value.is_empty() { "unspecified" } else { value };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return 0.0;
    }
    collected.iter().sum::<f64>() / collected.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich;
    use crate::types::record::{Capacity, CountrySet, DataAvailability};

    fn country(iso: &str, pools: &[&str]) -> Country {
        Country {
            name: iso.to_string(),
            iso_code: iso.to_string(),
            iso3: None,
            region: "west".to_string(),
            power_pools: pools.iter().map(|p| p.to_string()).collect(),
            electrification_rate: 60.0,
            capacity: Capacity::Partial,
            data_availability: DataAvailability::Moderate,
            has_ndc: true,
            has_lts: false,
            nb_models_applied: 2,
            nb_models_national: 1,
        }
    }

    fn study(id: u32, countries: &str, origin: &str, frequency: &str) -> Study {
        Study {
            id,
            model_name: format!("model-{id}"),
            authors: String::new(),
            year: Some(2015 + id as i32),
            scale: "national".to_string(),
            approach: "bottom-up".to_string(),
            method: "simulation".to_string(),
            countries: CountrySet::parse(countries),
            informal_economy: id == 1,
            biomass_charcoal: false,
            power_reliability: false,
            urbanization: false,
            sdg_7: true,
            sdg_13: false,
            ndc_mention: false,
            local_ownership: id == 1,
            license: "open".to_string(),
            frequency: frequency.to_string(),
            developer_origin: origin.to_string(),
            technologies: vec!["solar".to_string()],
        }
    }

    #[test]
    fn classify_origin_handles_mixed_and_empty() {
        assert_eq!(classify_origin("SN"), Origin::AfricanLed);
        assert_eq!(classify_origin("KE; TZ"), Origin::AfricanLed);
        assert_eq!(classify_origin("GB, SN"), Origin::Mixed);
        assert_eq!(classify_origin("DE"), Origin::NonAfrican);
        assert_eq!(classify_origin(""), Origin::NonAfrican);
    }

    #[test]
    fn summarize_computes_feature_and_usage_percentages() {
        let countries = vec![country("SN", &["WAPP"]), country("KE", &["EAPP"])];
        let studies = vec![
            study(1, "SN", "SN", "ad_hoc"),
            study(2, "SN KE", "GB", "routine"),
        ];
        let tools = vec![];
        let enriched = enrich::enrich(&countries, &studies);

        let summary = summarize(&countries, &studies, &tools, &enriched, "abc123");
        assert_eq!(summary.n_studies, 2);
        assert_eq!(summary.feature_coverage[0].count, 1);
        assert_eq!(summary.feature_coverage[0].pct, 50.0);
        assert_eq!(summary.ad_hoc_usage.count, 1);
        assert_eq!(summary.no_local_ownership.count, 1);
        assert_eq!(summary.year_min, Some(2016));
        assert_eq!(summary.year_max, Some(2017));
        assert_eq!(summary.fingerprint, "abc123");
    }

    #[test]
    fn summarize_is_total_over_empty_tables() {
        let summary = summarize(&[], &[], &[], &[], "");
        assert_eq!(summary.n_studies, 0);
        assert_eq!(summary.avg_gap_score, 0.0);
        assert_eq!(summary.sdg_7.pct, 0.0);
    }

    #[test]
    fn pool_counts_count_each_study_once_per_pool() {
        let countries = vec![
            country("SN", &["WAPP"]),
            country("GM", &["WAPP"]),
            country("KE", &["EAPP"]),
        ];
        // Covers two WAPP members but counts once for WAPP.
        let studies = vec![study(1, "SN GM", "SN", "ad_hoc")];
        let counts = pool_study_counts(&countries, &studies);
        let wapp = counts.iter().find(|c| c.label == "WAPP").expect("WAPP row");
        let eapp = counts.iter().find(|c| c.label == "EAPP").expect("EAPP row");
        assert_eq!(wapp.count, 1);
        assert_eq!(eapp.count, 0);
    }
}
