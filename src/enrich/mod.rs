pub mod gap;
pub mod readiness;

use crate::types::enriched::EnrichedCountry;
use crate::types::record::{code_pattern, Country, Study};

/// Studies covering the given ISO-2 code: word-boundary match against each
/// study's raw countries field, preserving source order.
pub fn studies_for_country<'a>(studies: &'a [Study], iso: &str) -> Vec<&'a Study> {
    let pattern = code_pattern(iso);
    studies
        .iter()
        .filter(|study| pattern.is_match(study.countries.raw()))
        .collect()
}

/// Fraction of the four African-context features answered yes by at least
/// one of the matched studies. Presence across studies, not a per-study
/// average: one covering study credits the country no matter how many
/// other studies lack the feature.
pub fn feature_ratio(matched: &[&Study]) -> f64 {
    if matched.is_empty() {
        return 0.0;
    }
    let present = [
        matched.iter().any(|study| study.informal_economy),
        matched.iter().any(|study| study.biomass_charcoal),
        matched.iter().any(|study| study.power_reliability),
        matched.iter().any(|study| study.urbanization),
    ]
    .into_iter()
    .filter(|covered| *covered)
    .count();
    present as f64 / 4.0
}

/// Pure mapping from the (countries, studies) snapshot to one enriched
/// record per country. Deterministic and idempotent; the inputs are never
/// mutated.
pub fn enrich(countries: &[Country], studies: &[Study]) -> Vec<EnrichedCountry> {
    countries
        .iter()
        .map(|country| enrich_country(country, studies))
        .collect()
}

fn enrich_country(country: &Country, studies: &[Study]) -> EnrichedCountry {
    let matched = studies_for_country(studies, &country.iso_code);
    let ratio = feature_ratio(&matched);
    EnrichedCountry {
        n_studies_actual: matched.len(),
        feature_ratio: ratio,
        gap_score: gap::gap_score(country, ratio),
        readiness_score: readiness::readiness_score(country),
        country: country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{Capacity, CountrySet, DataAvailability};

    fn country(iso: &str) -> Country {
        Country {
            name: iso.to_string(),
            iso_code: iso.to_string(),
            iso3: None,
            region: "west".to_string(),
            power_pools: vec![],
            electrification_rate: 50.0,
            capacity: Capacity::Partial,
            data_availability: DataAvailability::Moderate,
            has_ndc: true,
            has_lts: false,
            nb_models_applied: 4,
            nb_models_national: 1,
        }
    }

    fn study(id: u32, countries: &str, informal: bool) -> Study {
        Study {
            id,
            model_name: format!("model-{id}"),
            authors: String::new(),
            year: Some(2020),
            scale: "national".to_string(),
            approach: "bottom-up".to_string(),
            method: "optimization".to_string(),
            countries: CountrySet::parse(countries),
            informal_economy: informal,
            biomass_charcoal: false,
            power_reliability: false,
            urbanization: false,
            sdg_7: false,
            sdg_13: false,
            ndc_mention: false,
            local_ownership: false,
            license: "open".to_string(),
            frequency: "ad_hoc".to_string(),
            developer_origin: String::new(),
            technologies: vec![],
        }
    }

    #[test]
    fn membership_requires_whole_tokens() {
        let studies = vec![study(1, "SN, GM", false)];
        assert_eq!(studies_for_country(&studies, "SN").len(), 1);
        assert_eq!(studies_for_country(&studies, "GM").len(), 1);
        assert_eq!(studies_for_country(&studies, "S").len(), 0);
        assert_eq!(studies_for_country(&studies, "N").len(), 0);
    }

    #[test]
    fn feature_ratio_counts_presence_not_average() {
        // One study with informal_economy among many without: still 1/4.
        let mut studies = vec![study(1, "SN", true)];
        for id in 2..=12 {
            studies.push(study(id, "SN", false));
        }
        let matched = studies_for_country(&studies, "SN");
        assert_eq!(feature_ratio(&matched), 0.25);
    }

    #[test]
    fn feature_ratio_is_zero_without_studies() {
        assert_eq!(feature_ratio(&[]), 0.0);
    }

    #[test]
    fn enrich_is_deterministic() {
        let countries = vec![country("SN"), country("GM")];
        let studies = vec![study(1, "SN GM", true), study(2, "SN", false)];

        let first = enrich(&countries, &studies);
        let second = enrich(&countries, &studies);

        assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.gap_score, b.gap_score);
            assert_eq!(a.readiness_score, b.readiness_score);
            assert_eq!(a.feature_ratio, b.feature_ratio);
            assert_eq!(a.n_studies_actual, b.n_studies_actual);
        }
        assert_eq!(first[0].n_studies_actual, 2);
        assert_eq!(first[1].n_studies_actual, 1);
    }

    #[test]
    fn enrich_handles_zero_row_tables() {
        assert!(enrich(&[], &[]).is_empty());
        let countries = vec![country("SN")];
        let enriched = enrich(&countries, &[]);
        assert_eq!(enriched[0].n_studies_actual, 0);
        assert_eq!(enriched[0].feature_ratio, 0.0);
        // Gap still scores from the country's own fields.
        assert_eq!(enriched[0].gap_score, 71);
    }
}
