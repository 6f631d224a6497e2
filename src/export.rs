use crate::types::enriched::EnrichedCountry;
use crate::types::record::{code_pattern, Study};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Studies covering the country within the active study filter.
    Density,
    /// National-scale model count from the countries table.
    NationalOnly,
    Gap,
    Readiness,
    Region,
    PowerPool,
}

impl Layer {
    fn name(&self) -> &'static str {
        match self {
            Layer::Density => "density",
            Layer::NationalOnly => "national_only",
            Layer::Gap => "gap_score",
            Layer::Readiness => "readiness_score",
            Layer::Region => "region",
            Layer::PowerPool => "power_pool",
        }
    }
}

/// Choropleth-ready values keyed by ISO-3, stamped with the generation time
/// and the dataset fingerprint so a consumer can detect stale exports.
#[derive(Debug, Clone, Serialize)]
pub struct MapExport {
    pub layer: String,
    pub generated_at: String,
    pub fingerprint: String,
    pub features: Vec<MapFeature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapFeature {
    pub iso3: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Build the export for one layer. Density is recomputed from the filtered
/// study set; the score layers read the enriched records as-is. Countries
/// outside the ISO-3 table cannot be drawn and are skipped.
pub fn map_export(
    enriched: &[EnrichedCountry],
    filtered_studies: &[&Study],
    layer: Layer,
    fingerprint: &str,
) -> MapExport {
    let features = enriched
        .iter()
        .filter_map(|row| {
            let iso3 = row.country.iso3.clone()?;
            let (value, label) = layer_value(row, filtered_studies, layer);
            Some(MapFeature {
                iso3,
                country: row.country.name.clone(),
                value,
                label,
            })
        })
        .collect();

    MapExport {
        layer: layer.name().to_string(),
        generated_at: Utc::now().to_rfc3339(),
        fingerprint: fingerprint.to_string(),
        features,
    }
}

fn layer_value(
    row: &EnrichedCountry,
    filtered_studies: &[&Study],
    layer: Layer,
) -> (Option<f64>, Option<String>) {
    match layer {
        Layer::Density => {
            let pattern = code_pattern(&row.country.iso_code);
            let count = filtered_studies
                .iter()
                .filter(|study| pattern.is_match(study.countries.raw()))
                .count();
            (Some(count as f64), None)
        }
        Layer::NationalOnly => (Some(f64::from(row.country.nb_models_national)), None),
        Layer::Gap => (Some(f64::from(row.gap_score)), None),
        Layer::Readiness => (Some(row.readiness_score), None),
        Layer::Region => (None, Some(row.country.region.clone())),
        Layer::PowerPool => (None, Some(row.country.power_pools.join(","))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich;
    use crate::types::record::{Capacity, Country, CountrySet, DataAvailability};

    fn country(iso: &str, iso3: Option<&str>) -> Country {
        Country {
            name: iso.to_string(),
            iso_code: iso.to_string(),
            iso3: iso3.map(str::to_string),
            region: "west".to_string(),
            power_pools: vec!["WAPP".to_string()],
            electrification_rate: 60.0,
            capacity: Capacity::Yes,
            data_availability: DataAvailability::Good,
            has_ndc: true,
            has_lts: true,
            nb_models_applied: 3,
            nb_models_national: 2,
        }
    }

    fn study(id: u32, countries: &str) -> Study {
        Study {
            id,
            model_name: format!("model-{id}"),
            authors: String::new(),
            year: Some(2018),
            scale: "national".to_string(),
            approach: "hybrid".to_string(),
            method: "simulation".to_string(),
            countries: CountrySet::parse(countries),
            informal_economy: false,
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
    fn density_layer_counts_filtered_studies_per_country() {
        let countries = vec![country("SN", Some("SEN")), country("GM", Some("GMB"))];
        let studies = vec![study(1, "SN"), study(2, "SN GM"), study(3, "KE")];
        let enriched = enrich::enrich(&countries, &studies);
        let filtered: Vec<&Study> = studies.iter().collect();

        let export = map_export(&enriched, &filtered, Layer::Density, "f");
        assert_eq!(export.layer, "density");
        assert_eq!(export.features[0].value, Some(2.0));
        assert_eq!(export.features[1].value, Some(1.0));
    }

    #[test]
    fn countries_without_iso3_are_skipped() {
        let countries = vec![country("SN", Some("SEN")), country("XX", None)];
        let enriched = enrich::enrich(&countries, &[]);

        let export = map_export(&enriched, &[], Layer::Gap, "f");
        assert_eq!(export.features.len(), 1);
        assert_eq!(export.features[0].iso3, "SEN");
    }

    #[test]
    fn categorical_layers_emit_labels_not_values() {
        let countries = vec![country("SN", Some("SEN"))];
        let enriched = enrich::enrich(&countries, &[]);

        let export = map_export(&enriched, &[], Layer::PowerPool, "f");
        assert_eq!(export.features[0].value, None);
        assert_eq!(export.features[0].label.as_deref(), Some("WAPP"));
    }
}
