use serde::Serialize;

pub fn to_json<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{Capacity, Country, DataAvailability};

    #[test]
    fn json_country_serializes_categoricals_as_source_labels() {
        let country = Country {
            name: "Senegal".to_string(),
            iso_code: "SN".to_string(),
            iso3: Some("SEN".to_string()),
            region: "west".to_string(),
            power_pools: vec!["WAPP".to_string()],
            electrification_rate: 70.4,
            capacity: Capacity::Partial,
            data_availability: DataAvailability::Good,
            has_ndc: true,
            has_lts: true,
            nb_models_applied: 12,
            nb_models_national: 4,
        };

        let rendered = to_json(&country).expect("json should serialize");
        assert!(rendered.contains("\"capacity\": \"partial\""));
        assert!(rendered.contains("\"data_availability\": \"good\""));
        assert!(rendered.contains("\"iso3\": \"SEN\""));
    }
}
