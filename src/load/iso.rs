/// ISO alpha-2 to alpha-3 for African nations, used to key choropleth
/// exports. Sorted by alpha-2 code.
const ISO2_TO_ISO3: [(&str, &str); 55] = [
    ("AO", "AGO"),
    ("BF", "BFA"),
    ("BI", "BDI"),
    ("BJ", "BEN"),
    ("BW", "BWA"),
    ("CD", "COD"),
    ("CF", "CAF"),
    ("CG", "COG"),
    ("CI", "CIV"),
    ("CM", "CMR"),
    ("CV", "CPV"),
    ("DJ", "DJI"),
    ("DZ", "DZA"),
    ("EG", "EGY"),
    ("ER", "ERI"),
    ("ET", "ETH"),
    ("GA", "GAB"),
    ("GH", "GHA"),
    ("GM", "GMB"),
    ("GN", "GIN"),
    ("GQ", "GNQ"),
    ("GW", "GNB"),
    ("KE", "KEN"),
    ("KM", "COM"),
    ("LR", "LBR"),
    ("LS", "LSO"),
    ("LY", "LBY"),
    ("MA", "MAR"),
    ("MG", "MDG"),
    ("ML", "MLI"),
    ("MR", "MRT"),
    ("MU", "MUS"),
    ("MW", "MWI"),
    ("MZ", "MOZ"),
    ("NA", "NAM"),
    ("NE", "NER"),
    ("NG", "NGA"),
    ("RE", "REU"),
    ("RW", "RWA"),
    ("SC", "SYC"),
    ("SD", "SDN"),
    ("SL", "SLE"),
    ("SN", "SEN"),
    ("SO", "SOM"),
    ("SS", "SSD"),
    ("ST", "STP"),
    ("SZ", "SWZ"),
    ("TD", "TCD"),
    ("TG", "TGO"),
    ("TN", "TUN"),
    ("TZ", "TZA"),
    ("UG", "UGA"),
    ("ZA", "ZAF"),
    ("ZM", "ZMB"),
    ("ZW", "ZWE"),
];

pub fn iso3_for(iso2: &str) -> Option<&'static str> {
    ISO2_TO_ISO3
        .binary_search_by_key(&iso2, |(alpha2, _)| alpha2)
        .ok()
        .map(|index| ISO2_TO_ISO3[index].1)
}

/// African ISO-2 codes for developer-origin classification. R\u{e9}union
/// is mapped for choropleths but not counted as an African origin.
pub fn is_african_iso2(iso2: &str) -> bool {
    iso2 != "RE" && iso3_for(iso2).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso3_lookup_covers_known_codes() {
        assert_eq!(iso3_for("SN"), Some("SEN"));
        assert_eq!(iso3_for("ZA"), Some("ZAF"));
        assert_eq!(iso3_for("DZ"), Some("DZA"));
        assert_eq!(iso3_for("XX"), None);
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        let mut sorted = ISO2_TO_ISO3;
        sorted.sort_by_key(|(alpha2, _)| *alpha2);
        assert_eq!(sorted, ISO2_TO_ISO3);
    }

    #[test]
    fn origin_classification_excludes_reunion() {
        assert!(is_african_iso2("KE"));
        assert!(!is_african_iso2("RE"));
        assert!(!is_african_iso2("FR"));
    }
}
