use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Technology flag columns carried by the studies table, in source order.
pub const TECHNOLOGY_COLUMNS: [&str; 9] = [
    "solar",
    "wind",
    "hydro",
    "biomass",
    "nuclear",
    "geothermal",
    "fossil",
    "h2",
    "coal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Capacity {
    Yes,
    Partial,
    No,
}

impl Capacity {
    /// Unrecognized or blank values read as `no`, matching the loader's
    /// leniency contract.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "yes" => Capacity::Yes,
            "partial" => Capacity::Partial,
            _ => Capacity::No,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataAvailability {
    Good,
    Moderate,
    Poor,
}

impl DataAvailability {
    /// Unrecognized or blank values read as `poor`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "good" => DataAvailability::Good,
            "moderate" => DataAvailability::Moderate,
            _ => DataAvailability::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum License {
    OpenSource,
    Freemium,
    Proprietary,
    Unknown,
}

impl License {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "open_source" => License::OpenSource,
            "freemium" => License::Freemium,
            "proprietary" => License::Proprietary,
            _ => License::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            License::OpenSource => "open source",
            License::Freemium => "freemium",
            License::Proprietary => "proprietary",
            License::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningCurve {
    Low,
    Medium,
    High,
    Unknown,
}

impl LearningCurve {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "low" => LearningCurve::Low,
            "medium" => LearningCurve::Medium,
            "high" => LearningCurve::High,
            _ => LearningCurve::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Programming {
    None,
    Intermediate,
    Advanced,
    Unknown,
}

impl Programming {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "none" => Programming::None,
            "intermediate" => Programming::Intermediate,
            "advanced" => Programming::Advanced,
            _ => Programming::Unknown,
        }
    }
}

static ISO_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]{2}\b").expect("token pattern compiles"));

/// The set of ISO-2 codes a study covers.
///
/// The source encodes membership as a free-text, whitespace/comma delimited
/// string. Membership tests run a word-boundary match against that raw
/// string so that substring hits are rejected (`"N"` never matches inside
/// `"SN"`); the parsed code set exists for display and aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySet {
    raw: String,
    codes: BTreeSet<String>,
}

impl CountrySet {
    pub fn parse(raw: &str) -> Self {
        let codes = ISO_TOKEN
            .find_iter(raw)
            .map(|token| token.as_str().to_ascii_uppercase())
            .collect();
        CountrySet {
            raw: raw.trim().to_string(),
            codes,
        }
    }

    /// Word-boundary membership test on the raw delimited string.
    pub fn contains_code(&self, iso: &str) -> bool {
        code_pattern(iso).is_match(&self.raw)
    }

    pub fn codes(&self) -> &BTreeSet<String> {
        &self.codes
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Compile the word-boundary pattern for one ISO-2 code. Callers matching
/// many studies against the same code should compile once and reuse.
pub fn code_pattern(iso: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(iso.trim())))
        .expect("escaped code is a valid pattern")
}

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub name: String,
    pub iso_code: String,
    /// ISO alpha-3, derived from the fixed African lookup table; None for
    /// codes outside it.
    pub iso3: Option<String>,
    pub region: String,
    pub power_pools: Vec<String>,
    pub electrification_rate: f64,
    pub capacity: Capacity,
    pub data_availability: DataAvailability,
    pub has_ndc: bool,
    pub has_lts: bool,
    pub nb_models_applied: u32,
    pub nb_models_national: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Study {
    pub id: u32,
    pub model_name: String,
    pub authors: String,
    pub year: Option<i32>,
    /// Blank source cells read as "unspecified".
    pub scale: String,
    pub approach: String,
    pub method: String,
    pub countries: CountrySet,
    pub informal_economy: bool,
    pub biomass_charcoal: bool,
    pub power_reliability: bool,
    pub urbanization: bool,
    pub sdg_7: bool,
    pub sdg_13: bool,
    pub ndc_mention: bool,
    pub local_ownership: bool,
    /// License label from the `open_source` column (open, proprietary, ...).
    pub license: String,
    pub frequency: String,
    /// Delimited ISO-2 list of the developing institutions' countries.
    pub developer_origin: String,
    /// Names from TECHNOLOGY_COLUMNS answered yes.
    pub technologies: Vec<String>,
}

impl Study {
    pub fn has_technology(&self, name: &str) -> bool {
        self.technologies.iter().any(|tech| tech == name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub tool_name: String,
    pub full_name: String,
    pub license: License,
    pub learning_curve: LearningCurve,
    pub programming_required: Programming,
    pub free_for_developing: bool,
    pub training_available: bool,
    pub nb_studies_in_inventory: u32,
    pub best_for: Vec<String>,
    pub cost_usd: f64,
}

impl Tool {
    pub fn best_for_tag(&self, tag: &str) -> bool {
        self.best_for.iter().any(|entry| entry == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_set_matches_whole_tokens_only() {
        let set = CountrySet::parse("SN, GM");
        assert!(set.contains_code("SN"));
        assert!(set.contains_code("GM"));
        assert!(!set.contains_code("S"));
        assert!(!set.contains_code("N"));
    }

    #[test]
    fn country_set_rejects_substring_of_longer_token() {
        // "NE" must not match inside a three-letter token.
        let set = CountrySet::parse("NER SEN");
        assert!(!set.contains_code("NE"));
        assert!(!set.contains_code("SN"));
    }

    #[test]
    fn country_set_parses_delimited_codes() {
        let set = CountrySet::parse("ke, tz ug");
        let codes: Vec<_> = set.codes().iter().cloned().collect();
        assert_eq!(codes, vec!["KE", "TZ", "UG"]);
    }

    #[test]
    fn categorical_parse_falls_back_to_worst_band() {
        assert_eq!(Capacity::parse("partial"), Capacity::Partial);
        assert_eq!(Capacity::parse("unheard-of"), Capacity::No);
        assert_eq!(DataAvailability::parse(""), DataAvailability::Poor);
        assert_eq!(License::parse("freeware"), License::Unknown);
        assert_eq!(Programming::parse(""), Programming::Unknown);
    }
}
