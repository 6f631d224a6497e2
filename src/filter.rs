use crate::types::record::Study;

/// Conjunctive study filter. Every field is optional; the default filter
/// passes everything, and an empty match is a valid outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct StudyFilter {
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub scales: Vec<String>,
    pub approaches: Vec<String>,
    pub methods: Vec<String>,
    pub frequencies: Vec<String>,
    pub licenses: Vec<String>,
    pub informal_economy: bool,
    pub biomass_charcoal: bool,
    pub power_reliability: bool,
    pub urbanization: bool,
    pub sdg_7: bool,
    pub sdg_13: bool,
    pub ndc_mention: bool,
    pub local_ownership: bool,
    pub technologies: Vec<String>,
    /// Case-insensitive substring match on model name or authors.
    pub search: Option<String>,
}

impl StudyFilter {
    pub fn apply<'a>(&self, studies: &'a [Study]) -> Vec<&'a Study> {
        studies
            .iter()
            .filter(|study| self.matches(study))
            .collect()
    }

    pub fn matches(&self, study: &Study) -> bool {
        // Year-bounded filters exclude studies with no usable year, as the
        // source browser does.
        if self.year_from.is_some() || self.year_to.is_some() {
            let Some(year) = study.year else {
                return false;
            };
            if self.year_from.is_some_and(|from| year < from) {
                return false;
            }
            if self.year_to.is_some_and(|to| year > to) {
                return false;
            }
        }

        if !member(&self.scales, &study.scale)
            || !member(&self.approaches, &study.approach)
            || !member(&self.methods, &study.method)
            || !member(&self.frequencies, &study.frequency)
            || !member(&self.licenses, &study.license)
        {
            return false;
        }

        if (self.informal_economy && !study.informal_economy)
            || (self.biomass_charcoal && !study.biomass_charcoal)
            || (self.power_reliability && !study.power_reliability)
            || (self.urbanization && !study.urbanization)
            || (self.sdg_7 && !study.sdg_7)
            || (self.sdg_13 && !study.sdg_13)
            || (self.ndc_mention && !study.ndc_mention)
            || (self.local_ownership && !study.local_ownership)
        {
            return false;
        }

        if !self
            .technologies
            .iter()
            .all(|tech| study.has_technology(&tech.to_ascii_lowercase()))
        {
            return false;
        }

        if let Some(needle) = &self.search {
            let needle = needle.to_ascii_lowercase();
            let haystack = format!(
                "{} {}",
                study.model_name.to_ascii_lowercase(),
                study.authors.to_ascii_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }

        true
    }
}

fn member(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|entry| entry.eq_ignore_ascii_case(value))
}
