use crate::types::record::{Country, Study};
use serde::Serialize;

/// One country with its derived coverage and scoring fields. Produced by
/// `enrich::enrich`, owned by the caller, never written back to the source
/// tables.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedCountry {
    #[serde(flatten)]
    pub country: Country,
    /// Studies whose countries field matches this country's ISO-2 code.
    pub n_studies_actual: usize,
    /// Fraction (0-1) of the four African-context features present in at
    /// least one matched study.
    pub feature_ratio: f64,
    /// 0-100, higher = more under-served.
    pub gap_score: u32,
    /// 0-10 with one decimal, higher = more ready.
    pub readiness_score: f64,
}

/// Single-country view: the enriched record plus the studies that cover it.
#[derive(Debug, Clone, Serialize)]
pub struct CountryDetail {
    #[serde(flatten)]
    pub enriched: EnrichedCountry,
    pub studies: Vec<Study>,
}
