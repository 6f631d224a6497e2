use crate::types::record::{Capacity, Country, DataAvailability};

// Gap score weights are fixed policy, not configuration.
const FEATURE_WEIGHT: f64 = 40.0;
const CAPACITY_WEIGHT: f64 = 30.0;
const DATA_WEIGHT: f64 = 20.0;
const DENSITY_WEIGHT: f64 = 10.0;
const DENSITY_CAP: u32 = 10;

fn capacity_scale(capacity: Capacity) -> f64 {
    match capacity {
        Capacity::Yes => 2.0,
        Capacity::Partial => 1.0,
        Capacity::No => 0.0,
    }
}

fn data_scale(data: DataAvailability) -> f64 {
    match data {
        DataAvailability::Good => 2.0,
        DataAvailability::Moderate => 1.0,
        DataAvailability::Poor => 0.0,
    }
}

/// Gap score 0-100, higher = more under-served. Weighted sum of four
/// badness terms: African feature coverage (40), institutional capacity
/// (30), data availability (20), model density (10).
pub fn gap_score(country: &Country, feature_ratio: f64) -> u32 {
    let density = country.nb_models_applied.min(DENSITY_CAP) as f64;
    let total = (1.0 - feature_ratio) * FEATURE_WEIGHT
        + (1.0 - capacity_scale(country.capacity) / 2.0) * CAPACITY_WEIGHT
        + (1.0 - data_scale(country.data_availability) / 2.0) * DATA_WEIGHT
        + (1.0 - density / f64::from(DENSITY_CAP)) * DENSITY_WEIGHT;
    total.round() as u32
}
