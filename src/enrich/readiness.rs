use crate::types::record::{Capacity, Country, DataAvailability};

fn capacity_points(capacity: Capacity) -> f64 {
    match capacity {
        Capacity::Yes => 3.0,
        Capacity::Partial => 1.5,
        Capacity::No => 0.0,
    }
}

fn data_points(data: DataAvailability) -> f64 {
    match data {
        DataAvailability::Good => 3.0,
        DataAvailability::Moderate => 1.5,
        DataAvailability::Poor => 0.0,
    }
}

/// Readiness score 0-10, one decimal, higher = more ready. Additive:
/// capacity (0/1.5/3), data (0/1.5/3), NDC (+1), long-term strategy (+1),
/// electrification (0-2). Defined independently of the gap score; the two
/// are not complements.
pub fn readiness_score(country: &Country) -> f64 {
    let electrification = (country.electrification_rate / 100.0 * 2.0).clamp(0.0, 2.0);
    let total = capacity_points(country.capacity)
        + data_points(country.data_availability)
        + f64::from(u8::from(country.has_ndc))
        + f64::from(u8::from(country.has_lts))
        + electrification;
    (total * 10.0).round() / 10.0
}
