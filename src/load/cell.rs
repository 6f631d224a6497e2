/// Cell coercions for hand-curated spreadsheet exports. Unparseable input
/// degrades to None or zero, never to an error: the dataset must always
/// fully load.

/// Float with locale tolerance: a decimal comma reads as a decimal point.
pub fn lenient_f64(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', ".");
    cleaned.parse::<f64>().ok()
}

/// Integer with spreadsheet artifacts tolerated: anything after a decimal
/// point is truncated before parsing ("2021.0" reads as 2021).
pub fn lenient_i64(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    let integral = trimmed.split('.').next().unwrap_or(trimmed).trim();
    integral.parse::<i64>().ok()
}

/// Cost cells carry currency glyphs and thousands separators; everything
/// except digits, sign, and decimal point is stripped. Fallback is zero,
/// not missing.
pub fn lenient_cost(cell: &str) -> f64 {
    let cleaned: String = cell
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

pub fn yes(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("yes")
}

/// Comma-delimited list cell into trimmed, non-empty entries.
pub fn list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_f64_accepts_decimal_comma() {
        assert_eq!(lenient_f64("48,3"), Some(48.3));
        assert_eq!(lenient_f64(" 90.1 "), Some(90.1));
        assert_eq!(lenient_f64("n/a"), None);
        assert_eq!(lenient_f64(""), None);
    }

    #[test]
    fn lenient_i64_truncates_fractional_artifacts() {
        assert_eq!(lenient_i64("2021.0"), Some(2021));
        assert_eq!(lenient_i64(" 17 "), Some(17));
        assert_eq!(lenient_i64("17.9"), Some(17));
        assert_eq!(lenient_i64("unknown"), None);
        assert_eq!(lenient_i64(""), None);
    }

    #[test]
    fn lenient_cost_strips_currency_and_separators() {
        assert_eq!(lenient_cost("$4,500"), 4500.0);
        assert_eq!(lenient_cost("\u{20ac} 1,200.50"), 1200.50);
        assert_eq!(lenient_cost("free"), 0.0);
        assert_eq!(lenient_cost(""), 0.0);
    }

    #[test]
    fn yes_is_case_insensitive_and_trimmed() {
        assert!(yes(" yes "));
        assert!(yes("Yes"));
        assert!(!yes("no"));
        assert!(!yes(""));
    }

    #[test]
    fn list_drops_empty_entries() {
        assert_eq!(list("WAPP, EAPP"), vec!["WAPP", "EAPP"]);
        assert_eq!(list(" , "), Vec::<String>::new());
        assert_eq!(list(""), Vec::<String>::new());
    }
}
