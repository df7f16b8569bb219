/// Decimal places used when normalizing abundances written into engine files.
pub const ABUNDANCE_DIGITS: usize = 5;

const GRAMS_TO_AMU: f64 = 1.0 / 1.66;

/// Rounds to `digits` decimal places, half to even on the exact binary value.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Scales `values` so they sum to `total`.
///
/// Every entry but the last is rounded to `digits` places; the last one absorbs the rounding
/// remainder. A list summing to zero is split equally.
pub fn normalize_list(values: &[f64], total: f64, digits: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let sum: f64 = values.iter().sum();
    if sum == 0.0 {
        let share = total / values.len() as f64;
        return vec![share; values.len()];
    }

    let last = values.len() - 1;
    let mut normalized: Vec<f64> = values[..last]
        .iter()
        .map(|value| round_to(value / sum * total, digits))
        .collect();
    let remainder = total - normalized.iter().sum::<f64>();
    normalized.push(round_to(remainder, digits));
    normalized
}

pub fn normalize_abundances(values: &[f64]) -> Vec<f64> {
    normalize_list(values, 1.0, ABUNDANCE_DIGITS)
}

/// Mean atomic mass of a composition, weighting each mass by its abundance.
pub fn mean_atomic_mass(masses: &[f64], abundances: &[f64]) -> f64 {
    masses
        .iter()
        .zip(abundances)
        .map(|(mass, abundance)| mass * abundance)
        .sum()
}

/// Converts a mass density into an atomic density in atoms per cubic angstrom.
///
/// `density` is in g/cm^3 unless `density_in_amu` is set, in which case it is already in
/// amu/A^3. Returns zero for an empty or massless composition.
pub fn global_atomic_density(
    density: f64,
    masses: &[f64],
    abundances: &[f64],
    density_in_amu: bool,
) -> f64 {
    let mean_amu = mean_atomic_mass(masses, abundances);
    if mean_amu == 0.0 {
        return 0.0;
    }
    let density = density / mean_amu;
    if density_in_amu {
        density
    } else {
        density * GRAMS_TO_AMU
    }
}

/// Keeps ASCII letters, digits and underscores.
pub fn alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        alphanumeric, global_atomic_density, normalize_abundances, normalize_list, round_to,
    };

    #[test]
    fn rounding_keeps_requested_decimals() {
        assert_eq!(round_to(0.333333, 5), 0.33333);
        assert_eq!(round_to(0.666666, 2), 0.67);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn already_normalized_abundances_are_kept() {
        let normalized = normalize_abundances(&[0.333, 0.333, 0.334]);
        assert_eq!(normalized, vec![0.333, 0.333, 0.334]);
    }

    #[test]
    fn remainder_is_absorbed_by_the_last_entry() {
        let normalized = normalize_abundances(&[1.0, 1.0, 1.0]);
        assert_eq!(normalized, vec![0.33333, 0.33333, 0.33334]);
        let sum: f64 = normalized.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sum_lists_are_split_equally() {
        assert_eq!(normalize_list(&[0.0, 0.0], 1.0, 5), vec![0.5, 0.5]);
        assert!(normalize_list(&[], 1.0, 5).is_empty());
    }

    #[test]
    fn normalization_is_deterministic() {
        let values = [0.2, 0.7, 0.35, 0.05];
        assert_eq!(normalize_abundances(&values), normalize_abundances(&values));
    }

    #[test]
    fn global_density_converts_grams_to_amu() {
        let density = global_atomic_density(1.66, &[1.0], &[1.0], false);
        assert!((density - 1.0).abs() < 1e-12);
        assert_eq!(global_atomic_density(2.0, &[2.0], &[1.0], true), 1.0);
        assert_eq!(global_atomic_density(2.0, &[], &[], false), 0.0);
    }

    #[test]
    fn alphanumeric_drops_punctuation_and_spaces() {
        assert_eq!(alphanumeric("Ar -> W (test)_1"), "ArWtest_1");
    }
}
