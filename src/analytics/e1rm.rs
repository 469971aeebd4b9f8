//! E1RM estimation - projecting a one-rep max from a multi-rep set
//!
//! Uses the Epley formula: 1RM = weight x (1 + reps / 30).

/// Each rep beyond the first is assumed to represent 1/30th of
/// additional single-rep capacity (the Epley divisor).
const EPLEY_DIVISOR: f64 = 30.0;

/// Estimate a one-rep max from an observed set.
///
/// Fails closed: non-positive weight or reps yield 0.0, since they
/// represent an incomplete entry rather than an exceptional condition.
/// A single-rep set already is the one-rep max and is returned unchanged.
/// No rounding happens here; callers round when they store or display.
pub fn estimate_e1rm(weight: f64, reps: i32) -> f64 {
    if weight <= 0.0 || reps <= 0 {
        return 0.0;
    }

    if reps == 1 {
        return weight;
    }

    weight * (1.0 + f64::from(reps) / EPLEY_DIVISOR)
}

/// Round a weight to one decimal, the precision the ledger stores.
pub fn round_weight(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a weight for display
pub fn format_weight(weight: f64) -> String {
    format!("{} kg", round_weight(weight))
}

/// Format a volume total for display
pub fn format_volume(volume: f64) -> String {
    format!("{} kg", volume.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_is_the_max() {
        for weight in [20.0, 100.0, 142.5, 250.0] {
            assert_eq!(estimate_e1rm(weight, 1), weight);
        }
    }

    #[test]
    fn test_epley_formula() {
        for weight in [60.0, 100.0, 137.5] {
            for reps in [2, 5, 8, 12] {
                let expected = weight * (1.0 + f64::from(reps) / 30.0);
                assert_eq!(estimate_e1rm(weight, reps), expected);
            }
        }
    }

    #[test]
    fn test_five_reps_at_hundred() {
        let estimate = estimate_e1rm(100.0, 5);
        assert!((estimate - 116.6667).abs() < 0.001, "got {}", estimate);
        assert_eq!(round_weight(estimate), 116.7);
    }

    #[test]
    fn test_invalid_input_fails_closed() {
        assert_eq!(estimate_e1rm(0.0, 5), 0.0);
        assert_eq!(estimate_e1rm(100.0, 0), 0.0);
        assert_eq!(estimate_e1rm(100.0, -1), 0.0);
    }

    #[test]
    fn test_no_upper_rep_bound() {
        // The high-rep policy cap lives at the ledger, not here
        assert_eq!(estimate_e1rm(100.0, 30), 200.0);
    }

    #[test]
    fn test_round_weight() {
        assert_eq!(round_weight(116.6667), 116.7);
        assert_eq!(round_weight(128.3333), 128.3);
        assert_eq!(round_weight(100.0), 100.0);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_weight(116.6667), "116.7 kg");
        assert_eq!(format_volume(1000.4), "1000 kg");
    }
}
