//! Training volume - weight x reps summed across sets

use crate::db::LoggedSet;

/// Volume of a single set. Non-positive weight or reps count as zero
/// rather than an error, so incomplete entries drop out of the sum.
pub fn set_volume(weight: f64, reps: i32) -> f64 {
    if weight <= 0.0 || reps <= 0 {
        return 0.0;
    }
    weight * f64::from(reps)
}

/// Total volume across a collection of sets. Empty input is 0.
pub fn total_volume(sets: &[LoggedSet]) -> f64 {
    sets.iter()
        .map(|s| set_volume(s.weight, s.reps_actual))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn set(weight: f64, reps: i32) -> LoggedSet {
        LoggedSet {
            id: None,
            user_id: "default".to_string(),
            exercise_id: "bench_press".to_string(),
            weight,
            reps_actual: reps,
            rpe_actual: None,
            is_warmup: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_set_volume() {
        assert_eq!(set_volume(100.0, 5), 500.0);
        assert_eq!(set_volume(62.5, 8), 500.0);
    }

    #[test]
    fn test_set_volume_invalid_input_is_zero() {
        assert_eq!(set_volume(0.0, 5), 0.0);
        assert_eq!(set_volume(100.0, 0), 0.0);
        assert_eq!(set_volume(100.0, -1), 0.0);
    }

    #[test]
    fn test_total_volume_empty() {
        assert_eq!(total_volume(&[]), 0.0);
    }

    #[test]
    fn test_total_volume() {
        let sets = vec![set(100.0, 5), set(50.0, 10)];
        assert_eq!(total_volume(&sets), 1000.0);
    }

    #[test]
    fn test_total_volume_order_independent() {
        let forward = vec![set(100.0, 5), set(50.0, 10), set(72.5, 3)];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(total_volume(&forward), total_volume(&reversed));
    }
}
