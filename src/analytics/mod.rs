//! Analytics module - the training analytics engine
//!
//! Features:
//! - E1RM estimation (Epley formula)
//! - Training volume aggregation
//! - Personal-record ledger over an injected store
//! - Progress trend via linear regression (linfa)

pub mod e1rm;
pub mod ledger;
pub mod progress;
pub mod volume;

pub use e1rm::estimate_e1rm;
pub use ledger::{E1rmStore, MAX_PR_REPS, PrLedger, PrUpdate};
pub use progress::ProgressTrend;
pub use volume::total_volume;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::db::LoggedSet;

/// Summary statistics over a collection of logged sets
pub struct Analytics {
    sets: Vec<LoggedSet>,
}

impl Analytics {
    pub fn new(sets: Vec<LoggedSet>) -> Self {
        Self { sets }
    }

    /// Total volume across all sets
    pub fn total_volume(&self) -> f64 {
        volume::total_volume(&self.sets)
    }

    /// Total volume for one exercise
    pub fn exercise_volume(&self, exercise_id: &str) -> f64 {
        self.sets
            .iter()
            .filter(|s| s.exercise_id == exercise_id)
            .map(|s| volume::set_volume(s.weight, s.reps_actual))
            .sum()
    }

    /// Best single-set E1RM estimate for an exercise, 0 without sets
    pub fn best_set_e1rm(&self, exercise_id: &str) -> f64 {
        self.sets
            .iter()
            .filter(|s| s.exercise_id == exercise_id)
            .map(|s| estimate_e1rm(s.weight, s.reps_actual))
            .fold(0.0, f64::max)
    }

    /// Average RPE over the sets that carry one, 0 without any
    pub fn average_rpe(&self) -> f64 {
        let rpes: Vec<f64> = self.sets.iter().filter_map(|s| s.rpe_actual).collect();

        if rpes.is_empty() {
            return 0.0;
        }

        rpes.iter().sum::<f64>() / rpes.len() as f64
    }

    /// Training days per week over the logged span
    pub fn weekly_frequency(&self) -> f64 {
        let days: HashSet<NaiveDate> = self
            .sets
            .iter()
            .map(|s| s.created_at.date_naive())
            .collect();

        if days.len() < 2 {
            return 0.0;
        }

        let first = days.iter().min().unwrap();
        let last = days.iter().max().unwrap();
        let span = (*last - *first).num_days() as f64;

        (days.len() as f64 / span) * 7.0
    }
}
