//! E1RM progress trend using linear regression (linfa)

use chrono::{DateTime, Utc};
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use super::e1rm::estimate_e1rm;
use crate::db::LoggedSet;

/// Minimum data points required for a fit
const MIN_DATA_POINTS: usize = 3;

/// Strength trend for one exercise, fitted over per-set E1RM estimates
pub struct ProgressTrend {
    slope: f64,
    intercept: f64,
    r2_score: f64,
    data_points: usize,
    first_date: DateTime<Utc>,
}

/// Trend numbers for display
#[derive(Debug, Clone)]
pub struct TrendSummary {
    /// Estimated E1RM gain per day in kg
    pub daily_gain: f64,
    pub week_projection: f64,
    pub month_projection: f64,
    pub r2_score: f64,
    pub data_points: usize,
}

impl ProgressTrend {
    /// Fit a trend from logged sets for a specific exercise.
    ///
    /// Only working sets with a valid estimate enter the fit.
    pub fn fit(sets: &[LoggedSet], exercise_id: &str) -> Option<Self> {
        let observations: Vec<(DateTime<Utc>, f64)> = sets
            .iter()
            .filter(|s| s.exercise_id == exercise_id && !s.is_warmup)
            .filter_map(|s| {
                let estimate = estimate_e1rm(s.weight, s.reps_actual);
                (estimate > 0.0).then_some((s.created_at, estimate))
            })
            .collect();

        if observations.len() < MIN_DATA_POINTS {
            return None;
        }

        let first_date = observations.iter().map(|(date, _)| *date).min()?;

        // X = days since first observation, Y = estimated E1RM
        let mut x_data: Vec<f64> = Vec::new();
        let mut y_data: Vec<f64> = Vec::new();

        for (date, estimate) in &observations {
            x_data.push((*date - first_date).num_days() as f64);
            y_data.push(*estimate);
        }

        let n_samples = x_data.len();

        let records = Array2::from_shape_vec((n_samples, 1), x_data).ok()?;
        let targets = Array1::from_vec(y_data);
        let dataset = Dataset::new(records, targets);

        let model = LinearRegression::default().fit(&dataset).ok()?;

        let slope = model.params()[0];
        let intercept = model.intercept();

        let predictions = model.predict(&dataset);
        let r2_score = predictions.r2(&dataset).unwrap_or(0.0);

        Some(Self {
            slope,
            intercept,
            r2_score,
            data_points: n_samples,
            first_date,
        })
    }

    /// Projected E1RM a given number of days ahead from now
    pub fn projected_e1rm(&self, days_ahead: i32) -> f64 {
        let days_from_start = (Utc::now() - self.first_date).num_days() as f64;
        self.slope * (days_from_start + f64::from(days_ahead)) + self.intercept
    }

    /// Fitted E1RM level today
    pub fn current_level(&self) -> f64 {
        self.projected_e1rm(0)
    }

    /// E1RM gain per day (slope)
    pub fn daily_gain(&self) -> f64 {
        self.slope
    }

    /// Model fit quality, 0-1
    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    pub fn data_points(&self) -> usize {
        self.data_points
    }

    /// Full trend for display
    pub fn summary(&self) -> TrendSummary {
        TrendSummary {
            daily_gain: self.slope,
            week_projection: self.projected_e1rm(7),
            month_projection: self.projected_e1rm(30),
            r2_score: self.r2_score,
            data_points: self.data_points,
        }
    }
}
