//! PR ledger - detecting and recording new personal records
//!
//! Every logged set is checked against the stored E1RM history for its
//! (user, exercise) pair; a set that beats the stored best appends one
//! new record. The history is append-only: records are never updated or
//! deleted, so the running maximum only ever grows.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::e1rm::{estimate_e1rm, round_weight};
use crate::db::E1rmRecord;

/// E1RM formulas lose accuracy at high rep counts; sets above this rep
/// count never become PR candidates.
pub const MAX_PR_REPS: i32 = 15;

/// Persistence port for the E1RM record store.
pub trait E1rmStore {
    /// All recorded estimates for the pair, in no particular order.
    fn e1rm_records(&self, user_id: &str, exercise_id: &str) -> Result<Vec<E1rmRecord>>;

    /// Durable insert; the store assigns row identity.
    fn append_e1rm(&self, record: &E1rmRecord) -> Result<()>;
}

/// Outcome of a PR check for one logged set
#[derive(Debug, Clone, PartialEq)]
pub struct PrUpdate {
    pub is_new_pr: bool,
    /// Rounded estimate for the set; None when the set was rejected outright
    pub new_e1rm: Option<f64>,
    /// Best stored E1RM before this set; 0.0 when this is the first record
    pub old_e1rm: Option<f64>,
}

/// Personal-record ledger over an injected store
pub struct PrLedger<'a, S: E1rmStore> {
    store: &'a S,
}

impl<'a, S: E1rmStore> PrLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Check a logged set against the pair's PR history and append a new
    /// record when it beats the stored best.
    ///
    /// The read and the conditional append are not wrapped in a
    /// transaction; concurrent callers racing on one pair can both append.
    /// Extra records keep the running maximum correct, so nothing is lost.
    pub fn update_e1rm(
        &self,
        user_id: &str,
        exercise_id: &str,
        weight: f64,
        reps: i32,
        observed_at: DateTime<Utc>,
    ) -> Result<PrUpdate> {
        // Policy cap: rejected before any estimate or store access
        if reps > MAX_PR_REPS {
            return Ok(PrUpdate {
                is_new_pr: false,
                new_e1rm: None,
                old_e1rm: None,
            });
        }

        let new_e1rm = estimate_e1rm(weight, reps);
        let records = self.store.e1rm_records(user_id, exercise_id)?;
        let current_best = max_weight(&records);

        match current_best {
            // Strictly greater, compared on the raw estimate against the
            // stored rounded best; equal values do not trigger a record
            Some(best) if new_e1rm <= best => Ok(PrUpdate {
                is_new_pr: false,
                new_e1rm: Some(round_weight(new_e1rm)),
                old_e1rm: Some(best),
            }),
            _ => {
                let rounded = round_weight(new_e1rm);
                self.store.append_e1rm(&E1rmRecord {
                    id: None,
                    user_id: user_id.to_string(),
                    exercise_id: exercise_id.to_string(),
                    weight: rounded,
                    date: observed_at,
                })?;

                Ok(PrUpdate {
                    is_new_pr: true,
                    new_e1rm: Some(rounded),
                    old_e1rm: Some(current_best.unwrap_or(0.0)),
                })
            }
        }
    }

    /// Current best stored E1RM for the pair, or None without records
    pub fn current_e1rm(&self, user_id: &str, exercise_id: &str) -> Result<Option<f64>> {
        let records = self.store.e1rm_records(user_id, exercise_id)?;
        Ok(max_weight(&records))
    }
}

/// Maximum stored weight; ties resolve to any maximal element
fn max_weight(records: &[E1rmRecord]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.weight)
        .fold(None, |best, w| match best {
            Some(b) if b >= w => Some(b),
            _ => Some(w),
        })
}
