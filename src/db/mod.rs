//! Database module - SQLite storage for logged sets and E1RM records

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::analytics::ledger::E1rmStore;

/// One completed set within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    pub id: Option<i64>,
    pub user_id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub reps_actual: i32,
    pub rpe_actual: Option<f64>, // Perceived exertion, 0-10
    pub is_warmup: bool,
    pub created_at: DateTime<Utc>,
}

/// One historical E1RM observation for a (user, exercise) pair.
///
/// Append-only: rows are inserted by the PR ledger and never updated or
/// deleted. The weight is stored rounded to one decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct E1rmRecord {
    pub id: Option<i64>,
    pub user_id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub date: DateTime<Utc>,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS logged_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                exercise_id TEXT NOT NULL,
                weight REAL NOT NULL,
                reps_actual INTEGER NOT NULL,
                rpe_actual REAL,
                is_warmup INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS e1rm_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                exercise_id TEXT NOT NULL,
                weight REAL NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;

        // The ledger reads are always per (user, exercise) pair
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_e1rm_user_exercise
             ON e1rm_records (user_id, exercise_id)",
            [],
        )?;

        Ok(())
    }

    /// Add new logged set
    pub fn add_set(&self, set: &LoggedSet) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO logged_sets (user_id, exercise_id, weight, reps_actual, rpe_actual, is_warmup, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                set.user_id,
                set.exercise_id,
                set.weight,
                set.reps_actual,
                set.rpe_actual,
                set.is_warmup,
                set.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all sets for a user, newest first
    pub fn get_sets(&self, user_id: &str) -> Result<Vec<LoggedSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, exercise_id, weight, reps_actual, rpe_actual, is_warmup, created_at
             FROM logged_sets WHERE user_id = ?1 ORDER BY created_at DESC",
        )?;

        let sets = stmt
            .query_map(params![user_id], |row| {
                let date_str: String = row.get(7)?;
                Ok(LoggedSet {
                    id: Some(row.get(0)?),
                    user_id: row.get(1)?,
                    exercise_id: row.get(2)?,
                    weight: row.get(3)?,
                    reps_actual: row.get(4)?,
                    rpe_actual: row.get(5)?,
                    is_warmup: row.get(6)?,
                    created_at: DateTime::parse_from_rfc3339(&date_str)
                        .map(|d| d.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sets)
    }

    /// Get all E1RM records for a user across exercises, oldest first
    pub fn e1rm_history(&self, user_id: &str) -> Result<Vec<E1rmRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, exercise_id, weight, date
             FROM e1rm_records WHERE user_id = ?1 ORDER BY date ASC",
        )?;

        let records = stmt
            .query_map(params![user_id], map_e1rm_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}

fn map_e1rm_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<E1rmRecord> {
    let date_str: String = row.get(4)?;
    Ok(E1rmRecord {
        id: Some(row.get(0)?),
        user_id: row.get(1)?,
        exercise_id: row.get(2)?,
        weight: row.get(3)?,
        date: DateTime::parse_from_rfc3339(&date_str)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

impl E1rmStore for Database {
    fn e1rm_records(&self, user_id: &str, exercise_id: &str) -> Result<Vec<E1rmRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, exercise_id, weight, date
             FROM e1rm_records WHERE user_id = ?1 AND exercise_id = ?2",
        )?;

        let records = stmt
            .query_map(params![user_id, exercise_id], map_e1rm_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn append_e1rm(&self, record: &E1rmRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO e1rm_records (user_id, exercise_id, weight, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.user_id,
                record.exercise_id,
                record.weight,
                record.date.to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(exercise: &str, weight: f64, reps: i32) -> LoggedSet {
        LoggedSet {
            id: None,
            user_id: "default".to_string(),
            exercise_id: exercise.to_string(),
            weight,
            reps_actual: reps,
            rpe_actual: None,
            is_warmup: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_get_sets() {
        let db = Database::open_in_memory().unwrap();
        let id = db.add_set(&set("bench_press", 100.0, 5)).unwrap();
        assert_eq!(id, 1);

        let sets = db.get_sets("default").unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].exercise_id, "bench_press");
        assert_eq!(sets[0].weight, 100.0);
        assert_eq!(sets[0].reps_actual, 5);
        assert!(!sets[0].is_warmup);
    }

    #[test]
    fn test_get_sets_filters_by_user() {
        let db = Database::open_in_memory().unwrap();
        db.add_set(&set("bench_press", 100.0, 5)).unwrap();

        let mut other = set("bench_press", 80.0, 5);
        other.user_id = "other".to_string();
        db.add_set(&other).unwrap();

        assert_eq!(db.get_sets("default").unwrap().len(), 1);
        assert_eq!(db.get_sets("other").unwrap().len(), 1);
        assert_eq!(db.get_sets("nobody").unwrap().len(), 0);
    }

    #[test]
    fn test_rpe_and_warmup_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let mut warmup = set("barbell_squat", 60.0, 8);
        warmup.rpe_actual = Some(6.5);
        warmup.is_warmup = true;
        db.add_set(&warmup).unwrap();

        let sets = db.get_sets("default").unwrap();
        assert_eq!(sets[0].rpe_actual, Some(6.5));
        assert!(sets[0].is_warmup);
    }

    #[test]
    fn test_e1rm_store_append_and_query() {
        let db = Database::open_in_memory().unwrap();
        let record = E1rmRecord {
            id: None,
            user_id: "default".to_string(),
            exercise_id: "bench_press".to_string(),
            weight: 116.7,
            date: Utc::now(),
        };
        db.append_e1rm(&record).unwrap();

        let records = db.e1rm_records("default", "bench_press").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].weight, 116.7);
    }

    #[test]
    fn test_e1rm_records_isolated_per_pair() {
        let db = Database::open_in_memory().unwrap();
        let mut record = E1rmRecord {
            id: None,
            user_id: "default".to_string(),
            exercise_id: "bench_press".to_string(),
            weight: 116.7,
            date: Utc::now(),
        };
        db.append_e1rm(&record).unwrap();

        record.exercise_id = "barbell_squat".to_string();
        record.weight = 150.0;
        db.append_e1rm(&record).unwrap();

        assert_eq!(db.e1rm_records("default", "bench_press").unwrap().len(), 1);
        assert_eq!(db.e1rm_records("default", "barbell_squat").unwrap().len(), 1);
        assert_eq!(db.e1rm_records("other", "bench_press").unwrap().len(), 0);
        assert_eq!(db.e1rm_history("default").unwrap().len(), 2);
    }
}
