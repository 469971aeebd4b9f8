//! ironlog - Personal strength training log

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use ironlog::analytics::e1rm::{format_volume, format_weight};
use ironlog::analytics::{Analytics, E1rmStore, PrLedger, ProgressTrend};
use ironlog::db::{Database, E1rmRecord, LoggedSet};
use ironlog::exercises::{self, Category, Exercise};

#[derive(Parser)]
#[command(name = "ironlog")]
#[command(author, version, about = "Personal strength training log")]
struct Cli {
    /// Database file path
    #[arg(long, env = "IRONLOG_DB", default_value = "ironlog.db")]
    db: String,

    /// User profile the entries belong to
    #[arg(long, env = "IRONLOG_USER", default_value = "default")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a completed set
    Log {
        /// Exercise id or name (see `ironlog exercises`)
        exercise: String,

        /// Weight lifted in kg
        #[arg(short, long)]
        weight: f64,

        /// Reps performed
        #[arg(short, long)]
        reps: i32,

        /// Perceived exertion, 0-10
        #[arg(long)]
        rpe: Option<f64>,

        /// Mark as a warmup set
        #[arg(long)]
        warmup: bool,
    },

    /// List recent sets
    List {
        /// Number of sets to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show training statistics
    Stats {
        /// Filter by exercise id or name
        exercise: Option<String>,
    },

    /// Show personal records
    Prs {
        /// Show the full record history for one exercise
        exercise: Option<String>,
    },

    /// Dump logged sets and PR history as JSON
    Export,

    /// List the exercise library
    Exercises,
}

#[derive(Serialize)]
struct TrainingExport {
    sets: Vec<LoggedSet>,
    e1rm_records: Vec<E1rmRecord>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;

    match cli.command {
        Commands::Log {
            exercise,
            weight,
            reps,
            rpe,
            warmup,
        } => {
            let exercise = resolve_exercise(&exercise)?;
            log_set(&db, &cli.user, exercise, weight, reps, rpe, warmup)?;
        }

        Commands::List { limit } => {
            let sets = db.get_sets(&cli.user)?;
            println!("Recent sets:");
            println!("{:-<72}", "");
            for s in sets.iter().take(limit) {
                let marker = if s.is_warmup { " (warmup)" } else { "" };
                println!(
                    "{} | {:24} | {:>8} x {:<3} | RPE {}{}",
                    s.created_at.format("%Y-%m-%d %H:%M"),
                    s.exercise_id,
                    format_weight(s.weight),
                    s.reps_actual,
                    s.rpe_actual.map_or("-".to_string(), |r| r.to_string()),
                    marker,
                );
            }
        }

        Commands::Stats { exercise } => {
            let sets = db.get_sets(&cli.user)?;

            println!("Training Statistics");
            println!("{:-<40}", "");

            if let Some(ex) = exercise {
                let exercise = resolve_exercise(&ex)?;
                show_exercise_stats(&db, &cli.user, exercise, &sets)?;
            } else {
                println!("Sets logged: {}", sets.len());
                let analytics = Analytics::new(sets);
                println!("Total volume: {}", format_volume(analytics.total_volume()));
                println!("Weekly frequency: {:.1} days/week", analytics.weekly_frequency());

                let avg_rpe = analytics.average_rpe();
                if avg_rpe > 0.0 {
                    println!("Average RPE: {:.1}", avg_rpe);
                }
            }
        }

        Commands::Prs { exercise } => match exercise {
            Some(ex) => {
                let exercise = resolve_exercise(&ex)?;
                let mut records = db.e1rm_records(&cli.user, exercise.id)?;
                records.sort_by_key(|r| r.date);

                if records.is_empty() {
                    println!("No records yet for {}", exercise.name);
                } else {
                    println!("PR history for {}:", exercise.name);
                    for r in &records {
                        println!("{} | {}", r.date.format("%Y-%m-%d"), format_weight(r.weight));
                    }
                }
            }
            None => {
                let history = db.e1rm_history(&cli.user)?;
                if history.is_empty() {
                    println!("No personal records yet");
                } else {
                    println!("Current personal records:");
                    for (exercise_id, best) in current_bests(&history) {
                        println!("{:24} {}", exercise_id, format_weight(best));
                    }
                }
            }
        },

        Commands::Export => {
            let export = TrainingExport {
                sets: db.get_sets(&cli.user)?,
                e1rm_records: db.e1rm_history(&cli.user)?,
            };
            println!("{}", serde_json::to_string_pretty(&export)?);
        }

        Commands::Exercises => {
            for category in Category::all() {
                println!("{}:", category.name());
                for e in exercises::all_exercises().iter().filter(|e| e.category == *category) {
                    println!("  {:24} {} - {}", e.id, e.name, e.description);
                }
            }
        }
    }

    Ok(())
}

/// Current best per exercise, from the full record history
fn current_bests(history: &[E1rmRecord]) -> Vec<(String, f64)> {
    let mut bests: BTreeMap<String, f64> = BTreeMap::new();
    for r in history {
        let best = bests.entry(r.exercise_id.clone()).or_insert(r.weight);
        if r.weight > *best {
            *best = r.weight;
        }
    }
    bests.into_iter().collect()
}

fn resolve_exercise(input: &str) -> Result<&'static Exercise> {
    match exercises::find_exercise(input).or_else(|| exercises::find_exercise_by_name(input)) {
        Some(exercise) => Ok(exercise),
        None => bail!("unknown exercise '{input}', see `ironlog exercises`"),
    }
}

fn log_set(
    db: &Database,
    user: &str,
    exercise: &'static Exercise,
    weight: f64,
    reps: i32,
    rpe: Option<f64>,
    warmup: bool,
) -> Result<()> {
    let set = LoggedSet {
        id: None,
        user_id: user.to_string(),
        exercise_id: exercise.id.to_string(),
        weight,
        reps_actual: reps,
        rpe_actual: rpe,
        is_warmup: warmup,
        created_at: Utc::now(),
    };
    let id = db.add_set(&set)?;
    println!(
        "Logged: {} - {} x {} (id: {})",
        exercise.name,
        format_weight(weight),
        reps,
        id
    );

    // The set is durable at this point; a ledger failure is logged and
    // swallowed so it never aborts the act of logging
    let ledger = PrLedger::new(db);
    match ledger.update_e1rm(user, exercise.id, weight, reps, set.created_at) {
        Ok(update) if update.is_new_pr => {
            println!(
                "New PR! Estimated 1RM {} -> {}",
                format_weight(update.old_e1rm.unwrap_or(0.0)),
                format_weight(update.new_e1rm.unwrap_or(0.0)),
            );
        }
        Ok(_) => {}
        Err(e) => error!("PR check failed for {}: {e:#}", exercise.id),
    }

    Ok(())
}

fn show_exercise_stats(
    db: &Database,
    user: &str,
    exercise: &'static Exercise,
    sets: &[LoggedSet],
) -> Result<()> {
    let analytics = Analytics::new(sets.to_vec());

    println!("Exercise: {}", exercise.name);
    println!("Total volume: {}", format_volume(analytics.exercise_volume(exercise.id)));

    let best_set = analytics.best_set_e1rm(exercise.id);
    if best_set > 0.0 {
        println!("Best set e1rm: {}", format_weight(best_set));
    }

    let ledger = PrLedger::new(db);
    match ledger.current_e1rm(user, exercise.id)? {
        Some(best) => println!("Current PR: {}", format_weight(best)),
        None => println!("Current PR: none yet"),
    }

    if let Some(trend) = ProgressTrend::fit(sets, exercise.id) {
        let summary = trend.summary();
        println!(
            "Trend: {:+.2} kg/day over {} sets (r2 {:.2})",
            summary.daily_gain, summary.data_points, summary.r2_score
        );
        println!("Projected in 7 days: {}", format_weight(summary.week_projection));
        println!("Projected in 30 days: {}", format_weight(summary.month_projection));
    }

    Ok(())
}
