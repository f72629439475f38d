//! Demo data seed script
//!
//! Fills the record store with a few meals and exercise sessions for each of
//! the last N days so the reports page has something to show.
//! Burned calories go through the same classifier and estimator as the form.
//!
//! Usage:
//!   DATABASE_URL=sqlite://health.db ./seed-demo [--days 7] [--reset]

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveTime};
use clap::Parser;
use rand::seq::SliceRandom;
use rand::Rng;

use healthlog_api::{
    config::Config,
    db,
    models::{
        exercise::{BurnedSource, NewExercise},
        meal::NewMeal,
    },
    services::{
        activity::{classify, estimate},
        exercises::ExerciseService,
        meals::MealService,
    },
};

const MEALS: &[(&str, i64, i64)] = &[
    ("Toast and coffee", 250, 450),
    ("おにぎり", 180, 360),
    ("Chicken salad", 350, 600),
    ("ラーメン", 500, 900),
    ("Salmon with rice", 550, 800),
    ("Yogurt", 80, 150),
];

const EXERCISES: &[&str] = &[
    "Morning walk",
    "散歩",
    "Jogging by the river",
    "ランニング",
    "Bike commute",
    "自転車",
    "筋トレ",
];

#[derive(Parser)]
#[command(name = "seed-demo", about = "Seed the healthlog database with demo records")]
struct Args {
    /// Number of days to fill, ending today
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Delete every existing record first
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url)
        .await
        .context("Failed to open database")?;
    db::run_migrations(&pool).await.context("Failed to migrate")?;

    if args.reset {
        tracing::info!("Removing existing records...");
        sqlx::query("DELETE FROM meal_records").execute(&pool).await?;
        sqlx::query("DELETE FROM exercise_records").execute(&pool).await?;
    }

    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();
    let (mut meal_count, mut exercise_count) = (0usize, 0usize);

    for offset in (0..args.days).rev() {
        let day = today - Duration::days(i64::from(offset));

        let picks = MEALS.choose_multiple(&mut rng, 3);
        for (hour, (name, low, high)) in [7u32, 12, 19].into_iter().zip(picks) {
            let meal = NewMeal {
                meal: (*name).to_string(),
                calorie: rng.gen_range(*low..=*high),
                date: day.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)),
            };
            MealService::insert(&pool, &meal).await?;
            meal_count += 1;
        }

        if rng.gen_bool(0.75) {
            let Some(kind) = EXERCISES.choose(&mut rng) else {
                continue;
            };
            let minutes: u32 = rng.gen_range(15..=75);
            let steps: u32 = rng.gen_range(0..=8000);
            let category = classify(kind);
            let exercise = NewExercise {
                kind: (*kind).to_string(),
                minutes,
                burned: i64::from(estimate(category, minutes, steps, config.user_weight_kg)),
                steps,
                date: day.and_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN)),
                source: BurnedSource::Estimated(category),
            };
            ExerciseService::insert(&pool, &exercise).await?;
            exercise_count += 1;
        }
    }

    tracing::info!(
        "Seeded {} meals and {} exercise sessions over {} days",
        meal_count,
        exercise_count,
        args.days
    );
    Ok(())
}
