//! Shared setup for integration tests: an in-memory store and a router
//! over it.
#![allow(dead_code)]

use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use healthlog_api::{
    config::Config,
    db,
    models::{
        exercise::{BurnedSource, NewExercise},
        meal::NewMeal,
    },
    router, AppState,
};
use sqlx::SqlitePool;

static INIT_LOGGER: Once = Once::new();

/// Quiet logging for tests; `TEST_LOG=debug` turns it up.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub async fn create_test_pool() -> SqlitePool {
    init_test_logging();
    let pool = db::create_pool("sqlite::memory:").await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

pub async fn create_test_app() -> (axum::Router, SqlitePool) {
    let pool = create_test_pool().await;
    let app = router(AppState::new(pool.clone(), Config::default()));
    (app, pool)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
}

pub fn meal(name: &str, calorie: i64, date: NaiveDateTime) -> NewMeal {
    NewMeal {
        meal: name.into(),
        calorie,
        date,
    }
}

pub fn exercise(kind: &str, minutes: u32, burned: i64, date: NaiveDateTime) -> NewExercise {
    NewExercise {
        kind: kind.into(),
        minutes,
        burned,
        steps: 0,
        date,
        source: BurnedSource::Manual,
    }
}
