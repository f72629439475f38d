use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::{
    models::report::{DailyRow, ReportView},
    services::{exercises::ExerciseService, meals::MealService},
};

/// Number of calendar days in the rolling window, today included.
pub const WINDOW_DAYS: i64 = 7;

/// Upper bound of the progress percentage.
pub const PROGRESS_CAP: i64 = 200;

/// All-time sums over both record streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub intake: i64,
    pub expenditure: i64,
}

#[derive(Debug, Error)]
pub enum ReportError {
    /// The seven-day window around this day falls off chrono's calendar.
    #[error("Date {0} is out of the supported range")]
    DateOutOfRange(NaiveDate),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// The seven calendar days ending on `today`, with the half-open
/// `[first_day 00:00, today + 1 00:00)` timestamp range covering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub first_day: NaiveDate,
    pub today: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportWindow {
    pub fn ending_on(today: NaiveDate) -> Result<Self, ReportError> {
        let first_day = today
            .checked_sub_signed(Duration::days(WINDOW_DAYS - 1))
            .ok_or(ReportError::DateOutOfRange(today))?;
        let day_after = today
            .checked_add_signed(Duration::days(1))
            .ok_or(ReportError::DateOutOfRange(today))?;
        Ok(Self {
            first_day,
            today,
            start: first_day.and_time(NaiveTime::MIN),
            end: day_after.and_time(NaiveTime::MIN),
        })
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day.iter_days().take(WINDOW_DAYS as usize)
    }
}

pub struct ReportService;

impl ReportService {
    /// Balance report for the seven days ending on `today`.
    pub async fn build(
        pool: &SqlitePool,
        today: NaiveDate,
        daily_goal: i64,
    ) -> Result<ReportView, ReportError> {
        let window = ReportWindow::ending_on(today)?;

        let totals = Totals {
            intake: MealService::total(pool).await?,
            expenditure: ExerciseService::total(pool).await?,
        };

        let meal_by_day = MealService::sum_by_day(pool, window.start, window.end).await?;
        let exercise_by_day =
            ExerciseService::sum_by_day(pool, window.start, window.end).await?;

        Ok(assemble_report(
            &window,
            daily_goal,
            totals,
            &meal_by_day,
            &exercise_by_day,
        ))
    }
}

/// Reduce totals and per-day sums into the report view. Every day of the
/// window gets a row, zero-filled when a stream has no entries for it.
pub fn assemble_report(
    window: &ReportWindow,
    daily_goal: i64,
    totals: Totals,
    meal_by_day: &HashMap<NaiveDate, i64>,
    exercise_by_day: &HashMap<NaiveDate, i64>,
) -> ReportView {
    let daily_rows: Vec<DailyRow> = window
        .days()
        .map(|day| DailyRow {
            date: day.format("%Y-%m-%d").to_string(),
            intake: meal_by_day.get(&day).copied().unwrap_or(0),
            expenditure: exercise_by_day.get(&day).copied().unwrap_or(0),
        })
        .collect();

    let today_in = meal_by_day.get(&window.today).copied().unwrap_or(0);

    ReportView {
        title: "Reports".into(),
        total_in: totals.intake,
        total_out: totals.expenditure,
        net: totals.intake - totals.expenditure,
        daily_goal,
        today_in,
        progress: progress_percent(today_in, daily_goal),
        labels: daily_rows.iter().map(|r| r.date.clone()).collect(),
        in_data: daily_rows.iter().map(|r| r.intake).collect(),
        out_data: daily_rows.iter().map(|r| r.expenditure).collect(),
        daily_rows,
    }
}

/// `today_in / goal * 100`, truncated and capped at 200. A non-positive goal
/// yields 0.
pub fn progress_percent(today_in: i64, daily_goal: i64) -> i64 {
    if daily_goal <= 0 {
        return 0;
    }
    let pct = today_in as f64 / daily_goal as f64 * 100.0;
    pct.min(PROGRESS_CAP as f64) as i64
}
