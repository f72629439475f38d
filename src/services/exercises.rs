use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::{
    db::day_totals,
    models::exercise::{ExerciseRecord, NewExercise},
};

pub struct ExerciseService;

impl ExerciseService {
    /// Append an exercise session and return its id.
    pub async fn insert(pool: &SqlitePool, exercise: &NewExercise) -> anyhow::Result<i64> {
        let id = sqlx::query(
            r#"INSERT INTO exercise_records (kind, minutes, burned, steps, date)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&exercise.kind)
        .bind(i64::from(exercise.minutes))
        .bind(exercise.burned)
        .bind(i64::from(exercise.steps))
        .bind(exercise.date)
        .execute(pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }

    pub async fn list_desc(pool: &SqlitePool) -> anyhow::Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"SELECT id, kind, minutes, burned, steps, date
               FROM exercise_records
               ORDER BY date DESC, id DESC"#,
        )
        .fetch_all(pool)
        .await?;
        Ok(records)
    }

    /// Calories burned in `[start, end)`.
    pub async fn sum_in_range(
        pool: &SqlitePool,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(burned), 0) FROM exercise_records WHERE date >= ? AND date < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    pub async fn sum_by_day(
        pool: &SqlitePool,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<HashMap<NaiveDate, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"SELECT date(date) AS d, COALESCE(SUM(burned), 0)
               FROM exercise_records
               WHERE date >= ? AND date < ?
               GROUP BY d"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
        day_totals(rows)
    }

    pub async fn total(pool: &SqlitePool) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(burned), 0) FROM exercise_records")
            .fetch_one(pool)
            .await?;
        Ok(total)
    }
}
