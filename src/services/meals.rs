use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::{
    db::day_totals,
    models::meal::{MealRecord, NewMeal},
};

pub struct MealService;

impl MealService {
    /// Append a meal and return its id.
    pub async fn insert(pool: &SqlitePool, meal: &NewMeal) -> anyhow::Result<i64> {
        let id = sqlx::query("INSERT INTO meal_records (meal, calorie, date) VALUES (?, ?, ?)")
            .bind(&meal.meal)
            .bind(meal.calorie)
            .bind(meal.date)
            .execute(pool)
            .await?
            .last_insert_rowid();
        Ok(id)
    }

    /// All meals, newest first.
    pub async fn list_desc(pool: &SqlitePool) -> anyhow::Result<Vec<MealRecord>> {
        let records = sqlx::query_as::<_, MealRecord>(
            "SELECT id, meal, calorie, date FROM meal_records ORDER BY date DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(records)
    }

    /// Calories eaten in `[start, end)`.
    pub async fn sum_in_range(
        pool: &SqlitePool,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(calorie), 0) FROM meal_records WHERE date >= ? AND date < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Calories eaten in `[start, end)`, bucketed by calendar day. Days
    /// without meals are absent from the map.
    pub async fn sum_by_day(
        pool: &SqlitePool,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<HashMap<NaiveDate, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"SELECT date(date) AS d, COALESCE(SUM(calorie), 0)
               FROM meal_records
               WHERE date >= ? AND date < ?
               GROUP BY d"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
        day_totals(rows)
    }

    /// Calories eaten over the whole history.
    pub async fn total(pool: &SqlitePool) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(calorie), 0) FROM meal_records")
            .fetch_one(pool)
            .await?;
        Ok(total)
    }
}
