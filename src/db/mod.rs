use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the record store. The database file is created when missing.
///
/// An in-memory database lives only as long as its connection, so those
/// pools are pinned to a single connection that is never recycled.
pub async fn create_pool(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };
    Ok(pool)
}

/// Run the migrations embedded in ./migrations/
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Turn `(YYYY-MM-DD, total)` rows from a `GROUP BY date(..)` query into a
/// lookup by calendar day.
pub(crate) fn day_totals(rows: Vec<(String, i64)>) -> anyhow::Result<HashMap<NaiveDate, i64>> {
    rows.into_iter()
        .map(|(day, total)| {
            let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("Unexpected day bucket {:?}: {}", day, e))?;
            Ok((day, total))
        })
        .collect()
}
