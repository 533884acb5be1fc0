use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::models::BestScoreRecord;
use crate::best_score::ScoreStore;

/// Load the stored best score, if any
pub async fn load_best_score(pool: &SqlitePool) -> Result<Option<BestScoreRecord>> {
    let row = sqlx::query_as::<_, (i64, String)>(
        r#"
        SELECT guesses, achieved_at
        FROM best_score
        WHERE id = 1
        "#,
    )
    .fetch_optional(pool)
    .await
    .context("Failed to load best score")?;

    row.map(|(guesses, achieved_at)| BestScoreRecord::from_row(guesses, &achieved_at))
        .transpose()
}

/// Insert or replace the best score
pub async fn save_best_score(
    pool: &SqlitePool,
    guess_count: u32,
    achieved_at: DateTime<Utc>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO best_score (id, guesses, achieved_at)
        VALUES (1, ?, ?)
        ON CONFLICT(id) DO UPDATE
        SET guesses = excluded.guesses, achieved_at = excluded.achieved_at
        "#,
    )
    .bind(i64::from(guess_count))
    .bind(achieved_at.to_rfc3339())
    .execute(pool)
    .await
    .context("Failed to save best score")?;

    Ok(())
}

/// Remove the best score
pub async fn clear_best_score(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM best_score")
        .execute(pool)
        .await
        .context("Failed to clear best score")?;

    Ok(())
}

/// [`ScoreStore`] on top of SQLite.
///
/// The trait is synchronous, so each call blocks the current worker thread
/// on the async query. Requires a multi-threaded tokio runtime.
#[derive(Clone)]
pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn record(&self) -> Result<Option<BestScoreRecord>> {
        self.run_db_operation(load_best_score(&self.pool))
    }

    fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        let handle = tokio::runtime::Handle::try_current()
            .context("Score database used outside of a tokio runtime")?;
        tokio::task::block_in_place(|| handle.block_on(future))
    }
}

impl ScoreStore for SqliteScoreStore {
    fn get(&self) -> Result<Option<u32>> {
        Ok(self.record()?.map(|r| r.guess_count))
    }

    fn set(&mut self, guess_count: u32) -> Result<()> {
        self.run_db_operation(save_best_score(&self.pool, guess_count, Utc::now()))
    }

    fn clear(&mut self) -> Result<()> {
        self.run_db_operation(clear_best_score(&self.pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::{BestScoreOutcome, BestScoreTracker};
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_empty_database_has_no_best() {
        let pool = create_memory_pool().await.unwrap();
        assert_eq!(load_best_score(&pool).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_overwrite() {
        let pool = create_memory_pool().await.unwrap();

        save_best_score(&pool, 9, Utc::now()).await.unwrap();
        save_best_score(&pool, 6, Utc::now()).await.unwrap();

        let record = load_best_score(&pool).await.unwrap().unwrap();
        assert_eq!(record.guess_count, 6);

        clear_best_score(&pool).await.unwrap();
        assert_eq!(load_best_score(&pool).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_an_error() {
        let pool = create_memory_pool().await.unwrap();
        sqlx::query("INSERT INTO best_score (id, guesses, achieved_at) VALUES (1, -4, 'x')")
            .execute(&pool)
            .await
            .unwrap();

        assert!(load_best_score(&pool).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_tracker_over_sqlite_store() {
        let pool = create_memory_pool().await.unwrap();
        let mut tracker = BestScoreTracker::new(SqliteScoreStore::new(pool));

        assert_eq!(tracker.best(), None);
        assert_eq!(tracker.compare(7), BestScoreOutcome::NewBest { guess_count: 7 });
        assert_eq!(tracker.compare(9), BestScoreOutcome::Missed { best: 7 });
        assert_eq!(tracker.compare(7), BestScoreOutcome::Tied { best: 7 });
        assert_eq!(tracker.best(), Some(7));

        tracker.reset();
        assert_eq!(tracker.best(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_corrupt_row_reads_as_unset() {
        let pool = create_memory_pool().await.unwrap();
        sqlx::query("INSERT INTO best_score (id, guesses, achieved_at) VALUES (1, -4, 'x')")
            .execute(&pool)
            .await
            .unwrap();

        let tracker = BestScoreTracker::new(SqliteScoreStore::new(pool));
        assert_eq!(tracker.best(), None);
    }
}
