use anyhow::Result;

use super::{Database, types::PendingRequest};

impl Database {
    /// Returns whether a request was newly created. An already-approved
    /// user or a duplicate request yields `false`, not an error. The
    /// approval check and the insert share one transaction.
    pub async fn add_pending_request(&self, user_id: i64, created_at: &str) -> Result<bool> {
        self.with_write(|| async move {
            let mut tx = self.pool.begin().await?;
            let approved: Option<bool> =
                sqlx::query_scalar("SELECT approved FROM users WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if approved.unwrap_or(false) {
                return Ok(false);
            }
            let res =
                sqlx::query("INSERT OR IGNORE INTO pending (user_id, created_at) VALUES (?, ?)")
                    .bind(user_id)
                    .bind(created_at)
                    .execute(&mut *tx)
                    .await?;
            tx.commit().await?;
            Ok(res.rows_affected() > 0)
        })
        .await
    }

    pub async fn remove_pending_request(&self, user_id: i64) -> Result<()> {
        self.with_write(|| async move {
            sqlx::query("DELETE FROM pending WHERE user_id = ?")
                .bind(user_id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    pub async fn list_pending(&self) -> Result<Vec<PendingRequest>> {
        let rows = sqlx::query_as::<_, PendingRequest>(
            "SELECT user_id, created_at FROM pending ORDER BY created_at, user_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/infra_db_pending.rs"]
mod tests;
