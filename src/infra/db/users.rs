use anyhow::Result;

use super::{
    Database,
    types::{UserRecord, UserWindow},
};

impl Database {
    /// Inserts a bare user row unless one already exists.
    pub async fn create_user(&self, user_id: i64) -> Result<()> {
        self.with_write(|| async move {
            sqlx::query("INSERT OR IGNORE INTO users (user_id) VALUES (?)")
                .bind(user_id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    /// Grants access rights. Idempotent; creates the row when absent. A
    /// name is stored only when given, an existing name is never erased.
    pub async fn approve_user(&self, user_id: i64, name: Option<&str>) -> Result<()> {
        self.with_write(|| async move {
            sqlx::query(
                "INSERT INTO users (user_id, name, approved) VALUES (?, ?, 1)
                 ON CONFLICT(user_id) DO UPDATE SET
                     approved = 1,
                     name = COALESCE(excluded.name, users.name)",
            )
            .bind(user_id)
            .bind(name)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
        .await
    }

    /// Starts (or restarts) an access window. The three sent flags are
    /// meaningful only relative to the current end time, so they are
    /// cleared in the same statement. A created row is implicitly approved.
    pub async fn set_end_time(&self, user_id: i64, end_time: &str) -> Result<()> {
        self.with_write(|| async move {
            sqlx::query(
                "INSERT INTO users (user_id, end_time, active, approved) VALUES (?, ?, 1, 1)
                 ON CONFLICT(user_id) DO UPDATE SET
                     end_time = excluded.end_time,
                     active = 1,
                     tminus3_sent = 0,
                     onday_sent = 0,
                     after_sent = 0",
            )
            .bind(user_id)
            .bind(end_time)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
        .await
    }

    pub async fn get_end_time(&self, user_id: i64) -> Result<Option<String>> {
        let end_time = sqlx::query_scalar::<_, Option<String>>(
            "SELECT end_time FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(end_time.flatten())
    }

    /// False for a missing row, not an error.
    pub async fn is_approved(&self, user_id: i64) -> Result<bool> {
        let approved =
            sqlx::query_scalar::<_, bool>("SELECT approved FROM users WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(approved.unwrap_or(false))
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT user_id, name, end_time, active, approved,
                    tminus3_sent, onday_sent, after_sent
             FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_all_users(&self) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT user_id, name, end_time, active, approved,
                    tminus3_sent, onday_sent, after_sent
             FROM users ORDER BY user_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn list_active_users(&self) -> Result<Vec<UserWindow>> {
        let users = sqlx::query_as::<_, UserWindow>(
            "SELECT user_id, end_time FROM users
             WHERE active = 1 AND end_time IS NOT NULL
             ORDER BY end_time",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/infra_db_users.rs"]
mod tests;
