use anyhow::Result;
use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;

use crate::core::time::{AFTER_EXPIRY_WINDOW_MINUTES, END_TIME_FORMAT, NOTIFY_HOUR};

use super::{Database, types::UserWindow};

// Each claim selects the due users and flips their sent flag in a single
// statement: two overlapping ticks cannot both claim the same row.

impl Database {
    /// Users whose window ends three days after `now`'s local date, once
    /// the local clock has reached the notification hour. Marks
    /// `tminus3_sent` and returns the claimed pairs for dispatch.
    pub async fn claim_tminus3(&self, now: DateTime<Tz>) -> Result<Vec<UserWindow>> {
        if now.hour() < NOTIFY_HOUR {
            return Ok(Vec::new());
        }
        let target = (now.date_naive() + Duration::days(3))
            .format("%Y-%m-%d")
            .to_string();
        let target = target.as_str();
        self.with_write(|| async move {
            sqlx::query_as::<_, UserWindow>(
                "UPDATE users SET tminus3_sent = 1
                 WHERE active = 1 AND tminus3_sent = 0
                   AND end_time IS NOT NULL AND date(end_time) = ?
                 RETURNING user_id, end_time",
            )
            .bind(target)
            .fetch_all(&self.pool)
            .await
        })
        .await
    }

    /// Users whose window ends on `now`'s local date, once the local clock
    /// has reached the notification hour. Marks `onday_sent`.
    pub async fn claim_onday(&self, now: DateTime<Tz>) -> Result<Vec<UserWindow>> {
        if now.hour() < NOTIFY_HOUR {
            return Ok(Vec::new());
        }
        let target = now.date_naive().format("%Y-%m-%d").to_string();
        let target = target.as_str();
        self.with_write(|| async move {
            sqlx::query_as::<_, UserWindow>(
                "UPDATE users SET onday_sent = 1
                 WHERE active = 1 AND onday_sent = 0
                   AND end_time IS NOT NULL AND date(end_time) = ?
                 RETURNING user_id, end_time",
            )
            .bind(target)
            .fetch_all(&self.pool)
            .await
        })
        .await
    }

    /// Users whose window ended within the look-back window before `now`.
    /// Marks `after_sent` and clears `active`; this is where the access
    /// window formally ends.
    pub async fn claim_after_expiry(&self, now: DateTime<Tz>) -> Result<Vec<UserWindow>> {
        let upper = now.format(END_TIME_FORMAT).to_string();
        let lower = (now - Duration::minutes(AFTER_EXPIRY_WINDOW_MINUTES))
            .format(END_TIME_FORMAT)
            .to_string();
        let (upper, lower) = (upper.as_str(), lower.as_str());
        self.with_write(|| async move {
            sqlx::query_as::<_, UserWindow>(
                "UPDATE users SET after_sent = 1, active = 0
                 WHERE active = 1 AND after_sent = 0
                   AND end_time IS NOT NULL
                   AND end_time <= ? AND end_time >= ?
                 RETURNING user_id, end_time",
            )
            .bind(upper)
            .bind(lower)
            .fetch_all(&self.pool)
            .await
        })
        .await
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/infra_db_claims.rs"]
mod tests;
