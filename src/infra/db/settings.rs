use crate::core::types::SettingKey;
use anyhow::Result;

use super::{Database, types::NotifySettings};

impl Database {
    pub async fn get_settings(&self) -> Result<NotifySettings> {
        let settings = sqlx::query_as::<_, NotifySettings>(
            "SELECT notif_master, notif_tminus3, notif_onday, notif_after
             FROM settings WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(settings)
    }

    /// Flips exactly one switch and returns its new value.
    pub async fn toggle_setting(&self, key: SettingKey) -> Result<bool> {
        let column = key.column();
        let sql =
            format!("UPDATE settings SET {column} = NOT {column} WHERE id = 1 RETURNING {column}");
        let sql = sql.as_str();
        self.with_write(|| async move {
            sqlx::query_scalar::<_, bool>(sql)
                .fetch_one(&self.pool)
                .await
        })
        .await
    }

    pub async fn set_all_notifications(&self, enabled: bool) -> Result<()> {
        self.with_write(|| async move {
            sqlx::query(
                "UPDATE settings
                 SET notif_master = ?, notif_tminus3 = ?, notif_onday = ?, notif_after = ?
                 WHERE id = 1",
            )
            .bind(enabled)
            .bind(enabled)
            .bind(enabled)
            .bind(enabled)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/infra_db_settings.rs"]
mod tests;
