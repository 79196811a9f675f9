use crate::core::types::SettingKey;
use crate::infra::db::{Database, types::NotifySettings};
use anyhow::Result;

pub async fn get(db: &Database) -> Result<NotifySettings> {
    db.get_settings().await
}

pub async fn toggle(db: &Database, key: SettingKey) -> Result<bool> {
    db.toggle_setting(key).await
}

pub async fn set_all(db: &Database, enabled: bool) -> Result<()> {
    db.set_all_notifications(enabled).await
}
