use super::Database;
use crate::core::types::SettingKey;

#[tokio::test]
async fn settings_row_is_seeded_with_everything_on() {
    let (db, path) = setup_db().await;
    let settings = db.get_settings().await.unwrap();
    assert!(settings.notif_master);
    assert!(settings.notif_tminus3);
    assert!(settings.notif_onday);
    assert!(settings.notif_after);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn toggle_flips_exactly_one_switch() {
    let (db, path) = setup_db().await;
    let new_value = db.toggle_setting(SettingKey::OnDay).await.unwrap();
    assert!(!new_value);

    let settings = db.get_settings().await.unwrap();
    assert!(settings.notif_master);
    assert!(settings.notif_tminus3);
    assert!(!settings.notif_onday);
    assert!(settings.notif_after);

    let new_value = db.toggle_setting(SettingKey::OnDay).await.unwrap();
    assert!(new_value);
    assert!(db.get_settings().await.unwrap().notif_onday);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn set_all_switches_every_class() {
    let (db, path) = setup_db().await;
    db.set_all_notifications(false).await.unwrap();
    let settings = db.get_settings().await.unwrap();
    assert!(!settings.notif_master);
    assert!(!settings.notif_tminus3);
    assert!(!settings.notif_onday);
    assert!(!settings.notif_after);

    db.set_all_notifications(true).await.unwrap();
    let settings = db.get_settings().await.unwrap();
    assert!(settings.notif_master);
    assert!(settings.notif_after);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

async fn setup_db() -> (Database, std::path::PathBuf) {
    let mut path = std::env::temp_dir();
    path.push(format!("gatekeeper_settings_{}.db", uuid::Uuid::now_v7()));
    let db = Database::new(path.to_str().unwrap()).await.unwrap();
    (db, path)
}
