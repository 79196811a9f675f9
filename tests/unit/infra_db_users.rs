use super::Database;

#[tokio::test]
async fn missing_row_reads_as_absent() {
    let (db, path) = setup_db().await;
    assert!(!db.is_approved(1).await.unwrap());
    assert_eq!(db.get_end_time(1).await.unwrap(), None);
    assert!(db.get_user(1).await.unwrap().is_none());
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn create_user_is_a_noop_on_existing_rows() {
    let (db, path) = setup_db().await;
    db.create_user(5).await.unwrap();
    db.approve_user(5, Some("Jane")).await.unwrap();
    db.create_user(5).await.unwrap();

    let user = db.get_user(5).await.unwrap().unwrap();
    assert!(user.approved);
    assert_eq!(user.name.as_deref(), Some("Jane"));
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn approve_is_idempotent() {
    let (db, path) = setup_db().await;
    db.approve_user(42, Some("Jane")).await.unwrap();
    db.approve_user(42, Some("Jane")).await.unwrap();

    let users = db.list_all_users().await.unwrap();
    assert_eq!(users.len(), 1);
    let user = &users[0];
    assert!(user.approved);
    assert!(!user.active);
    assert_eq!(user.name.as_deref(), Some("Jane"));
    assert_eq!(user.end_time, None);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn approve_without_name_keeps_existing_name() {
    let (db, path) = setup_db().await;
    db.approve_user(7, Some("Anna")).await.unwrap();
    db.approve_user(7, None).await.unwrap();

    let user = db.get_user(7).await.unwrap().unwrap();
    assert_eq!(user.name.as_deref(), Some("Anna"));
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn set_end_time_clears_sent_flags_and_activates() {
    let (db, path) = setup_db().await;
    db.set_end_time(9, "2025-03-10 18:00:00").await.unwrap();

    // Simulate a completed notification cycle, then restart the window.
    use chrono::TimeZone;
    let now = chrono_tz::Europe::Berlin
        .with_ymd_and_hms(2025, 3, 10, 18, 30, 0)
        .unwrap();
    let claimed = db.claim_after_expiry(now).await.unwrap();
    assert_eq!(claimed.len(), 1);
    let user = db.get_user(9).await.unwrap().unwrap();
    assert!(user.after_sent);
    assert!(!user.active);

    db.set_end_time(9, "2025-04-01 12:00:00").await.unwrap();
    let user = db.get_user(9).await.unwrap().unwrap();
    assert_eq!(user.end_time.as_deref(), Some("2025-04-01 12:00:00"));
    assert!(user.active);
    assert!(!user.tminus3_sent);
    assert!(!user.onday_sent);
    assert!(!user.after_sent);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn set_end_time_creates_an_approved_row() {
    let (db, path) = setup_db().await;
    db.set_end_time(11, "2025-03-10 18:00:00").await.unwrap();
    assert!(db.is_approved(11).await.unwrap());

    let active = db.list_active_users().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].user_id, 11);
    assert_eq!(active[0].end_time, "2025-03-10 18:00:00");
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn set_end_time_keeps_unapproved_rows_unapproved() {
    let (db, path) = setup_db().await;
    db.create_user(13).await.unwrap();
    db.set_end_time(13, "2025-03-10 18:00:00").await.unwrap();
    assert!(!db.is_approved(13).await.unwrap());
    db.close().await;
    let _ = std::fs::remove_file(path);
}

async fn setup_db() -> (Database, std::path::PathBuf) {
    let mut path = std::env::temp_dir();
    path.push(format!("gatekeeper_users_{}.db", uuid::Uuid::now_v7()));
    let db = Database::new(path.to_str().unwrap()).await.unwrap();
    (db, path)
}
