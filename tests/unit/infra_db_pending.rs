use super::Database;

#[tokio::test]
async fn request_is_created_exactly_once() {
    let (db, path) = setup_db().await;
    assert!(db.add_pending_request(10, "2025-03-01 09:00:00").await.unwrap());
    assert!(!db.add_pending_request(10, "2025-03-01 09:05:00").await.unwrap());

    let rows = db.list_pending().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, 10);
    assert_eq!(rows[0].created_at, "2025-03-01 09:00:00");
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn approved_users_cannot_file_requests() {
    let (db, path) = setup_db().await;
    db.approve_user(20, None).await.unwrap();
    assert!(!db.add_pending_request(20, "2025-03-01 09:00:00").await.unwrap());
    assert!(db.list_pending().await.unwrap().is_empty());
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn removed_request_can_be_filed_again() {
    let (db, path) = setup_db().await;
    assert!(db.add_pending_request(30, "2025-03-01 09:00:00").await.unwrap());
    db.remove_pending_request(30).await.unwrap();
    assert!(db.list_pending().await.unwrap().is_empty());
    assert!(db.add_pending_request(30, "2025-03-02 10:00:00").await.unwrap());
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn remove_is_a_noop_without_a_request() {
    let (db, path) = setup_db().await;
    db.remove_pending_request(40).await.unwrap();
    db.close().await;
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn list_orders_by_creation_time() {
    let (db, path) = setup_db().await;
    db.add_pending_request(2, "2025-03-02 08:00:00").await.unwrap();
    db.add_pending_request(1, "2025-03-01 08:00:00").await.unwrap();
    let rows = db.list_pending().await.unwrap();
    assert_eq!(rows[0].user_id, 1);
    assert_eq!(rows[1].user_id, 2);
    db.close().await;
    let _ = std::fs::remove_file(path);
}

async fn setup_db() -> (Database, std::path::PathBuf) {
    let mut path = std::env::temp_dir();
    path.push(format!("gatekeeper_pending_{}.db", uuid::Uuid::now_v7()));
    let db = Database::new(path.to_str().unwrap()).await.unwrap();
    (db, path)
}
