use crate::infra::db::Database;
use anyhow::Result;

/// First contact from an unapproved user: make sure a user row exists and
/// file a pending request. Returns whether the request is new; only a new
/// one is announced to the administrator.
pub async fn submit(db: &Database, user_id: i64, created_at: &str) -> Result<bool> {
    db.create_user(user_id).await?;
    db.add_pending_request(user_id, created_at).await
}
