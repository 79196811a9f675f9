use crate::infra::db::Database;
use anyhow::Result;
use chrono::NaiveDateTime;

use crate::core::time::format_end_time;

#[derive(Debug, Clone, PartialEq)]
pub enum AccessStatus {
    NotApproved,
    Approved { end_time: Option<String> },
}

pub async fn status(db: &Database, user_id: i64) -> Result<AccessStatus> {
    if !db.is_approved(user_id).await? {
        return Ok(AccessStatus::NotApproved);
    }
    let end_time = db.get_end_time(user_id).await?;
    Ok(AccessStatus::Approved { end_time })
}

/// Administrator decision: grant access rights and settle the request.
pub async fn approve(db: &Database, user_id: i64, name: Option<&str>) -> Result<()> {
    let name = name.map(str::trim).filter(|n| !n.is_empty() && *n != "-");
    db.approve_user(user_id, name).await?;
    db.remove_pending_request(user_id).await
}

/// Rejection settles the request and nothing else; no user row is created.
pub async fn reject(db: &Database, user_id: i64) -> Result<()> {
    db.remove_pending_request(user_id).await
}

pub async fn set_end(db: &Database, user_id: i64, end: NaiveDateTime) -> Result<String> {
    let end_time = format_end_time(end);
    db.set_end_time(user_id, &end_time).await?;
    Ok(end_time)
}
