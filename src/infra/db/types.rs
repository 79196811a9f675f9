use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: Option<String>,
    pub end_time: Option<String>,
    pub active: bool,
    pub approved: bool,
    pub tminus3_sent: bool,
    pub onday_sent: bool,
    pub after_sent: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct PendingRequest {
    pub user_id: i64,
    pub created_at: String,
}

/// One user together with the end of their current access window. Returned
/// by the claim queries and the active-users listing.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserWindow {
    pub user_id: i64,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub struct NotifySettings {
    pub notif_master: bool,
    pub notif_tminus3: bool,
    pub notif_onday: bool,
    pub notif_after: bool,
}
