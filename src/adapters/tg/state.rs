use crate::bootstrap::config::Config;
use crate::infra::db::Database;
use dashmap::DashMap;
use std::sync::Arc;

/// In-progress multi-step administrator input, keyed by chat id. Cleared
/// on completion or on returning to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminDialog {
    AwaitApproveName { user_id: i64 },
    AwaitAddUserId,
    AwaitAddUserName { user_id: i64 },
    AwaitEndUserId,
    AwaitEndDate { user_id: i64 },
    AwaitCheckUserId,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub dialogs: Arc<DashMap<i64, AdminDialog>>,
}
