use crate::core::types::{DashboardFilter, SettingKey};
use anyhow::{Result, anyhow};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum CallbackAction {
    Admin(AdminAction),
    User(UserAction),
    NoOp,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum AdminAction {
    Menu,
    PendingList,
    Approve { user_id: i64 },
    Reject { user_id: i64 },
    Dashboard { filter: DashboardFilter, page: u32 },
    Notifications,
    NotifToggle { key: SettingKey },
    NotifSetAll { enabled: bool },
    AddUser,
    SetEnd,
    ListActive,
    CheckUser,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum UserAction {
    Check,
}

fn encode_callback(action: &CallbackAction) -> String {
    let bytes = match postcard::to_stdvec(action) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to serialize callback action: {}", e);
            return "noop".to_string();
        }
    };
    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);
    if encoded.len() > 64 {
        tracing::error!("Callback data too long ({} bytes)", encoded.len());
        return "noop".to_string();
    }
    encoded
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = encode_callback(self);
        write!(f, "{}", encoded)
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            encode_callback(&CallbackAction::Admin(self.clone()))
        )
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_callback(&CallbackAction::User(self.clone())))
    }
}

impl FromStr for CallbackAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "noop" {
            return Ok(CallbackAction::NoOp);
        }
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(s)
            .map_err(|e| anyhow!("Invalid callback encoding: {}", e))?;
        postcard::from_bytes(&bytes).map_err(|e| anyhow!("Invalid callback data: {}", e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_callbacks.rs"]
mod tests;
