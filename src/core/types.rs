use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Ru,
}

impl LanguageCode {
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ru => "ru",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "en" => Ok(LanguageCode::En),
            "ru" => Ok(LanguageCode::Ru),
            _ => Err("unsupported language code"),
        }
    }
}

/// One reminder class per access window; each maps to one `*_sent` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationClass {
    TMinus3,
    OnDay,
    AfterExpiry,
}

impl NotificationClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationClass::TMinus3 => "tminus3",
            NotificationClass::OnDay => "onday",
            NotificationClass::AfterExpiry => "after",
        }
    }

    pub const fn message_key(self) -> &'static str {
        match self {
            NotificationClass::TMinus3 => "notify-tminus3",
            NotificationClass::OnDay => "notify-onday",
            NotificationClass::AfterExpiry => "notify-after",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    Master,
    TMinus3,
    OnDay,
    After,
}

impl SettingKey {
    /// Column in the `settings` row; the set is closed, never user input.
    pub const fn column(self) -> &'static str {
        match self {
            SettingKey::Master => "notif_master",
            SettingKey::TMinus3 => "notif_tminus3",
            SettingKey::OnDay => "notif_onday",
            SettingKey::After => "notif_after",
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            SettingKey::Master => "notif-master",
            SettingKey::TMinus3 => "notif-tminus3",
            SettingKey::OnDay => "notif-onday",
            SettingKey::After => "notif-after",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardFilter {
    All,
    WithDate,
    WithoutDate,
}

impl DashboardFilter {
    pub const fn label_key(self) -> &'static str {
        match self {
            DashboardFilter::All => "filter-all",
            DashboardFilter::WithDate => "filter-with",
            DashboardFilter::WithoutDate => "filter-without",
        }
    }

    pub const fn button_key(self) -> &'static str {
        match self {
            DashboardFilter::All => "btn-filter-all",
            DashboardFilter::WithDate => "btn-filter-with",
            DashboardFilter::WithoutDate => "btn-filter-without",
        }
    }
}
