use crate::args;
use crate::core::callbacks::{AdminAction, UserAction};
use crate::core::types::{DashboardFilter, LanguageCode, SettingKey};
use crate::infra::db::types::{NotifySettings, PendingRequest};
use crate::infra::locales;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn callback_button<T, A>(text: T, action: A) -> InlineKeyboardButton
where
    T: Into<String>,
    A: ToString,
{
    InlineKeyboardButton::callback(text.into(), action.to_string())
}

fn text_key(lang: LanguageCode, key: &str) -> String {
    locales::get_text(lang.as_str(), key, None)
}

pub fn user_menu(lang: LanguageCode) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback_button(
        text_key(lang, "btn-user-check"),
        UserAction::Check,
    )]])
}

pub fn admin_menu(lang: LanguageCode) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![callback_button(
            text_key(lang, "btn-admin-dashboard"),
            AdminAction::Dashboard {
                filter: DashboardFilter::All,
                page: 0,
            },
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-notifications"),
            AdminAction::Notifications,
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-pending"),
            AdminAction::PendingList,
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-add-user"),
            AdminAction::AddUser,
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-set-end"),
            AdminAction::SetEnd,
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-active"),
            AdminAction::ListActive,
        )],
        vec![callback_button(
            text_key(lang, "btn-admin-check-user"),
            AdminAction::CheckUser,
        )],
    ])
}

pub fn back_to_menu(lang: LanguageCode) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback_button(
        text_key(lang, "btn-back"),
        AdminAction::Menu,
    )]])
}

fn decision_row(lang: LanguageCode, user_id: i64) -> Vec<InlineKeyboardButton> {
    let approve_args = args!(id = user_id.to_string());
    let reject_args = args!(id = user_id.to_string());
    vec![
        callback_button(
            locales::get_text(lang.as_str(), "btn-approve", approve_args.as_ref()),
            AdminAction::Approve { user_id },
        ),
        callback_button(
            locales::get_text(lang.as_str(), "btn-reject", reject_args.as_ref()),
            AdminAction::Reject { user_id },
        ),
    ]
}

/// Attached to the new-request announcement sent to the administrator.
pub fn approval_keyboard(lang: LanguageCode, user_id: i64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        decision_row(lang, user_id),
        vec![callback_button(text_key(lang, "btn-back"), AdminAction::Menu)],
    ])
}

pub fn pending_list_keyboard(
    lang: LanguageCode,
    requests: &[PendingRequest],
) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = requests
        .iter()
        .map(|req| decision_row(lang, req.user_id))
        .collect();
    rows.push(vec![callback_button(
        text_key(lang, "btn-back"),
        AdminAction::Menu,
    )]);
    InlineKeyboardMarkup::new(rows)
}

pub fn dashboard_keyboard(
    lang: LanguageCode,
    filter: DashboardFilter,
    page: u32,
    has_prev: bool,
    has_next: bool,
) -> InlineKeyboardMarkup {
    let mut rows = Vec::new();

    let mut nav_row = Vec::new();
    if has_prev {
        nav_row.push(callback_button(
            text_key(lang, "btn-prev"),
            AdminAction::Dashboard {
                filter,
                page: page - 1,
            },
        ));
    }
    if has_next {
        nav_row.push(callback_button(
            text_key(lang, "btn-next"),
            AdminAction::Dashboard {
                filter,
                page: page + 1,
            },
        ));
    }
    if !nav_row.is_empty() {
        rows.push(nav_row);
    }

    let filters = [
        DashboardFilter::All,
        DashboardFilter::WithDate,
        DashboardFilter::WithoutDate,
    ];
    rows.push(
        filters
            .into_iter()
            .map(|f| {
                let label = text_key(lang, f.button_key());
                let label = if f == filter {
                    format!("• {label}")
                } else {
                    label
                };
                callback_button(label, AdminAction::Dashboard { filter: f, page: 0 })
            })
            .collect(),
    );

    rows.push(vec![callback_button(
        text_key(lang, "btn-back"),
        AdminAction::Menu,
    )]);
    InlineKeyboardMarkup::new(rows)
}

pub fn notifications_keyboard(lang: LanguageCode, settings: &NotifySettings) -> InlineKeyboardMarkup {
    let toggle_row = |key: SettingKey, on: bool| {
        let state = text_key(lang, if on { "state-on" } else { "state-off" });
        let label = format!("{}: {}", text_key(lang, key.label_key()), state);
        vec![callback_button(label, AdminAction::NotifToggle { key })]
    };

    InlineKeyboardMarkup::new(vec![
        toggle_row(SettingKey::Master, settings.notif_master),
        toggle_row(SettingKey::TMinus3, settings.notif_tminus3),
        toggle_row(SettingKey::OnDay, settings.notif_onday),
        toggle_row(SettingKey::After, settings.notif_after),
        vec![
            callback_button(
                text_key(lang, "btn-notif-all-on"),
                AdminAction::NotifSetAll { enabled: true },
            ),
            callback_button(
                text_key(lang, "btn-notif-all-off"),
                AdminAction::NotifSetAll { enabled: false },
            ),
        ],
        vec![callback_button(text_key(lang, "btn-back"), AdminAction::Menu)],
    ])
}

#[cfg(test)]
#[path = "../../../tests/unit/tg_keyboards.rs"]
mod tests;
