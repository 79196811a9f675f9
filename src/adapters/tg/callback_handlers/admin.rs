use crate::adapters::tg::keyboards;
use crate::adapters::tg::state::{AdminDialog, AppState};
use crate::adapters::tg::utils::{answer_callback, answer_callback_empty, edit_text_or_ignore};
use crate::app::services::access as access_service;
use crate::app::services::dashboard;
use crate::app::services::settings as settings_service;
use crate::args;
use crate::core::callbacks::AdminAction;
use crate::core::types::LanguageCode;
use crate::infra::db::Database;
use crate::infra::locales;
use teloxide::prelude::*;
use teloxide::types::{MaybeInaccessibleMessage, MessageId};

pub async fn handle_admin(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
    action: AdminAction,
    lang: LanguageCode,
) -> ResponseResult<()> {
    let msg = match &q.message {
        Some(MaybeInaccessibleMessage::Regular(m)) => m.clone(),
        _ => return Ok(()),
    };
    let chat_id = msg.chat.id;
    let message_id = msg.id;
    let db = &state.db;

    match action {
        AdminAction::Menu => {
            state.dialogs.remove(&chat_id.0);
            edit_text_or_ignore(
                &bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "admin-menu-title", None),
                keyboards::admin_menu(lang),
            )
            .await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::PendingList => {
            render_pending_list(&bot, chat_id, message_id, db, lang).await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::Approve { user_id } => {
            state
                .dialogs
                .insert(chat_id.0, AdminDialog::AwaitApproveName { user_id });
            let args = args!(id = user_id.to_string());
            edit_text_or_ignore(
                &bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "approve-enter-name", args.as_ref()),
                keyboards::back_to_menu(lang),
            )
            .await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::Reject { user_id } => match access_service::reject(db, user_id).await {
            Ok(()) => {
                // Decision notice to the user is best-effort.
                if let Err(e) = bot
                    .send_message(
                        ChatId(user_id),
                        locales::get_text(lang.as_str(), "rejected-user-notice", None),
                    )
                    .await
                {
                    tracing::warn!(user_id, error = %e, "Failed to notify rejected user");
                }
                render_pending_list(&bot, chat_id, message_id, db, lang).await?;
                let args = args!(id = user_id.to_string());
                answer_callback(
                    &bot,
                    &q.id,
                    locales::get_text(lang.as_str(), "rejected-done", args.as_ref()),
                    false,
                )
                .await
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "Failed to reject user");
                answer_error(&bot, &q, lang).await
            }
        },
        AdminAction::Dashboard { filter, page } => match db.list_all_users().await {
            Ok(users) => {
                let view = dashboard::format_page(&users, filter, page, lang);
                let keyboard = keyboards::dashboard_keyboard(
                    lang,
                    filter,
                    view.page,
                    view.has_prev,
                    view.has_next,
                );
                edit_text_or_ignore(&bot, chat_id, message_id, view.text, keyboard).await?;
                answer_callback_empty(&bot, &q.id).await
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load users for dashboard");
                answer_error(&bot, &q, lang).await
            }
        },
        AdminAction::Notifications => {
            render_notifications(&bot, chat_id, message_id, db, lang).await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::NotifToggle { key } => match settings_service::toggle(db, key).await {
            Ok(_) => {
                render_notifications(&bot, chat_id, message_id, db, lang).await?;
                answer_callback_empty(&bot, &q.id).await
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to toggle notification setting");
                answer_error(&bot, &q, lang).await
            }
        },
        AdminAction::NotifSetAll { enabled } => {
            match settings_service::set_all(db, enabled).await {
                Ok(()) => {
                    render_notifications(&bot, chat_id, message_id, db, lang).await?;
                    answer_callback_empty(&bot, &q.id).await
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to switch all notifications");
                    answer_error(&bot, &q, lang).await
                }
            }
        }
        AdminAction::AddUser => {
            state.dialogs.insert(chat_id.0, AdminDialog::AwaitAddUserId);
            edit_text_or_ignore(
                &bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "add-user-enter-id", None),
                keyboards::back_to_menu(lang),
            )
            .await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::SetEnd => {
            state.dialogs.insert(chat_id.0, AdminDialog::AwaitEndUserId);
            edit_text_or_ignore(
                &bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "set-end-enter-id", None),
                keyboards::back_to_menu(lang),
            )
            .await?;
            answer_callback_empty(&bot, &q.id).await
        }
        AdminAction::ListActive => match db.list_active_users().await {
            Ok(rows) => {
                let text = if rows.is_empty() {
                    locales::get_text(lang.as_str(), "active-none", None)
                } else {
                    let mut lines = vec![locales::get_text(lang.as_str(), "active-header", None)];
                    for row in &rows {
                        let args = args!(
                            id = row.user_id.to_string(),
                            end = row.end_time.clone()
                        );
                        lines.push(locales::get_text(lang.as_str(), "active-line", args.as_ref()));
                    }
                    lines.join("\n")
                };
                edit_text_or_ignore(&bot, chat_id, message_id, text, keyboards::back_to_menu(lang))
                    .await?;
                answer_callback_empty(&bot, &q.id).await
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to list active users");
                answer_error(&bot, &q, lang).await
            }
        },
        AdminAction::CheckUser => {
            state
                .dialogs
                .insert(chat_id.0, AdminDialog::AwaitCheckUserId);
            edit_text_or_ignore(
                &bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "check-enter-id", None),
                keyboards::back_to_menu(lang),
            )
            .await?;
            answer_callback_empty(&bot, &q.id).await
        }
    }
}

async fn render_pending_list(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    db: &Database,
    lang: LanguageCode,
) -> ResponseResult<()> {
    let rows = match db.list_pending().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list pending requests");
            return edit_text_or_ignore(
                bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "cmd-error", None),
                keyboards::admin_menu(lang),
            )
            .await;
        }
    };

    if rows.is_empty() {
        edit_text_or_ignore(
            bot,
            chat_id,
            message_id,
            locales::get_text(lang.as_str(), "pending-none", None),
            keyboards::admin_menu(lang),
        )
        .await
    } else {
        let mut lines = vec![locales::get_text(lang.as_str(), "pending-header", None)];
        for row in &rows {
            let args = args!(
                id = row.user_id.to_string(),
                created = row.created_at.clone()
            );
            lines.push(locales::get_text(lang.as_str(), "pending-line", args.as_ref()));
        }
        edit_text_or_ignore(
            bot,
            chat_id,
            message_id,
            lines.join("\n"),
            keyboards::pending_list_keyboard(lang, &rows),
        )
        .await
    }
}

async fn render_notifications(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    db: &Database,
    lang: LanguageCode,
) -> ResponseResult<()> {
    match db.get_settings().await {
        Ok(settings) => {
            edit_text_or_ignore(
                bot,
                chat_id,
                message_id,
                locales::get_text(lang.as_str(), "notif-menu-title", None),
                keyboards::notifications_keyboard(lang, &settings),
            )
            .await
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load notification settings");
            Ok(())
        }
    }
}

async fn answer_error(bot: &Bot, q: &CallbackQuery, lang: LanguageCode) -> ResponseResult<()> {
    answer_callback(
        bot,
        &q.id,
        locales::get_text(lang.as_str(), "cmd-error", None),
        true,
    )
    .await
}
