use crate::adapters::tg::dialogs;
use crate::adapters::tg::keyboards;
use crate::adapters::tg::state::AppState;
use crate::adapters::tg::utils::send_text_key;
use crate::app::services::access::{self as access_service, AccessStatus};
use crate::app::services::requests as request_service;
use crate::args;
use crate::core::time;
use crate::core::types::LanguageCode;
use crate::infra::locales;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available Commands:")]
pub enum Command {
    #[command(description = "Start")]
    Start,
    #[command(description = "Main Menu")]
    Menu,
    #[command(description = "Help")]
    Help,
}

pub async fn answer_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: AppState,
) -> ResponseResult<()> {
    let user = match &msg.from {
        Some(user) => user,
        None => return Ok(()),
    };
    let telegram_id = user.id.0 as i64;
    let config = &state.config;
    let lang = config.general.default_lang;
    let is_admin = telegram_id == config.telegram.admin_chat_id;

    match cmd {
        Command::Start | Command::Menu => {
            if is_admin {
                state.dialogs.remove(&telegram_id);
                bot.send_message(
                    msg.chat.id,
                    locales::get_text(lang.as_str(), "admin-menu-title", None),
                )
                .reply_markup(keyboards::admin_menu(lang))
                .await?;
                return Ok(());
            }
            match access_service::status(&state.db, telegram_id).await {
                Ok(AccessStatus::Approved { end_time }) => {
                    bot.send_message(msg.chat.id, status_text(lang, end_time.as_deref()))
                        .reply_markup(keyboards::user_menu(lang))
                        .await?;
                }
                Ok(AccessStatus::NotApproved) => match cmd {
                    Command::Start => {
                        handle_new_request(&bot, &msg, &state, telegram_id, lang).await?;
                    }
                    _ => {
                        send_text_key(&bot, msg.chat.id, lang, "request-under-review").await?;
                    }
                },
                Err(e) => {
                    tracing::error!(user_id = telegram_id, error = %e, "Failed to load access status");
                    send_text_key(&bot, msg.chat.id, lang, "cmd-error").await?;
                }
            }
        }
        Command::Help => {
            send_text_key(&bot, msg.chat.id, lang, "help-text").await?;
        }
    }

    Ok(())
}

/// Plain-text messages: administrator text feeds the active dialog, other
/// users just get their current status back.
pub async fn answer_message(bot: Bot, msg: Message, state: AppState) -> ResponseResult<()> {
    let user = match &msg.from {
        Some(user) => user,
        None => return Ok(()),
    };
    if msg.text().is_none() {
        return Ok(());
    }
    let telegram_id = user.id.0 as i64;
    let config = &state.config;
    let lang = config.general.default_lang;

    if telegram_id != config.telegram.admin_chat_id {
        match access_service::status(&state.db, telegram_id).await {
            Ok(AccessStatus::Approved { end_time }) => {
                bot.send_message(msg.chat.id, status_text(lang, end_time.as_deref()))
                    .reply_markup(keyboards::user_menu(lang))
                    .await?;
            }
            Ok(AccessStatus::NotApproved) => {
                send_text_key(&bot, msg.chat.id, lang, "request-under-review").await?;
            }
            Err(e) => {
                tracing::error!(user_id = telegram_id, error = %e, "Failed to load access status");
                send_text_key(&bot, msg.chat.id, lang, "cmd-error").await?;
            }
        }
        return Ok(());
    }

    let dialog = state.dialogs.get(&telegram_id).map(|d| d.clone());
    match dialog {
        Some(dialog) => dialogs::handle_dialog(&bot, &msg, &state, dialog).await,
        None => {
            bot.send_message(
                msg.chat.id,
                locales::get_text(lang.as_str(), "admin-menu-title", None),
            )
            .reply_markup(keyboards::admin_menu(lang))
            .await?;
            Ok(())
        }
    }
}

pub(crate) fn status_text(lang: LanguageCode, end_time: Option<&str>) -> String {
    match end_time {
        Some(end) => {
            let args = args!(end = end.to_string());
            locales::get_text(lang.as_str(), "access-until", args.as_ref())
        }
        None => locales::get_text(lang.as_str(), "access-closed", None),
    }
}

async fn handle_new_request(
    bot: &Bot,
    msg: &Message,
    state: &AppState,
    telegram_id: i64,
    lang: LanguageCode,
) -> ResponseResult<()> {
    let now = time::now_in(state.config.operational_parameters.timezone);
    let created_at = time::format_local(now);
    let created = match request_service::submit(&state.db, telegram_id, &created_at).await {
        Ok(created) => created,
        Err(e) => {
            tracing::error!(user_id = telegram_id, error = %e, "Failed to file access request");
            send_text_key(bot, msg.chat.id, lang, "cmd-error").await?;
            return Ok(());
        }
    };
    send_text_key(bot, msg.chat.id, lang, "request-sent").await?;

    if created {
        let from = msg.from.as_ref();
        let username = from
            .and_then(|u| u.username.clone())
            .map(|u| format!("@{u}"))
            .unwrap_or_else(|| "—".to_string());
        let full_name = from
            .map(|u| u.full_name())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "—".to_string());
        let args = args!(
            id = telegram_id.to_string(),
            username = username,
            full_name = full_name
        );
        let text = locales::get_text(lang.as_str(), "admin-new-request", args.as_ref());
        let admin_chat = ChatId(state.config.telegram.admin_chat_id);
        // The announcement is best-effort; the request row already exists.
        if let Err(e) = bot
            .send_message(admin_chat, text)
            .reply_markup(keyboards::approval_keyboard(lang, telegram_id))
            .await
        {
            tracing::warn!(error = %e, "Failed to announce new request to admin");
        }
    }

    Ok(())
}
