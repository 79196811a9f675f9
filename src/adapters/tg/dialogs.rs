use crate::adapters::tg::commands::status_text;
use crate::adapters::tg::keyboards;
use crate::adapters::tg::state::{AdminDialog, AppState};
use crate::args;
use crate::core::time;
use crate::core::types::LanguageCode;
use crate::infra::db::Database;
use crate::infra::locales;
use teloxide::prelude::*;

/// Routes one administrator text message through the dialog it belongs to.
/// Invalid input re-prompts and keeps the dialog; storage failures drop it.
pub async fn handle_dialog(
    bot: &Bot,
    msg: &Message,
    state: &AppState,
    dialog: AdminDialog,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let lang = state.config.general.default_lang;
    let text = msg.text().unwrap_or_default().trim().to_string();

    match dialog {
        AdminDialog::AwaitApproveName { user_id } => {
            finish_approval(bot, chat_id, state, user_id, &text, "approved-done").await
        }
        AdminDialog::AwaitAddUserId => match text.parse::<i64>() {
            Ok(user_id) => {
                state
                    .dialogs
                    .insert(chat_id.0, AdminDialog::AwaitAddUserName { user_id });
                let args = args!(id = user_id.to_string());
                bot.send_message(
                    chat_id,
                    locales::get_text(lang.as_str(), "approve-enter-name", args.as_ref()),
                )
                .reply_markup(keyboards::back_to_menu(lang))
                .await?;
                Ok(())
            }
            Err(_) => reprompt(bot, chat_id, lang, "bad-user-id").await,
        },
        AdminDialog::AwaitAddUserName { user_id } => {
            finish_approval(bot, chat_id, state, user_id, &text, "add-user-done").await
        }
        AdminDialog::AwaitEndUserId => match text.parse::<i64>() {
            Ok(user_id) => {
                state
                    .dialogs
                    .insert(chat_id.0, AdminDialog::AwaitEndDate { user_id });
                bot.send_message(
                    chat_id,
                    locales::get_text(lang.as_str(), "set-end-enter-dt", None),
                )
                .reply_markup(keyboards::back_to_menu(lang))
                .await?;
                Ok(())
            }
            Err(_) => reprompt(bot, chat_id, lang, "bad-user-id").await,
        },
        AdminDialog::AwaitEndDate { user_id } => match time::parse_end_time(&text) {
            Ok(end) => {
                match crate::app::services::access::set_end(&state.db, user_id, end).await {
                    Ok(end_time) => {
                        state.dialogs.remove(&chat_id.0);
                        let args = args!(id = user_id.to_string(), end = end_time);
                        bot.send_message(
                            chat_id,
                            locales::get_text(lang.as_str(), "set-end-done", args.as_ref()),
                        )
                        .reply_markup(keyboards::admin_menu(lang))
                        .await?;
                    }
                    Err(e) => {
                        tracing::error!(user_id, error = %e, "Failed to set end time");
                        fail_dialog(bot, chat_id, state, lang).await?;
                    }
                }
                Ok(())
            }
            Err(_) => reprompt(bot, chat_id, lang, "bad-datetime").await,
        },
        AdminDialog::AwaitCheckUserId => match text.parse::<i64>() {
            Ok(user_id) => {
                match state.db.get_end_time(user_id).await {
                    Ok(end_time) => {
                        state.dialogs.remove(&chat_id.0);
                        let key = if end_time.is_some() {
                            "check-until"
                        } else {
                            "check-closed"
                        };
                        let args = args!(
                            id = user_id.to_string(),
                            end = end_time.unwrap_or_default()
                        );
                        bot.send_message(
                            chat_id,
                            locales::get_text(lang.as_str(), key, args.as_ref()),
                        )
                        .reply_markup(keyboards::admin_menu(lang))
                        .await?;
                    }
                    Err(e) => {
                        tracing::error!(user_id, error = %e, "Failed to read end time");
                        fail_dialog(bot, chat_id, state, lang).await?;
                    }
                }
                Ok(())
            }
            Err(_) => reprompt(bot, chat_id, lang, "bad-user-id").await,
        },
    }
}

async fn finish_approval(
    bot: &Bot,
    chat_id: ChatId,
    state: &AppState,
    user_id: i64,
    raw_name: &str,
    done_key: &str,
) -> ResponseResult<()> {
    let lang = state.config.general.default_lang;
    match crate::app::services::access::approve(&state.db, user_id, Some(raw_name)).await {
        Ok(()) => {
            state.dialogs.remove(&chat_id.0);
            notify_approved(bot, &state.db, user_id, lang).await;
            let args = args!(id = user_id.to_string());
            bot.send_message(
                chat_id,
                locales::get_text(lang.as_str(), done_key, args.as_ref()),
            )
            .reply_markup(keyboards::admin_menu(lang))
            .await?;
        }
        Err(e) => {
            tracing::error!(user_id, error = %e, "Failed to approve user");
            fail_dialog(bot, chat_id, state, lang).await?;
        }
    }
    Ok(())
}

/// The decision stands even when the user cannot be reached.
pub(super) async fn notify_approved(bot: &Bot, db: &Database, user_id: i64, lang: LanguageCode) {
    if let Err(e) = bot
        .send_message(
            ChatId(user_id),
            locales::get_text(lang.as_str(), "approved-user-notice", None),
        )
        .await
    {
        tracing::warn!(user_id, error = %e, "Failed to notify approved user");
        return;
    }
    let end_time = db.get_end_time(user_id).await.ok().flatten();
    if let Err(e) = bot
        .send_message(ChatId(user_id), status_text(lang, end_time.as_deref()))
        .reply_markup(keyboards::user_menu(lang))
        .await
    {
        tracing::warn!(user_id, error = %e, "Failed to send status to approved user");
    }
}

async fn reprompt(bot: &Bot, chat_id: ChatId, lang: LanguageCode, key: &str) -> ResponseResult<()> {
    bot.send_message(chat_id, locales::get_text(lang.as_str(), key, None))
        .reply_markup(keyboards::back_to_menu(lang))
        .await?;
    Ok(())
}

async fn fail_dialog(
    bot: &Bot,
    chat_id: ChatId,
    state: &AppState,
    lang: LanguageCode,
) -> ResponseResult<()> {
    state.dialogs.remove(&chat_id.0);
    bot.send_message(chat_id, locales::get_text(lang.as_str(), "cmd-error", None))
        .reply_markup(keyboards::admin_menu(lang))
        .await?;
    Ok(())
}
