use crate::adapters::tg::callback_handlers::{admin, user};
use crate::adapters::tg::state::AppState;
use crate::adapters::tg::utils;
use crate::core::callbacks::CallbackAction;
use crate::infra::locales;
use std::str::FromStr;
use teloxide::prelude::*;

pub async fn answer_callback(bot: Bot, q: CallbackQuery, state: AppState) -> ResponseResult<()> {
    let telegram_id = q.from.id.0 as i64;
    let config = &state.config;
    let lang = config.general.default_lang;
    let callback_data = q.data.clone().unwrap_or_default();

    let action = match CallbackAction::from_str(&callback_data) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!(data = %callback_data, error = %e, "Unknown callback data");
            return Ok(());
        }
    };

    match action {
        CallbackAction::Admin(admin_action) => {
            if telegram_id != config.telegram.admin_chat_id {
                return utils::answer_callback(
                    &bot,
                    &q.id,
                    locales::get_text(lang.as_str(), "cmd-unauth", None),
                    true,
                )
                .await;
            }
            admin::handle_admin(bot, q, state, admin_action, lang).await
        }
        CallbackAction::User(user_action) => {
            user::handle_user(bot, q, state, user_action, lang).await
        }
        CallbackAction::NoOp => {
            bot.answer_callback_query(q.id).await?;
            Ok(())
        }
    }
}
