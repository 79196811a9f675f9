use crate::adapters::tg::commands::status_text;
use crate::adapters::tg::keyboards;
use crate::adapters::tg::state::AppState;
use crate::adapters::tg::utils::{answer_callback, answer_callback_empty, edit_text_or_ignore};
use crate::app::services::access::{self as access_service, AccessStatus};
use crate::core::callbacks::UserAction;
use crate::core::types::LanguageCode;
use crate::infra::locales;
use teloxide::prelude::*;
use teloxide::types::MaybeInaccessibleMessage;

pub async fn handle_user(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
    action: UserAction,
    lang: LanguageCode,
) -> ResponseResult<()> {
    let telegram_id = q.from.id.0 as i64;

    match action {
        UserAction::Check => {
            let msg = match &q.message {
                Some(MaybeInaccessibleMessage::Regular(m)) => m.clone(),
                _ => return Ok(()),
            };
            match access_service::status(&state.db, telegram_id).await {
                Ok(AccessStatus::NotApproved) => {
                    answer_callback(
                        &bot,
                        &q.id,
                        locales::get_text(lang.as_str(), "request-under-review", None),
                        true,
                    )
                    .await
                }
                Ok(AccessStatus::Approved { end_time }) => {
                    edit_text_or_ignore(
                        &bot,
                        msg.chat.id,
                        msg.id,
                        status_text(lang, end_time.as_deref()),
                        keyboards::user_menu(lang),
                    )
                    .await?;
                    answer_callback_empty(&bot, &q.id).await
                }
                Err(e) => {
                    tracing::error!(user_id = telegram_id, error = %e, "Failed to load access status");
                    answer_callback(
                        &bot,
                        &q.id,
                        locales::get_text(lang.as_str(), "cmd-error", None),
                        true,
                    )
                    .await
                }
            }
        }
    }
}
