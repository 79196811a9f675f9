use crate::core::types::LanguageCode;
use crate::infra::locales;
use teloxide::errors::{ApiError, RequestError};
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, MessageId, ParseMode};

pub async fn send_text_key(
    bot: &Bot,
    chat_id: ChatId,
    lang: LanguageCode,
    key: &str,
) -> ResponseResult<()> {
    bot.send_message(chat_id, locales::get_text(lang.as_str(), key, None))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Edits a message in place, ignoring the "message is not modified" reply
/// Telegram returns when the rendered content did not change.
pub async fn edit_text_or_ignore(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> ResponseResult<()> {
    match bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await
    {
        Ok(_) => Ok(()),
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e),
    }
}

pub async fn answer_callback(
    bot: &Bot,
    query_id: &CallbackQueryId,
    text: String,
    alert: bool,
) -> ResponseResult<()> {
    let req = bot.answer_callback_query(query_id.clone()).text(text);
    if alert {
        req.show_alert(true).await?;
    } else {
        req.await?;
    }
    Ok(())
}

pub async fn answer_callback_empty(bot: &Bot, query_id: &CallbackQueryId) -> ResponseResult<()> {
    bot.answer_callback_query(query_id.clone()).await?;
    Ok(())
}
