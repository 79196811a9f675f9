use crate::app::scheduler::Notifier;
use crate::args;
use crate::core::types::{LanguageCode, NotificationClass};
use crate::infra::locales;
use anyhow::Result;
use teloxide::prelude::*;

/// Delivers scheduler notifications over Telegram. The external user
/// identity doubles as the chat id.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    lang: LanguageCode,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, lang: LanguageCode) -> Self {
        Self { bot, lang }
    }
}

impl Notifier for TelegramNotifier {
    async fn notify(&self, user_id: i64, class: NotificationClass, end_time: &str) -> Result<()> {
        let args = args!(end = end_time.to_string());
        let text = locales::get_text(self.lang.as_str(), class.message_key(), args.as_ref());
        self.bot.send_message(ChatId(user_id), text).await?;
        Ok(())
    }
}
