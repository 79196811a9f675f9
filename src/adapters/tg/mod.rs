pub mod callback_handlers;
pub mod callbacks;
pub mod commands;
pub mod dialogs;
pub mod keyboards;
pub mod notifier;
pub mod state;
pub mod utils;

use crate::bootstrap::config::Config;
use crate::core::types::LanguageCode;
use crate::infra::db::Database;
use crate::infra::locales;
use dashmap::DashMap;
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::{BotCommand, BotCommandScope},
};
use tokio_util::sync::CancellationToken;

use self::commands::Command;
use self::state::AppState;

pub async fn run_bot(bot: Bot, db: Database, config: Arc<Config>, cancel_token: CancellationToken) {
    let state = AppState {
        db,
        config: config.clone(),
        dialogs: Arc::new(DashMap::new()),
    };

    if let Err(e) = set_bot_commands(&bot, &config).await {
        tracing::error!(error = %e, "Failed to set bot commands");
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(commands::answer_command),
        )
        .branch(Update::filter_message().endpoint(commands::answer_message))
        .branch(Update::filter_callback_query().endpoint(callbacks::answer_callback));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        cancel_token.cancelled().await;
        if let Ok(shutdown) = shutdown_token.shutdown() {
            shutdown.await;
        }
    });

    dispatcher.dispatch().await;
}

async fn set_bot_commands(bot: &Bot, config: &Config) -> ResponseResult<()> {
    let default_lang = config.general.default_lang;
    bot.set_my_commands(get_user_commands(default_lang))
        .scope(BotCommandScope::AllPrivateChats)
        .await?;

    for lang in [LanguageCode::En, LanguageCode::Ru] {
        if lang == default_lang {
            continue;
        }
        bot.set_my_commands(get_user_commands(lang))
            .scope(BotCommandScope::AllPrivateChats)
            .language_code(lang.as_str())
            .await?;
    }

    Ok(())
}

fn get_user_commands(lang: LanguageCode) -> Vec<BotCommand> {
    vec![
        BotCommand::new(
            "start",
            locales::get_text(lang.as_str(), "cmd-desc-start", None),
        ),
        BotCommand::new(
            "menu",
            locales::get_text(lang.as_str(), "cmd-desc-menu", None),
        ),
        BotCommand::new(
            "help",
            locales::get_text(lang.as_str(), "cmd-desc-help", None),
        ),
    ]
}
