use crate::adapters;
use crate::adapters::tg::notifier::TelegramNotifier;
use crate::app::scheduler;
use crate::bootstrap::config::Config;
use crate::infra::db::Database;
use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use teloxide::Bot;
use tokio_util::sync::CancellationToken;

pub struct Application {
    config: Arc<Config>,
    db: Database,
    cancel_token: CancellationToken,
}

impl Application {
    pub async fn build(config_path: String) -> Result<Self> {
        tracing::info!(path = %config_path, "Loading config");

        let config_content = std::fs::read_to_string(&config_path)?;
        let mut config: Config = toml::from_str(&config_content)?;

        let config_path_obj = Path::new(&config_path);
        let config_dir = config_path_obj.parent().unwrap_or_else(|| Path::new("."));

        let db_path_buf = if Path::new(&config.database.db_file).is_absolute() {
            Path::new(&config.database.db_file).to_path_buf()
        } else {
            config_dir.join(&config.database.db_file)
        };

        let db_path_str = db_path_buf
            .to_str()
            .ok_or_else(|| anyhow!("Invalid DB path"))?
            .to_string();
        tracing::info!(db_path = %db_path_str, "Database path");

        config.database.db_file.clone_from(&db_path_str);

        let config = Arc::new(config);
        let db = Database::new(&db_path_str).await?;
        let cancel_token = CancellationToken::new();

        Ok(Self {
            config,
            db,
            cancel_token,
        })
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            config,
            db,
            cancel_token,
        } = self;

        let bot = Bot::new(&config.telegram.bot_token);

        let notifier = TelegramNotifier::new(bot.clone(), config.general.default_lang);
        let scheduler_handle = scheduler::spawn_scheduler(
            db.clone(),
            notifier,
            config.operational_parameters.timezone,
            config.operational_parameters.scheduler_tick,
            cancel_token.clone(),
        );

        tokio::spawn(wait_for_shutdown_signal(cancel_token.clone()));

        adapters::tg::run_bot(bot, db.clone(), config, cancel_token.clone()).await;

        cancel_token.cancel();
        let _ = scheduler_handle.await;

        tracing::info!(component = "shutdown", "Closing database pool");
        db.close().await;
        tracing::info!(component = "shutdown", "Database pool closed");

        Ok(())
    }
}

#[cfg(unix)]
async fn wait_for_termination_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGTERM handler");
            tokio::signal::ctrl_c().await.ok();
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}

async fn wait_for_shutdown_signal(cancel_token: CancellationToken) {
    wait_for_termination_signal().await;
    cancel_token.cancel();
}
