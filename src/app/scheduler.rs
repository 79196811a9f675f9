use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::future::Future;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::core::types::NotificationClass;
use crate::infra::db::{Database, types::UserWindow};

/// Delivery side of the scheduler; implemented by the chat transport.
pub trait Notifier: Send + Sync + 'static {
    fn notify(
        &self,
        user_id: i64,
        class: NotificationClass,
        end_time: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Perpetual notification loop. Runs until the token is cancelled; a
/// failed tick is logged and the loop carries on.
pub fn spawn_scheduler<N: Notifier>(
    db: Database,
    notifier: N,
    tz: Tz,
    tick_seconds: u64,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(tick_seconds, timezone = %tz, "Starting notification scheduler");
        let mut interval = tokio::time::interval(Duration::from_secs(tick_seconds));
        loop {
            tokio::select! {
                () = cancel_token.cancelled() => break,
                _ = interval.tick() => {}
            }
            let now = Utc::now().with_timezone(&tz);
            if let Err(e) = tick(&db, &notifier, now).await {
                tracing::error!(error = %e, "Scheduler tick failed");
            }
        }
        tracing::info!("Notification scheduler stopped");
    })
}

/// One evaluation pass: claim every due user per enabled class and
/// dispatch. The settings row gates classes; the claims themselves stay
/// unconditional.
pub async fn tick<N: Notifier>(db: &Database, notifier: &N, now: DateTime<Tz>) -> Result<()> {
    let settings = db.get_settings().await?;
    if !settings.notif_master {
        return Ok(());
    }

    if settings.notif_tminus3 {
        let claimed = db.claim_tminus3(now).await?;
        dispatch(notifier, NotificationClass::TMinus3, claimed).await;
    }
    if settings.notif_onday {
        let claimed = db.claim_onday(now).await?;
        dispatch(notifier, NotificationClass::OnDay, claimed).await;
    }
    if settings.notif_after {
        let claimed = db.claim_after_expiry(now).await?;
        dispatch(notifier, NotificationClass::AfterExpiry, claimed).await;
    }
    Ok(())
}

async fn dispatch<N: Notifier>(notifier: &N, class: NotificationClass, users: Vec<UserWindow>) {
    for user in users {
        // The claim is already committed; a failed send is logged, never
        // retried.
        if let Err(e) = notifier.notify(user.user_id, class, &user.end_time).await {
            tracing::warn!(
                user_id = user.user_id,
                class = class.as_str(),
                error = %e,
                "Failed to deliver notification"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app_scheduler.rs"]
mod tests;
