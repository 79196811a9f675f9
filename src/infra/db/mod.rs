pub mod claims;
pub mod pending;
pub mod settings;
pub mod types;
pub mod users;

use anyhow::Result;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const WRITE_RETRY_BASE: Duration = Duration::from_millis(50);
const WRITE_RETRY_CAP: Duration = Duration::from_millis(2_000);
const WRITE_RETRY_ATTEMPTS: u32 = 6;

#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Sqlite>,
    // SQLite allows one writer transaction at a time; every write path
    // serializes on this section before touching the engine.
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    pub async fn new(db_file: &str) -> Result<Self> {
        let connect_options = SqliteConnectOptions::new()
            .filename(db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_options)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Runs one mutating operation under the write-exclusion section,
    /// retrying locked/busy engine failures with bounded exponential
    /// backoff. Exhausting the attempts propagates the storage error.
    pub(crate) async fn with_write<T, Fut, F>(&self, op: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = sqlx::Result<T>>,
    {
        let _guard = self.write_lock.lock().await;
        let mut delay = WRITE_RETRY_BASE;
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if is_locked(&e) && attempt < WRITE_RETRY_ATTEMPTS => {
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Database locked, retrying write"
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(WRITE_RETRY_CAP);
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn is_locked(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = db_err.message();
            msg.contains("locked") || msg.contains("busy")
        }
        _ => false,
    }
}
