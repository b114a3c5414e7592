use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::rules::BookingWindow;

/// Shared application state
///
/// Cloned into every handler; all fields are cheap to clone (`SqlitePool`
/// is an `Arc` internally, `Config` is small and immutable).
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    /// Initialize state: create the work dir, open the database and run
    /// migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            ServerError::Config(format!(
                "Cannot create work dir {}: {e}",
                config.work_dir
            ))
        })?;

        let db = DbService::new(&config.database_path())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// Build state around an existing pool (tests)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Booking-window policy derived from configuration
    pub fn booking_window(&self) -> BookingWindow {
        BookingWindow {
            min_notice_days: self.config.min_notice_days,
            quarter_open_lead_days: self.config.quarter_open_lead_days,
        }
    }
}
