/// Server configuration
///
/// All fields can be overridden through environment variables:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | DATABASE_FILE | reserve.db | SQLite file name under WORK_DIR |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | MIN_NOTICE_DAYS | 2 | Minimum calendar days of notice for a booking |
/// | QUARTER_OPEN_LEAD_DAYS | 7 | Days before quarter start that booking opens |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file name, relative to `work_dir`
    pub database_file: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Minimum notice window: a target date must be at least this many
    /// calendar days after "today" for a booking to be created, modified
    /// or cancelled
    pub min_notice_days: i64,
    /// A quarter opens for booking this many days before its start date
    pub quarter_open_lead_days: i64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_file: std::env::var("DATABASE_FILE")
                .unwrap_or_else(|_| "reserve.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            min_notice_days: std::env::var("MIN_NOTICE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            quarter_open_lead_days: std::env::var("QUARTER_OPEN_LEAD_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Full path of the SQLite database file
    pub fn database_path(&self) -> String {
        format!("{}/{}", self.work_dir, self.database_file)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
