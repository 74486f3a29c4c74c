/// Which key-value backend holds the todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process map; contents are lost on restart.
    Memory,
    /// PostgreSQL `todos` table.
    Postgres { database_url: String },
}

impl StoreBackend {
    /// Short name used in logs and the health payload.
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Postgres { .. } => "postgres",
        }
    }

    /// Resolve the backend from `STORE_BACKEND` and, for Postgres, `DATABASE_URL`.
    fn from_env() -> Self {
        let kind = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "memory".into());
        match kind.trim().to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "postgres" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORE_BACKEND=postgres"),
            },
            other => panic!("STORE_BACKEND must be 'memory' or 'postgres', got '{other}'"),
        }
    }
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`Access-Control-Allow-Origin: *`).
    Any,
    /// Only the listed origins, echoed back when they match.
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. A `*` entry allows any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from the comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Key-value backend selection.
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `*`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `STORE_BACKEND`        | `memory`                   |
    /// | `DATABASE_URL`         | required for `postgres`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins =
            CorsOrigins::parse(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            store: StoreBackend::from_env(),
        }
    }
}
