/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Redis connection string
    pub redis_url: String,

    /// Maximum number of PostgreSQL connections in the pool (default: 20)
    pub db_max_connections: u32,

    /// Port the HTTP API binds to (default: 3000)
    pub api_port: u16,

    /// Resend API key for email delivery
    pub resend_api_key: Option<String>,

    /// Resend API base URL
    pub resend_base_url: String,

    /// Email sender address
    pub email_from: String,

    /// Subject line used for every outbound email
    pub email_subject: String,

    /// SMS gateway endpoint that accepts `{to, body}` JSON
    pub sms_gateway_url: Option<String>,

    /// Bearer token for the SMS gateway
    pub sms_api_key: Option<String>,

    /// Per-request timeout for outbound notification calls, in milliseconds
    pub notifier_timeout_ms: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?,
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DB_MAX_CONNECTIONS must be a valid u32"))?,
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT must be a valid u16"))?,
            resend_api_key: std::env::var("RESEND_API_KEY").ok(),
            resend_base_url: std::env::var("RESEND_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "notifications@tiercast.local".to_string()),
            email_subject: std::env::var("EMAIL_SUBJECT")
                .unwrap_or_else(|_| "Notification".to_string()),
            sms_gateway_url: std::env::var("SMS_GATEWAY_URL").ok(),
            sms_api_key: std::env::var("SMS_API_KEY").ok(),
            notifier_timeout_ms: std::env::var("NOTIFIER_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("NOTIFIER_TIMEOUT_MS must be a valid u64"))?,
        })
    }
}
