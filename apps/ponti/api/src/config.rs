use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_customers::SuggesterConfig;
use domain_notifications::SmtpConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub jwt: JwtConfig,
    pub suggester: SuggesterConfig,
    pub smtp: SmtpConfig,
    pub cors: CorsConfig,
    /// Apply pending migrations on startup (`RUN_MIGRATIONS`, default `true`)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST, PORT, API_VERSION
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let jwt = JwtConfig::from_env()?; // JWT_SECRET is required, 32+ chars
        let suggester = SuggesterConfig::from_env()?;
        let smtp = SmtpConfig::from_env()?; // SMTP_HOST, SMTP_PORT, SMTP_FROM_EMAIL, ...
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            jwt,
            suggester,
            smtp,
            cors,
            run_migrations: env_parse_or_default("RUN_MIGRATIONS", "true")?,
        })
    }
}
