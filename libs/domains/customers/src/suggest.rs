//! Trigram name suggestions backed by PostgreSQL `pg_trgm`.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};
use regex::Regex;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use serde::Serialize;
use std::sync::LazyLock;
use utoipa::ToSchema;

use crate::error::CustomerResult;

static VALID_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid identifier pattern"));

/// One suggestion: the matched row id and its text.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema, FromQueryResult)]
pub struct Suggestion {
    pub id: i64,
    pub text: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Suggester: Send + Sync {
    /// Best matches for `query`, most similar first.
    async fn suggest(&self, query: &str) -> CustomerResult<Vec<Suggestion>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggesterConfig {
    pub table: String,
    pub column: String,
    pub limit: i64,
    pub threshold: f64,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            table: "customers".to_string(),
            column: "name".to_string(),
            limit: 10,
            threshold: 0.3,
        }
    }
}

impl SuggesterConfig {
    /// Identifiers are interpolated into SQL, so they must be plain names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, details: String| ConfigError::ParseError {
            key: key.to_string(),
            details,
        };

        if self.limit <= 0 {
            return Err(invalid(
                "SUGGESTER_LIMIT",
                format!("must be > 0, got {}", self.limit),
            ));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid(
                "SUGGESTER_THRESHOLD",
                format!("must be between 0 and 1, got {}", self.threshold),
            ));
        }
        if !VALID_IDENTIFIER.is_match(&self.table) {
            return Err(invalid(
                "SUGGESTER_TABLE",
                format!("invalid table name: {}", self.table),
            ));
        }
        if !VALID_IDENTIFIER.is_match(&self.column) {
            return Err(invalid(
                "SUGGESTER_COLUMN",
                format!("invalid column name: {}", self.column),
            ));
        }
        Ok(())
    }
}

impl FromEnv for SuggesterConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            table: env_or_default("SUGGESTER_TABLE", "customers"),
            column: env_or_default("SUGGESTER_COLUMN", "name"),
            limit: env_parse_or_default("SUGGESTER_LIMIT", "10")?,
            threshold: env_parse_or_default("SUGGESTER_THRESHOLD", "0.3")?,
        };
        config.validate()?;
        Ok(config)
    }
}

pub struct PgTrgmSuggester {
    db: DatabaseConnection,
    sql: String,
    limit: i64,
    threshold: f64,
}

impl PgTrgmSuggester {
    pub fn new(db: DatabaseConnection, config: SuggesterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let SuggesterConfig {
            table,
            column,
            limit,
            threshold,
        } = config;
        let sql = format!(
            "SELECT id, {column} AS text FROM {table} \
             WHERE similarity({column}, $1) >= $2 \
             ORDER BY similarity({column}, $1) DESC \
             LIMIT $3"
        );

        Ok(Self {
            db,
            sql,
            limit,
            threshold,
        })
    }
}

#[async_trait]
impl Suggester for PgTrgmSuggester {
    async fn suggest(&self, query: &str) -> CustomerResult<Vec<Suggestion>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            self.sql.as_str(),
            [query.into(), self.threshold.into(), self.limit.into()],
        );

        let suggestions = Suggestion::find_by_statement(statement)
            .all(&self.db)
            .await?;

        tracing::debug!(query, matches = suggestions.len(), "Suggest");
        Ok(suggestions)
    }
}
