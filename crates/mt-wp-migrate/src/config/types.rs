//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source database configuration (Movable Type).
    pub source: SourceConfig,

    /// Target database configuration (WordPress).
    pub target: TargetConfig,

    /// Migration behavior configuration.
    #[serde(default)]
    pub migration: MigrationConfig,
}

/// Source database (Movable Type, MySQL) configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Database host.
    pub host: String,

    /// Database port (default: 3306).
    #[serde(default = "default_mysql_port")]
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Username.
    pub user: String,

    /// Password.
    pub password: String,

    /// Connection character set (default: "utf8").
    ///
    /// Old Movable Type installations commonly wrote UTF-8 bytes into
    /// latin1 tables; set this to "latin1" for those so the bytes come
    /// back untouched.
    #[serde(default = "default_utf8")]
    pub charset: String,
}

/// Target database (WordPress, MySQL) configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Database host.
    pub host: String,

    /// Database port (default: 3306).
    #[serde(default = "default_mysql_port")]
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Username.
    pub user: String,

    /// Password.
    pub password: String,

    /// Connection character set (default: "utf8mb4").
    #[serde(default = "default_utf8mb4")]
    pub charset: String,

    /// WordPress table prefix (default: "wp_"). Also prefixes the
    /// usermeta capability/level keys, which WordPress derives from the
    /// table prefix.
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
}

/// Migration behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Rows per page. Smaller pages mean a longer migration but less
    /// memory; adjust down for blogs with very large posts.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Movable Type blog IDs to migrate. WordPress has no notion of
    /// multiple blogs, so everything lands in one installation.
    #[serde(default = "default_blog_ids")]
    pub blog_ids: Vec<i64>,

    /// IANA timezone name shared by both databases (default: "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// strftime-style format for datetime strings written to WordPress
    /// (default: "%Y-%m-%d %H:%M:%S").
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Domain suffix for the default post/page GUID generator, which
    /// produces "{entry_id}@{guid_domain}".
    #[serde(default = "default_guid_domain")]
    pub guid_domain: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            blog_ids: default_blog_ids(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            guid_domain: default_guid_domain(),
        }
    }
}

// Passwords must not leak into logs, so Debug is written by hand.

impl std::fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("charset", &self.charset)
            .finish()
    }
}

impl std::fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("charset", &self.charset)
            .field("table_prefix", &self.table_prefix)
            .finish()
    }
}

// Default value functions for serde

fn default_mysql_port() -> u16 {
    3306
}

fn default_utf8() -> String {
    "utf8".to_string()
}

fn default_utf8mb4() -> String {
    "utf8mb4".to_string()
}

fn default_table_prefix() -> String {
    "wp_".to_string()
}

fn default_batch_size() -> usize {
    100
}

fn default_blog_ids() -> Vec<i64> {
    vec![1]
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_guid_domain() -> String {
    "https://www.example.com/".to_string()
}
