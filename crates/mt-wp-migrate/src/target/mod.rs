//! WordPress target store on top of `mysql_async`.
//!
//! Pages are written with multi-row INSERT statements, chunked so a
//! single statement never exceeds the server-side placeholder limit.

pub mod rows;

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Opts, OptsBuilder, Pool, Value};
use tracing::{debug, info};

use crate::config::TargetConfig;
use crate::error::{MigrateError, Result};
use rows::WpRow;

/// MySQL caps prepared statements at 65535 placeholders.
const MAX_PLACEHOLDERS: usize = 65_535;

/// Reads aggregated taxonomy counts and writes them back per term.
/// The count backfill runs against this rather than [`WpTarget`]
/// directly so it can be exercised without a live database.
#[async_trait]
pub trait TermCountStore: Send + Sync {
    /// Post count per term taxonomy, one row per distinct term.
    async fn term_counts(&self) -> Result<Vec<(i64, i64)>>;

    async fn update_term_count(&self, term_taxonomy_id: i64, count: i64) -> Result<()>;
}

/// Connection pool and table-prefix knowledge for the destination
/// WordPress database.
pub struct WpTarget {
    pool: Pool,
    prefix: String,
}

impl WpTarget {
    /// Connect to the target database and verify the connection works.
    pub async fn connect(config: &TargetConfig) -> Result<Self> {
        let opts: Opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(Some(config.password.clone()))
            .db_name(Some(config.database.clone()))
            .init(vec![format!("SET NAMES {}", config.charset)])
            .into();

        let pool = Pool::new(opts);
        let mut conn = pool.get_conn().await?;
        conn.query_drop("SELECT 1").await?;
        drop(conn);

        info!(
            host = %config.host,
            database = %config.database,
            prefix = %config.table_prefix,
            "connected to target database"
        );

        Ok(Self {
            pool,
            prefix: config.table_prefix.clone(),
        })
    }

    /// Prefixed, backtick-quoted table name.
    fn table(&self, name: &str) -> String {
        format!("`{}{}`", self.prefix, name)
    }

    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop("SELECT 1").await?;
        Ok(())
    }

    /// Remove every row from a destination table. Runs once per table
    /// before the first page of an entity is written.
    pub async fn delete_all(&self, table: &str) -> Result<()> {
        let mut conn = self.pool.get_conn().await?;
        let sql = format!("DELETE FROM {}", self.table(table));
        debug!(table = table, "clearing destination table");
        conn.query_drop(sql).await?;
        Ok(())
    }

    /// Insert a page of rows with multi-row INSERT statements.
    pub async fn insert<R: WpRow>(&self, rows: &[R]) -> Result<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let cols = R::COLUMNS.len();
        let rows_per_stmt = (MAX_PLACEHOLDERS / cols).max(1);
        let column_list = R::COLUMNS
            .iter()
            .map(|c| format!("`{c}`"))
            .collect::<Vec<_>>()
            .join(", ");
        let row_placeholder = format!("({})", vec!["?"; cols].join(", "));

        let mut conn = self.pool.get_conn().await?;
        let mut written = 0u64;

        for chunk in rows.chunks(rows_per_stmt) {
            let placeholders = vec![row_placeholder.as_str(); chunk.len()].join(", ");
            let sql = format!(
                "INSERT INTO {} ({}) VALUES {}",
                self.table(R::TABLE),
                column_list,
                placeholders
            );

            let mut params: Vec<Value> = Vec::with_capacity(chunk.len() * cols);
            for row in chunk {
                let values = row.values();
                if values.len() != cols {
                    return Err(MigrateError::transfer(
                        R::TABLE,
                        format!("row produced {} values for {} columns", values.len(), cols),
                    ));
                }
                params.extend(values);
            }

            conn.exec_drop(sql, params).await?;
            written += chunk.len() as u64;
        }

        debug!(table = R::TABLE, rows = written, "inserted page");
        Ok(written)
    }

    pub async fn close(&self) -> Result<()> {
        self.pool.clone().disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl TermCountStore for WpTarget {
    async fn term_counts(&self) -> Result<Vec<(i64, i64)>> {
        let mut conn = self.pool.get_conn().await?;
        let sql = format!(
            "SELECT term_taxonomy_id, COUNT(1) FROM {} GROUP BY term_taxonomy_id",
            self.table("term_relationships")
        );
        let counts: Vec<(i64, i64)> = conn.query(sql).await?;
        Ok(counts)
    }

    async fn update_term_count(&self, term_taxonomy_id: i64, count: i64) -> Result<()> {
        let mut conn = self.pool.get_conn().await?;
        let sql = format!(
            "UPDATE {} SET count = ? WHERE term_taxonomy_id = ?",
            self.table("term_taxonomy")
        );
        conn.exec_drop(sql, (count, term_taxonomy_id)).await?;
        Ok(())
    }
}
