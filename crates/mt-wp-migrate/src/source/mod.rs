//! Movable Type source store adapter.
//!
//! Reads the `mt_*` tables over a sqlx MySQL pool. Every select is a
//! keyset page: rows with the primary key strictly greater than the
//! cursor, ascending, limited to the page size. Numeric predicate values
//! are formatted inline; they all come from configuration or from
//! previously read primary keys, never from user input.

pub mod rows;

pub use rows::*;

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::SourceConfig;
use crate::error::{MigrateError, Result};

/// Connection pool timeout.
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Movable Type database reader.
pub struct MtSource {
    pool: MySqlPool,
}

impl MtSource {
    /// Connect to the Movable Type database.
    pub async fn connect(config: &SourceConfig) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password)
            .charset(&config.charset);

        let pool = MySqlPoolOptions::new()
            // The migration is strictly sequential; one connection is all
            // that is ever in flight.
            .max_connections(1)
            .acquire_timeout(POOL_CONNECTION_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(MigrateError::Source)?;

        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(MigrateError::Source)?;

        info!(
            "Connected to Movable Type source: {}:{}/{} (charset {})",
            config.host, config.port, config.database, config.charset
        );

        Ok(Self { pool })
    }

    /// Test the database connection.
    pub async fn test_connection(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(MigrateError::Source)?;
        Ok(())
    }

    /// Select a page of categories.
    pub async fn select_categories(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<CategoryRow>> {
        let query = format!(
            "SELECT category_id, category_basename, category_label, \
                    category_parent, category_description \
             FROM mt_category \
             WHERE category_blog_id IN ({}) AND category_id > {} \
             ORDER BY category_id ASC LIMIT {}",
            in_list(blog_ids),
            last_id,
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Select a page of authors.
    ///
    /// `mt_author` also holds registered commenters, which are not
    /// migrated. Authors are distinguished by holding an administer or
    /// create_post permission on one of the configured blogs.
    pub async fn select_authors(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<AuthorRow>> {
        let query = format!(
            "SELECT a.author_id, a.author_name, a.author_nickname, \
                    a.author_email, a.author_url, a.author_created_on \
             FROM mt_author a \
             WHERE a.author_id > {} \
               AND EXISTS ( \
                 SELECT 1 FROM mt_permission p \
                 WHERE p.permission_author_id = a.author_id \
                   AND p.permission_blog_id IN ({}) \
                   AND (p.permission_permissions LIKE '%administer%' \
                        OR p.permission_permissions LIKE '%create_post%')) \
             ORDER BY a.author_id ASC LIMIT {}",
            last_id,
            in_list(blog_ids),
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Select a page of entries (posts and pages).
    pub async fn select_entries(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<EntryRow>> {
        let query = format!(
            "SELECT entry_id, entry_allow_comments, entry_allow_pings, \
                    entry_author_id, entry_basename, entry_comment_count, \
                    entry_created_on, entry_class, entry_convert_breaks, \
                    entry_excerpt, entry_modified_on, entry_status, \
                    entry_text, entry_text_more, entry_title \
             FROM mt_entry \
             WHERE entry_blog_id IN ({}) AND entry_id > {} \
             ORDER BY entry_id ASC LIMIT {}",
            in_list(blog_ids),
            last_id,
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Select a page of category placements (entry ↔ category links).
    pub async fn select_placements(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<PlacementRow>> {
        let query = format!(
            "SELECT placement_id, placement_entry_id, placement_category_id \
             FROM mt_placement \
             WHERE placement_blog_id IN ({}) AND placement_id > {} \
             ORDER BY placement_id ASC LIMIT {}",
            in_list(blog_ids),
            last_id,
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Select a page of comments.
    pub async fn select_comments(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<CommentRow>> {
        let query = format!(
            "SELECT comment_id, comment_entry_id, comment_parent_id, \
                    comment_author, comment_email, comment_ip, comment_url, \
                    comment_text, comment_created_on, comment_visible \
             FROM mt_comment \
             WHERE comment_blog_id IN ({}) AND comment_id > {} \
             ORDER BY comment_id ASC LIMIT {}",
            in_list(blog_ids),
            last_id,
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Select a page of assets.
    pub async fn select_assets(
        &self,
        blog_ids: &[i64],
        last_id: i64,
        limit: usize,
    ) -> Result<Vec<AssetRow>> {
        let query = format!(
            "SELECT asset_id, asset_created_by, asset_created_on, \
                    asset_description, asset_label, asset_mime_type, \
                    asset_modified_on, asset_url \
             FROM mt_asset \
             WHERE asset_blog_id IN ({}) AND asset_id > {} \
             ORDER BY asset_id ASC LIMIT {}",
            in_list(blog_ids),
            last_id,
            limit
        );

        Ok(sqlx::query_as(&query).fetch_all(&self.pool).await?)
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Render a numeric IN-list.
fn in_list(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_list() {
        assert_eq!(in_list(&[1]), "1");
        assert_eq!(in_list(&[1, 2, 7]), "1, 2, 7");
    }
}
