//! Authors: `mt_author` to `wp_users` and `wp_usermeta`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::user::{map_user, map_user_meta};
use crate::source::rows::AuthorRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct UserPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl UserPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for UserPipeline {
    type Row = AuthorRow;

    fn entity(&self) -> &'static str {
        "user"
    }

    fn row_id(&self, row: &AuthorRow) -> i64 {
        row.author_id
    }

    async fn delete_existing(&self) -> Result<()> {
        self.target.delete_all("usermeta").await?;
        self.target.delete_all("users").await?;
        Ok(())
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<AuthorRow>> {
        self.source
            .select_authors(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[AuthorRow]) -> Result<()> {
        let users = rows
            .iter()
            .map(|row| map_user(row, &self.ctx.migration))
            .collect::<Result<Vec<_>>>()?;

        let mut meta = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            meta.extend(map_user_meta(row, &self.ctx.table_prefix)?);
        }

        self.target.insert(&users).await?;
        self.target.insert(&meta).await?;
        Ok(())
    }
}
