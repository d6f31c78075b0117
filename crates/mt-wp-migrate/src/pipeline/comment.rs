//! Comments: `mt_comment` to `wp_comments`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::comment::map_comment;
use crate::source::rows::CommentRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct CommentPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl CommentPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for CommentPipeline {
    type Row = CommentRow;

    fn entity(&self) -> &'static str {
        "comment"
    }

    fn row_id(&self, row: &CommentRow) -> i64 {
        row.comment_id
    }

    async fn delete_existing(&self) -> Result<()> {
        self.target.delete_all("comments").await?;
        self.target.delete_all("commentmeta").await?;
        Ok(())
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<CommentRow>> {
        self.source
            .select_comments(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[CommentRow]) -> Result<()> {
        let comments = rows
            .iter()
            .map(|row| map_comment(row, self.ctx.tz, &self.ctx.migration))
            .collect::<Result<Vec<_>>>()?;

        self.target.insert(&comments).await?;
        Ok(())
    }
}
