//! Posts and pages: `mt_entry` to `wp_posts`.
//!
//! The delete step clears the whole posts table, taking revisions,
//! attachments, and nav menu items with it. That is required to
//! preserve entry ids, and it is why this pipeline must run before
//! assets.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::post::map_post;
use crate::source::rows::EntryRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct PostPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl PostPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for PostPipeline {
    type Row = EntryRow;

    fn entity(&self) -> &'static str {
        "post"
    }

    fn row_id(&self, row: &EntryRow) -> i64 {
        row.entry_id
    }

    async fn delete_existing(&self) -> Result<()> {
        self.target.delete_all("postmeta").await?;
        self.target.delete_all("posts").await?;
        Ok(())
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<EntryRow>> {
        self.source
            .select_entries(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[EntryRow]) -> Result<()> {
        let posts = rows
            .iter()
            .map(|row| {
                map_post(
                    row,
                    self.ctx.tz,
                    &self.ctx.migration,
                    self.ctx.guid.as_ref(),
                    self.ctx.formatter.as_ref(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        self.target.insert(&posts).await?;
        Ok(())
    }
}
