//! Assets: `mt_asset` to attachment rows in `wp_posts`.
//!
//! The delete step is a no-op since the post pipeline already wiped
//! `wp_posts`, attachments included. Running this pipeline without the
//! post pipeline first would duplicate attachments.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::asset::map_attachment;
use crate::source::rows::AssetRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct AssetPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl AssetPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for AssetPipeline {
    type Row = AssetRow;

    fn entity(&self) -> &'static str {
        "asset"
    }

    fn row_id(&self, row: &AssetRow) -> i64 {
        row.asset_id
    }

    async fn delete_existing(&self) -> Result<()> {
        Ok(())
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<AssetRow>> {
        self.source
            .select_assets(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[AssetRow]) -> Result<()> {
        let attachments = rows
            .iter()
            .map(|row| map_attachment(row, self.ctx.tz, &self.ctx.migration))
            .collect::<Result<Vec<_>>>()?;

        self.target.insert(&attachments).await?;
        Ok(())
    }
}
