//! Category assignments: `mt_placement` to `wp_term_relationships`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::placement::map_term_relationship;
use crate::source::rows::PlacementRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct PlacementPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl PlacementPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for PlacementPipeline {
    type Row = PlacementRow;

    fn entity(&self) -> &'static str {
        "placement"
    }

    fn row_id(&self, row: &PlacementRow) -> i64 {
        row.placement_id
    }

    async fn delete_existing(&self) -> Result<()> {
        self.target.delete_all("term_relationships").await
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<PlacementRow>> {
        self.source
            .select_placements(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[PlacementRow]) -> Result<()> {
        let relationships = rows
            .iter()
            .map(map_term_relationship)
            .collect::<Result<Vec<_>>>()?;

        self.target.insert(&relationships).await?;
        Ok(())
    }
}
