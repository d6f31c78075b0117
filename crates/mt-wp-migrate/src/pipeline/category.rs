//! Categories: `mt_category` to `wp_terms` and `wp_term_taxonomy`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::mapper::category::{map_term, map_term_taxonomy};
use crate::source::rows::CategoryRow;
use crate::source::MtSource;
use crate::target::WpTarget;
use crate::transfer::EntityPipeline;

use super::MigrationContext;

pub struct CategoryPipeline {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: Arc<MigrationContext>,
}

impl CategoryPipeline {
    pub fn new(source: Arc<MtSource>, target: Arc<WpTarget>, ctx: Arc<MigrationContext>) -> Self {
        Self {
            source,
            target,
            ctx,
        }
    }
}

#[async_trait]
impl EntityPipeline for CategoryPipeline {
    type Row = CategoryRow;

    fn entity(&self) -> &'static str {
        "category"
    }

    fn row_id(&self, row: &CategoryRow) -> i64 {
        row.category_id
    }

    async fn delete_existing(&self) -> Result<()> {
        self.target.delete_all("term_taxonomy").await?;
        self.target.delete_all("termmeta").await?;
        self.target.delete_all("terms").await?;
        Ok(())
    }

    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<CategoryRow>> {
        self.source
            .select_categories(&self.ctx.blog_ids, last_id, limit)
            .await
    }

    async fn insert_batch(&self, rows: &[CategoryRow]) -> Result<()> {
        let terms = rows.iter().map(map_term).collect::<Result<Vec<_>>>()?;
        let taxonomies = rows
            .iter()
            .map(map_term_taxonomy)
            .collect::<Result<Vec<_>>>()?;

        self.target.insert(&terms).await?;
        self.target.insert(&taxonomies).await?;
        Ok(())
    }
}
