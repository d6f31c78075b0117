//! Migration orchestration.
//!
//! Owns both connections and runs the entity pipelines in dependency
//! order. Posts must land before placements reference them and before
//! assets append to the cleared posts table; the taxonomy count pass
//! needs the term relationships in place.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::content::ContentFormatter;
use crate::error::Result;
use crate::guid::GuidGenerator;
use crate::pipeline::{
    AssetPipeline, CategoryPipeline, CommentPipeline, MigrationContext, PlacementPipeline,
    PostPipeline, UserPipeline,
};
use crate::source::MtSource;
use crate::target::{TermCountStore, WpTarget};
use crate::transfer::{TransferEngine, TransferStats};

/// Summary of a completed migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationResult {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: f64,
    pub entities: Vec<TransferStats>,
    pub rows_transferred: u64,
    pub term_counts_updated: u64,
}

impl MigrationResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a full migration against a pair of connected databases.
pub struct Orchestrator {
    source: Arc<MtSource>,
    target: Arc<WpTarget>,
    ctx: MigrationContext,
    batch_size: usize,
}

impl Orchestrator {
    /// Validate configuration and connect to both databases.
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let source = Arc::new(MtSource::connect(&config.source).await?);
        let target = Arc::new(WpTarget::connect(&config.target).await?);
        let ctx = MigrationContext::new(&config)?;

        Ok(Self {
            source,
            target,
            ctx,
            batch_size: config.migration.batch_size,
        })
    }

    /// Replace the GUID scheme. Installations whose feeds used
    /// permalink-shaped GUIDs need this to keep feed readers happy.
    pub fn with_guid_generator(mut self, guid: Arc<dyn GuidGenerator>) -> Self {
        self.ctx = self.ctx.with_guid_generator(guid);
        self
    }

    /// Replace the content formatter, e.g. to add Markdown handling.
    pub fn with_content_formatter(mut self, formatter: Arc<dyn ContentFormatter>) -> Self {
        self.ctx = self.ctx.with_content_formatter(formatter);
        self
    }

    /// Verify both databases are reachable without moving any data.
    pub async fn health_check(&self) -> Result<()> {
        self.source.test_connection().await?;
        self.target.test_connection().await?;
        Ok(())
    }

    /// Run the whole migration.
    pub async fn run(self) -> Result<MigrationResult> {
        let run_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        info!(run_id = %run_id, "migration starting");

        let Self {
            source,
            target,
            ctx,
            batch_size,
        } = self;
        let engine = TransferEngine::new(batch_size);
        let ctx = Arc::new(ctx);
        let mut entities = Vec::new();

        entities.push(
            engine
                .run(&CategoryPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );
        entities.push(
            engine
                .run(&UserPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );
        entities.push(
            engine
                .run(&PostPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );
        entities.push(
            engine
                .run(&PlacementPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );

        // Posts and their category links exist now, so the taxonomy
        // counts can be filled in.
        let term_counts_updated = update_term_counts(target.as_ref()).await?;

        entities.push(
            engine
                .run(&CommentPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );
        entities.push(
            engine
                .run(&AssetPipeline::new(
                    source.clone(),
                    target.clone(),
                    ctx.clone(),
                ))
                .await?,
        );

        source.close().await;
        target.close().await?;

        let completed_at = Utc::now();
        let duration_seconds = (completed_at - started_at).num_milliseconds() as f64 / 1000.0;
        let rows_transferred = entities.iter().map(|s| s.rows).sum();

        info!(
            run_id = %run_id,
            rows = rows_transferred,
            duration_seconds,
            "migration complete"
        );

        Ok(MigrationResult {
            run_id,
            started_at,
            completed_at,
            duration_seconds,
            entities,
            rows_transferred,
            term_counts_updated,
        })
    }

}

/// Backfill `wp_term_taxonomy.count` from the migrated relationships.
/// Terms with no relationships are never touched and keep the zero
/// count they were inserted with.
async fn update_term_counts<S: TermCountStore>(store: &S) -> Result<u64> {
    let counts = store.term_counts().await?;
    let updated = counts.len() as u64;

    for (term_taxonomy_id, count) in counts {
        store.update_term_count(term_taxonomy_id, count).await?;
    }

    info!(terms = updated, "taxonomy counts updated");
    Ok(updated)
}
