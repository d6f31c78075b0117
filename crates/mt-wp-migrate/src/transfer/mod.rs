//! Batched table transfer.
//!
//! Every entity migrates through the same loop: clear the destination
//! once, then walk the source in id order with keyset pagination,
//! inserting each page before fetching the next. A short page ends the
//! walk, so a source whose row count is an exact multiple of the batch
//! size costs one extra empty select. Batches run strictly in sequence
//! with no transactions and no retries; a failure stops the migration
//! with the destination partially written, and the fix is to rerun
//! from the start, which the delete step makes safe.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;

/// One entity's migration, seen from the transfer loop: how to clear
/// its destination tables, page through its source rows, and write a
/// page out.
#[async_trait]
pub trait EntityPipeline: Send + Sync {
    type Row: Send + Sync;

    /// Entity name for logs and error context.
    fn entity(&self) -> &'static str;

    /// The pagination cursor value for a row, its source id.
    fn row_id(&self, row: &Self::Row) -> i64;

    /// Clear the destination tables this entity writes to.
    async fn delete_existing(&self) -> Result<()>;

    /// Fetch up to `limit` rows with id greater than `last_id`, in
    /// ascending id order.
    async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<Self::Row>>;

    /// Map and insert one page of rows.
    async fn insert_batch(&self, rows: &[Self::Row]) -> Result<()>;
}

/// Outcome of one entity's transfer.
#[derive(Debug, Clone, Serialize)]
pub struct TransferStats {
    pub entity: &'static str,
    pub rows: u64,
    pub pages: u64,
}

/// Runs entity pipelines with a fixed batch size.
pub struct TransferEngine {
    batch_size: usize,
}

impl TransferEngine {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Migrate one entity end to end.
    pub async fn run<P: EntityPipeline>(&self, pipeline: &P) -> Result<TransferStats> {
        let entity = pipeline.entity();
        info!(entity, batch_size = self.batch_size, "starting transfer");

        pipeline.delete_existing().await?;

        let mut stats = TransferStats {
            entity,
            rows: 0,
            pages: 0,
        };
        let mut last_id = 0i64;

        loop {
            let rows = pipeline.select_batch(last_id, self.batch_size).await?;

            if !rows.is_empty() {
                // Rows arrive in ascending id order, so the cursor is
                // the last row's id.
                if let Some(last_row) = rows.last() {
                    last_id = pipeline.row_id(last_row);
                }

                pipeline.insert_batch(&rows).await?;
                stats.rows += rows.len() as u64;
                stats.pages += 1;
                debug!(entity, rows = rows.len(), last_id, "batch transferred");
            }

            if rows.len() < self.batch_size {
                break;
            }
        }

        info!(
            entity,
            rows = stats.rows,
            pages = stats.pages,
            "transfer complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MigrateError;
    use std::sync::Mutex;

    /// In-memory pipeline that records every call the engine makes.
    struct MockPipeline {
        source_ids: Vec<i64>,
        calls: Mutex<Vec<String>>,
        fail_delete: bool,
    }

    impl MockPipeline {
        fn new(row_count: i64) -> Self {
            Self {
                source_ids: (1..=row_count).collect(),
                calls: Mutex::new(Vec::new()),
                fail_delete: false,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl EntityPipeline for MockPipeline {
        type Row = i64;

        fn entity(&self) -> &'static str {
            "mock"
        }

        fn row_id(&self, row: &i64) -> i64 {
            *row
        }

        async fn delete_existing(&self) -> Result<()> {
            self.record("delete".to_string());
            if self.fail_delete {
                return Err(MigrateError::transfer("mock", "delete failed"));
            }
            Ok(())
        }

        async fn select_batch(&self, last_id: i64, limit: usize) -> Result<Vec<i64>> {
            self.record(format!("select({last_id})"));
            Ok(self
                .source_ids
                .iter()
                .copied()
                .filter(|id| *id > last_id)
                .take(limit)
                .collect())
        }

        async fn insert_batch(&self, rows: &[i64]) -> Result<()> {
            self.record(format!("insert({})", rows.len()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_partial_final_batch_terminates() {
        let pipeline = MockPipeline::new(250);
        let stats = TransferEngine::new(100).run(&pipeline).await.unwrap();

        assert_eq!(stats.rows, 250);
        assert_eq!(stats.pages, 3);
        assert_eq!(
            pipeline.calls(),
            vec![
                "delete",
                "select(0)",
                "insert(100)",
                "select(100)",
                "insert(100)",
                "select(200)",
                "insert(50)",
            ]
        );
    }

    #[tokio::test]
    async fn test_exact_multiple_costs_one_empty_select() {
        let pipeline = MockPipeline::new(200);
        let stats = TransferEngine::new(100).run(&pipeline).await.unwrap();

        assert_eq!(stats.rows, 200);
        assert_eq!(stats.pages, 2);
        assert_eq!(
            pipeline.calls(),
            vec![
                "delete",
                "select(0)",
                "insert(100)",
                "select(100)",
                "insert(100)",
                "select(200)",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_source_still_deletes() {
        let pipeline = MockPipeline::new(0);
        let stats = TransferEngine::new(100).run(&pipeline).await.unwrap();

        assert_eq!(stats.rows, 0);
        assert_eq!(stats.pages, 0);
        assert_eq!(pipeline.calls(), vec!["delete", "select(0)"]);
    }

    #[tokio::test]
    async fn test_delete_failure_aborts_before_any_select() {
        let mut pipeline = MockPipeline::new(10);
        pipeline.fail_delete = true;

        let err = TransferEngine::new(100).run(&pipeline).await.unwrap_err();
        assert!(matches!(err, MigrateError::Transfer { .. }));
        assert_eq!(pipeline.calls(), vec!["delete"]);
    }

    #[tokio::test]
    async fn test_single_short_batch() {
        let pipeline = MockPipeline::new(7);
        let stats = TransferEngine::new(100).run(&pipeline).await.unwrap();

        assert_eq!(stats.rows, 7);
        assert_eq!(stats.pages, 1);
        assert_eq!(pipeline.calls(), vec!["delete", "select(0)", "insert(7)"]);
    }
}
