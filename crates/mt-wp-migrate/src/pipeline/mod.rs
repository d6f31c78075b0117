//! Entity pipelines.
//!
//! Each pipeline binds one entity's source selects, row mappers, and
//! destination writes into an [`EntityPipeline`] the transfer engine
//! can run. The shared [`MigrationContext`] carries everything mapping
//! needs that is not in the rows themselves.

mod asset;
mod category;
mod comment;
mod placement;
mod post;
mod user;

pub use asset::AssetPipeline;
pub use category::CategoryPipeline;
pub use comment::CommentPipeline;
pub use placement::PlacementPipeline;
pub use post::PostPipeline;
pub use user::UserPipeline;

use std::sync::Arc;

use chrono_tz::Tz;

use crate::config::{Config, MigrationConfig};
use crate::content::{ContentFormatter, DefaultFormatter};
use crate::error::{MigrateError, Result};
use crate::guid::{DomainGuid, GuidGenerator};

/// Shared mapping context for all pipelines.
pub struct MigrationContext {
    pub blog_ids: Vec<i64>,
    pub table_prefix: String,
    pub tz: Tz,
    pub migration: MigrationConfig,
    pub guid: Arc<dyn GuidGenerator>,
    pub formatter: Arc<dyn ContentFormatter>,
}

impl std::fmt::Debug for MigrationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationContext")
            .field("blog_ids", &self.blog_ids)
            .field("table_prefix", &self.table_prefix)
            .field("tz", &self.tz)
            .field("migration", &self.migration)
            .finish_non_exhaustive()
    }
}

impl MigrationContext {
    /// Build a context from validated configuration, with the stock
    /// GUID and content strategies.
    pub fn new(config: &Config) -> Result<Self> {
        let tz: Tz = config
            .migration
            .timezone
            .parse()
            .map_err(|_| MigrateError::Config(format!(
                "unknown timezone '{}'",
                config.migration.timezone
            )))?;

        Ok(Self {
            blog_ids: config.migration.blog_ids.clone(),
            table_prefix: config.target.table_prefix.clone(),
            tz,
            migration: config.migration.clone(),
            guid: Arc::new(DomainGuid::new(config.migration.guid_domain.clone())),
            formatter: Arc::new(DefaultFormatter),
        })
    }

    pub fn with_guid_generator(mut self, guid: Arc<dyn GuidGenerator>) -> Self {
        self.guid = guid;
        self
    }

    pub fn with_content_formatter(mut self, formatter: Arc<dyn ContentFormatter>) -> Self {
        self.formatter = formatter;
        self
    }
}
