//! Movable Type to WordPress database migration.
//!
//! Moves categories, authors, posts and pages, category assignments,
//! comments, and assets from a Movable Type MySQL database into a
//! WordPress MySQL database, preserving entity ids so the two schemas
//! stay linked without lookup tables. Transfers run in batches with
//! keyset pagination and are idempotent: every entity clears its
//! destination tables before writing, so a failed run is fixed by
//! running again.
//!
//! # Example
//!
//! ```no_run
//! use mt_wp_migrate::config::Config;
//! use mt_wp_migrate::orchestrator::Orchestrator;
//!
//! # async fn example() -> mt_wp_migrate::error::Result<()> {
//! let config = Config::load("config.yaml")?;
//! let result = Orchestrator::new(config).await?.run().await?;
//! println!("{}", result.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod guid;
pub mod mapper;
pub mod orchestrator;
pub mod pipeline;
pub mod source;
pub mod target;
pub mod transfer;

pub use config::Config;
pub use error::{MigrateError, Result};
pub use orchestrator::{MigrationResult, Orchestrator};
