//! Entry mapping: `mt_entry` rows to `wp_posts` rows for posts and
//! pages.
//!
//! The enum translations fail loudly on values outside the documented
//! domain. A source database with surprises in it should stop the
//! migration, not produce rows that look plausible and are wrong.

use chrono_tz::Tz;

use crate::config::MigrationConfig;
use crate::content::{generate_post_content, ContentFormatter};
use crate::error::{MigrateError, Result};
use crate::guid::GuidGenerator;
use crate::source::rows::EntryRow;
use crate::target::rows::PostRow;

use super::timestamps;

const ENTITY: &str = "post";

/// Translate an allow-comments flag to a WordPress comment status.
/// NULL means the blog-level default of closed.
pub fn comment_status(flag: Option<i32>) -> Result<&'static str> {
    match flag.unwrap_or(0) {
        0 => Ok("closed"),
        1 => Ok("open"),
        other => Err(MigrateError::mapping(
            ENTITY,
            "entry_allow_comments",
            other.to_string(),
        )),
    }
}

/// Translate an allow-pings flag to a WordPress ping status.
pub fn ping_status(flag: Option<i32>) -> Result<&'static str> {
    match flag.unwrap_or(0) {
        0 => Ok("closed"),
        1 => Ok("open"),
        other => Err(MigrateError::mapping(
            ENTITY,
            "entry_allow_pings",
            other.to_string(),
        )),
    }
}

/// Translate an entry class to a WordPress post type.
pub fn post_type(class: &str) -> Result<&'static str> {
    match class {
        "entry" => Ok("post"),
        "page" => Ok("page"),
        other => Err(MigrateError::mapping(ENTITY, "entry_class", other)),
    }
}

/// Translate a numeric entry status to a WordPress post status.
pub fn post_status(status: i32) -> Result<&'static str> {
    match status {
        1 => Ok("draft"),
        2 => Ok("publish"),
        3 => Ok("pending"),
        4 => Ok("future"),
        5 => Ok("trash"),
        other => Err(MigrateError::mapping(
            ENTITY,
            "entry_status",
            other.to_string(),
        )),
    }
}

/// Entry basenames use underscores where WordPress slugs use dashes.
/// The slug must otherwise be preserved byte for byte so permalinks
/// keep working.
pub fn entry_slug(basename: &str) -> String {
    basename.replace('_', "-")
}

/// Map one entry to a post row. The entry id is reused as the post id
/// so placements and comments can reference posts without a lookup
/// table.
pub fn map_post(
    row: &EntryRow,
    tz: Tz,
    config: &MigrationConfig,
    guid: &dyn GuidGenerator,
    formatter: &dyn ContentFormatter,
) -> Result<PostRow> {
    let fmt = config.date_format.as_str();

    Ok(PostRow {
        id: Some(row.entry_id),
        post_author: row.entry_author_id,
        post_date: timestamps::format_local(row.entry_created_on, fmt),
        post_date_gmt: timestamps::format_gmt(row.entry_created_on, tz, fmt),
        post_content: generate_post_content(
            formatter,
            row.entry_text.as_deref(),
            row.entry_text_more.as_deref(),
            row.entry_convert_breaks.as_deref(),
        ),
        post_title: row.entry_title.clone().unwrap_or_default(),
        post_excerpt: row.entry_excerpt.clone().unwrap_or_default(),
        post_status: post_status(row.entry_status)?.to_string(),
        comment_status: comment_status(row.entry_allow_comments)?.to_string(),
        ping_status: ping_status(row.entry_allow_pings)?.to_string(),
        post_password: String::new(),
        post_name: entry_slug(row.entry_basename.as_deref().unwrap_or("")),
        to_ping: String::new(),
        pinged: String::new(),
        post_modified: timestamps::format_local(row.entry_modified_on, fmt),
        post_modified_gmt: timestamps::format_gmt(row.entry_modified_on, tz, fmt),
        post_content_filtered: String::new(),
        post_parent: 0,
        guid: guid.post_guid(row),
        menu_order: 0,
        post_type: post_type(&row.entry_class)?.to_string(),
        post_mime_type: String::new(),
        comment_count: row.entry_comment_count.unwrap_or(0),
    })
}
