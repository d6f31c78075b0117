//! Comment mapping: `mt_comment` rows to `wp_comments`.

use chrono_tz::Tz;

use crate::config::MigrationConfig;
use crate::error::{MigrateError, Result};
use crate::source::rows::CommentRow;
use crate::target::rows::WpCommentRow;

use super::timestamps;

const ENTITY: &str = "comment";

/// Translate the visibility flag to comment approval. NULL means never
/// approved. Anything outside {0, 1} is a mapping fault; the flag
/// should be boolean and a stray value is a sign of a mangled source.
pub fn comment_approved(visible: Option<i32>) -> Result<i32> {
    match visible.unwrap_or(0) {
        flag @ (0 | 1) => Ok(flag),
        other => Err(MigrateError::mapping(
            ENTITY,
            "comment_visible",
            other.to_string(),
        )),
    }
}

/// Map one comment. Commenter accounts are not migrated, so the
/// display fields carry over but `user_id` is always zero.
pub fn map_comment(row: &CommentRow, tz: Tz, config: &MigrationConfig) -> Result<WpCommentRow> {
    let fmt = config.date_format.as_str();

    Ok(WpCommentRow {
        comment_id: row.comment_id,
        comment_post_id: row.comment_entry_id,
        comment_author: row.comment_author.clone().unwrap_or_default(),
        comment_author_email: row.comment_email.clone().unwrap_or_default(),
        comment_author_url: row.comment_url.clone().unwrap_or_default(),
        comment_author_ip: row.comment_ip.clone().unwrap_or_default(),
        comment_date: timestamps::format_local(row.comment_created_on, fmt),
        comment_date_gmt: timestamps::format_gmt(row.comment_created_on, tz, fmt),
        comment_content: row.comment_text.clone().unwrap_or_default(),
        comment_karma: 0,
        comment_approved: comment_approved(row.comment_visible)?,
        comment_agent: String::new(),
        comment_type: "comment".to_string(),
        // Nullable in the source, NOT NULL in the destination.
        comment_parent: row.comment_parent_id.unwrap_or(0),
        user_id: 0,
    })
}
