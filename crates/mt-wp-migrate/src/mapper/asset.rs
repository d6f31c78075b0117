//! Asset mapping: `mt_asset` rows to attachment rows in `wp_posts`.
//!
//! The one entity whose source id is not carried over; attachments get
//! fresh ids from the destination. The asset files themselves have to
//! be moved by hand, and if their location changes the stored GUIDs
//! will need a follow-up pass.

use std::sync::LazyLock;

use chrono_tz::Tz;
use regex::Regex;

use crate::config::MigrationConfig;
use crate::error::Result;
use crate::source::rows::AssetRow;
use crate::target::rows::PostRow;

use super::timestamps;

static SLUG_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\s]+").unwrap());

/// Derive an attachment slug from the asset label. Runs of underscores
/// and whitespace collapse to single dashes.
pub fn asset_slug(label: &str) -> String {
    SLUG_SEPARATORS.replace_all(label, "-").to_string()
}

/// Map one asset to an attachment row.
pub fn map_attachment(row: &AssetRow, tz: Tz, config: &MigrationConfig) -> Result<PostRow> {
    let fmt = config.date_format.as_str();
    let label = row.asset_label.as_deref().unwrap_or("");

    Ok(PostRow {
        // Destination-assigned id.
        id: None,
        post_author: row.asset_created_by.unwrap_or(0),
        post_date: timestamps::format_local(row.asset_created_on, fmt),
        post_date_gmt: timestamps::format_gmt(row.asset_created_on, tz, fmt),
        post_content: row.asset_description.clone().unwrap_or_default(),
        post_title: label.to_string(),
        post_excerpt: String::new(),
        post_status: "inherit".to_string(),
        comment_status: "closed".to_string(),
        ping_status: "closed".to_string(),
        post_password: String::new(),
        post_name: asset_slug(label),
        to_ping: String::new(),
        pinged: String::new(),
        post_modified: timestamps::format_local(row.asset_modified_on, fmt),
        post_modified_gmt: timestamps::format_gmt(row.asset_modified_on, tz, fmt),
        post_content_filtered: String::new(),
        post_parent: 0,
        // The asset URL stands in for a GUID. Feed readers never saw
        // attachments, so URL stability is all that matters here.
        guid: row.asset_url.clone().unwrap_or_default(),
        menu_order: 0,
        post_type: "attachment".to_string(),
        post_mime_type: row.asset_mime_type.clone().unwrap_or_default(),
        comment_count: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn asset() -> AssetRow {
        AssetRow {
            asset_id: 12,
            asset_created_by: Some(3),
            asset_created_on: NaiveDate::from_ymd_opt(2011, 2, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0),
            asset_modified_on: NaiveDate::from_ymd_opt(2011, 2, 2)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            asset_description: Some("A photo".to_string()),
            asset_label: Some("Holiday Photo_2011".to_string()),
            asset_mime_type: Some("image/jpeg".to_string()),
            asset_url: Some("https://example.com/images/holiday.jpg".to_string()),
        }
    }

    fn map(row: &AssetRow) -> Result<PostRow> {
        map_attachment(row, chrono_tz::UTC, &MigrationConfig::default())
    }

    #[test]
    fn test_slug_collapses_separator_runs() {
        assert_eq!(asset_slug("Holiday Photo_2011"), "Holiday-Photo-2011");
        assert_eq!(asset_slug("a __ b"), "a-b");
    }

    #[test]
    fn test_attachment_shape() {
        let post = map(&asset()).unwrap();
        assert_eq!(post.id, None);
        assert_eq!(post.post_type, "attachment");
        assert_eq!(post.post_status, "inherit");
        assert_eq!(post.comment_status, "closed");
        assert_eq!(post.ping_status, "closed");
        assert_eq!(post.post_mime_type, "image/jpeg");
        assert_eq!(post.post_title, "Holiday Photo_2011");
        assert_eq!(post.post_name, "Holiday-Photo-2011");
        assert_eq!(post.guid, "https://example.com/images/holiday.jpg");
        assert_eq!(post.post_excerpt, "");
        assert_eq!(post.comment_count, 0);
    }

    #[test]
    fn test_missing_fields_have_safe_defaults() {
        let row = AssetRow {
            asset_id: 1,
            asset_created_by: None,
            asset_created_on: None,
            asset_modified_on: None,
            asset_description: None,
            asset_label: None,
            asset_mime_type: None,
            asset_url: None,
        };
        let post = map(&row).unwrap();
        assert_eq!(post.post_author, 0);
        assert_eq!(post.post_date, timestamps::ZERO_DATE);
        assert_eq!(post.post_title, "");
        assert_eq!(post.post_name, "");
        assert_eq!(post.guid, "");
    }
}
