//! Typed row shapes read from the Movable Type schema.
//!
//! Field names match the source columns so the mappers read like the
//! schema documentation. Optional fields are nullable in Movable Type;
//! each mapper documents the default it substitutes.

use chrono::NaiveDateTime;

/// A row from `mt_category`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: i64,
    pub category_basename: String,
    pub category_label: String,
    pub category_parent: Option<i64>,
    pub category_description: Option<String>,
}

/// A row from `mt_author`.
///
/// The password is deliberately never selected: it cannot be carried
/// into WordPress and must be reset out of band.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorRow {
    pub author_id: i64,
    pub author_name: String,
    pub author_nickname: Option<String>,
    pub author_email: Option<String>,
    pub author_url: Option<String>,
    pub author_created_on: Option<NaiveDateTime>,
}

/// A row from `mt_entry`. Covers both posts and pages, discriminated by
/// `entry_class`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EntryRow {
    pub entry_id: i64,
    pub entry_allow_comments: Option<i32>,
    pub entry_allow_pings: Option<i32>,
    pub entry_author_id: i64,
    pub entry_basename: Option<String>,
    pub entry_comment_count: Option<i64>,
    pub entry_created_on: Option<NaiveDateTime>,
    pub entry_class: String,
    /// Formatting mode: "0", "__default__", "markdown", "textile_2", etc.
    pub entry_convert_breaks: Option<String>,
    pub entry_excerpt: Option<String>,
    pub entry_modified_on: Option<NaiveDateTime>,
    /// 1 = draft, 2 = publish, 3 = pending, 4 = future, 5 = trash.
    pub entry_status: i32,
    pub entry_text: Option<String>,
    pub entry_text_more: Option<String>,
    pub entry_title: Option<String>,
}

/// A row from the `mt_placement` junction table (entry ↔ category).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlacementRow {
    pub placement_id: i64,
    pub placement_entry_id: i64,
    pub placement_category_id: i64,
}

/// A row from `mt_comment`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub comment_id: i64,
    pub comment_entry_id: i64,
    pub comment_parent_id: Option<i64>,
    pub comment_author: Option<String>,
    pub comment_email: Option<String>,
    pub comment_ip: Option<String>,
    pub comment_url: Option<String>,
    pub comment_text: Option<String>,
    pub comment_created_on: Option<NaiveDateTime>,
    /// 0 or 1 in a healthy installation; anything else fails the mapping.
    pub comment_visible: Option<i32>,
}

/// A row from `mt_asset`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssetRow {
    pub asset_id: i64,
    pub asset_created_by: Option<i64>,
    pub asset_created_on: Option<NaiveDateTime>,
    pub asset_description: Option<String>,
    pub asset_label: Option<String>,
    pub asset_mime_type: Option<String>,
    pub asset_modified_on: Option<NaiveDateTime>,
    pub asset_url: Option<String>,
}
