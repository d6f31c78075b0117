//! Destination row shapes written to the WordPress schema.
//!
//! Each row type carries its unprefixed table name and column list so
//! the writer can build one multi-row INSERT per page. Column order in
//! `COLUMNS` must match the order `values` emits.

use mysql_async::Value;

/// A row destined for one of the WordPress tables.
pub trait WpRow: Send + Sync {
    /// Destination table name without the configured prefix.
    const TABLE: &'static str;

    /// Destination column names.
    const COLUMNS: &'static [&'static str];

    /// Parameter values, one per column.
    fn values(&self) -> Vec<Value>;
}

/// A `wp_terms` row. The source category id is reused as the term id.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRow {
    pub term_id: i64,
    pub name: String,
    pub slug: String,
    pub term_group: i64,
}

impl WpRow for TermRow {
    const TABLE: &'static str = "terms";
    const COLUMNS: &'static [&'static str] = &["term_id", "name", "slug", "term_group"];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.term_id),
            Value::from(self.name.as_str()),
            Value::from(self.slug.as_str()),
            Value::from(self.term_group),
        ]
    }
}

/// A `wp_term_taxonomy` row. One per term, so the term id doubles as the
/// term-taxonomy id.
#[derive(Debug, Clone, PartialEq)]
pub struct TermTaxonomyRow {
    pub term_taxonomy_id: i64,
    pub term_id: i64,
    pub taxonomy: String,
    pub description: String,
    pub parent: i64,
    /// Filled in by the taxonomy count pass after posts are migrated.
    pub count: i64,
}

impl WpRow for TermTaxonomyRow {
    const TABLE: &'static str = "term_taxonomy";
    const COLUMNS: &'static [&'static str] = &[
        "term_taxonomy_id",
        "term_id",
        "taxonomy",
        "description",
        "parent",
        "count",
    ];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.term_taxonomy_id),
            Value::from(self.term_id),
            Value::from(self.taxonomy.as_str()),
            Value::from(self.description.as_str()),
            Value::from(self.parent),
            Value::from(self.count),
        ]
    }
}

/// A `wp_users` row. Passwords are left blank; they must be reset out of
/// band.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub user_login: String,
    pub user_pass: String,
    pub user_nicename: String,
    pub user_email: String,
    pub user_url: String,
    pub user_registered: String,
    pub display_name: String,
}

impl WpRow for UserRow {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "user_login",
        "user_pass",
        "user_nicename",
        "user_email",
        "user_url",
        "user_registered",
        "display_name",
    ];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.id),
            Value::from(self.user_login.as_str()),
            Value::from(self.user_pass.as_str()),
            Value::from(self.user_nicename.as_str()),
            Value::from(self.user_email.as_str()),
            Value::from(self.user_url.as_str()),
            Value::from(self.user_registered.as_str()),
            Value::from(self.display_name.as_str()),
        ]
    }
}

/// A `wp_usermeta` row.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMetaRow {
    pub user_id: i64,
    pub meta_key: String,
    pub meta_value: String,
}

impl WpRow for UserMetaRow {
    const TABLE: &'static str = "usermeta";
    const COLUMNS: &'static [&'static str] = &["user_id", "meta_key", "meta_value"];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.user_id),
            Value::from(self.meta_key.as_str()),
            Value::from(self.meta_value.as_str()),
        ]
    }
}

/// A `wp_posts` row: posts, pages, and attachments.
///
/// `id` is `None` for attachments, which are the one entity type that
/// lets the destination assign a fresh id; NULL into the auto-increment
/// column does that regardless of the server's sql_mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub id: Option<i64>,
    pub post_author: i64,
    pub post_date: String,
    pub post_date_gmt: String,
    pub post_content: String,
    pub post_title: String,
    pub post_excerpt: String,
    pub post_status: String,
    pub comment_status: String,
    pub ping_status: String,
    pub post_password: String,
    pub post_name: String,
    pub to_ping: String,
    pub pinged: String,
    pub post_modified: String,
    pub post_modified_gmt: String,
    pub post_content_filtered: String,
    pub post_parent: i64,
    pub guid: String,
    pub menu_order: i64,
    pub post_type: String,
    pub post_mime_type: String,
    pub comment_count: i64,
}

impl WpRow for PostRow {
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "post_author",
        "post_date",
        "post_date_gmt",
        "post_content",
        "post_title",
        "post_excerpt",
        "post_status",
        "comment_status",
        "ping_status",
        "post_password",
        "post_name",
        "to_ping",
        "pinged",
        "post_modified",
        "post_modified_gmt",
        "post_content_filtered",
        "post_parent",
        "guid",
        "menu_order",
        "post_type",
        "post_mime_type",
        "comment_count",
    ];

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.map(Value::from).unwrap_or(Value::NULL),
            Value::from(self.post_author),
            Value::from(self.post_date.as_str()),
            Value::from(self.post_date_gmt.as_str()),
            Value::from(self.post_content.as_str()),
            Value::from(self.post_title.as_str()),
            Value::from(self.post_excerpt.as_str()),
            Value::from(self.post_status.as_str()),
            Value::from(self.comment_status.as_str()),
            Value::from(self.ping_status.as_str()),
            Value::from(self.post_password.as_str()),
            Value::from(self.post_name.as_str()),
            Value::from(self.to_ping.as_str()),
            Value::from(self.pinged.as_str()),
            Value::from(self.post_modified.as_str()),
            Value::from(self.post_modified_gmt.as_str()),
            Value::from(self.post_content_filtered.as_str()),
            Value::from(self.post_parent),
            Value::from(self.guid.as_str()),
            Value::from(self.menu_order),
            Value::from(self.post_type.as_str()),
            Value::from(self.post_mime_type.as_str()),
            Value::from(self.comment_count),
        ]
    }
}

/// A `wp_term_relationships` row (post ↔ term-taxonomy link).
#[derive(Debug, Clone, PartialEq)]
pub struct TermRelationshipRow {
    pub object_id: i64,
    pub term_taxonomy_id: i64,
}

impl WpRow for TermRelationshipRow {
    const TABLE: &'static str = "term_relationships";
    const COLUMNS: &'static [&'static str] = &["object_id", "term_taxonomy_id"];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.object_id),
            Value::from(self.term_taxonomy_id),
        ]
    }
}

/// A `wp_comments` row.
#[derive(Debug, Clone, PartialEq)]
pub struct WpCommentRow {
    pub comment_id: i64,
    pub comment_post_id: i64,
    pub comment_author: String,
    pub comment_author_email: String,
    pub comment_author_url: String,
    pub comment_author_ip: String,
    pub comment_date: String,
    pub comment_date_gmt: String,
    pub comment_content: String,
    pub comment_karma: i64,
    /// Copied from the source visibility flag; domain-checked to 0/1.
    pub comment_approved: i32,
    pub comment_agent: String,
    pub comment_type: String,
    pub comment_parent: i64,
    pub user_id: i64,
}

impl WpRow for WpCommentRow {
    const TABLE: &'static str = "comments";
    const COLUMNS: &'static [&'static str] = &[
        "comment_ID",
        "comment_post_ID",
        "comment_author",
        "comment_author_email",
        "comment_author_url",
        "comment_author_IP",
        "comment_date",
        "comment_date_gmt",
        "comment_content",
        "comment_karma",
        "comment_approved",
        "comment_agent",
        "comment_type",
        "comment_parent",
        "user_id",
    ];

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.comment_id),
            Value::from(self.comment_post_id),
            Value::from(self.comment_author.as_str()),
            Value::from(self.comment_author_email.as_str()),
            Value::from(self.comment_author_url.as_str()),
            Value::from(self.comment_author_ip.as_str()),
            Value::from(self.comment_date.as_str()),
            Value::from(self.comment_date_gmt.as_str()),
            Value::from(self.comment_content.as_str()),
            Value::from(self.comment_karma),
            Value::from(self.comment_approved),
            Value::from(self.comment_agent.as_str()),
            Value::from(self.comment_type.as_str()),
            Value::from(self.comment_parent),
            Value::from(self.user_id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_value_arity_matches() {
        let term = TermRow {
            term_id: 1,
            name: "News".into(),
            slug: "news".into(),
            term_group: 0,
        };
        assert_eq!(term.values().len(), TermRow::COLUMNS.len());

        let tt = TermTaxonomyRow {
            term_taxonomy_id: 1,
            term_id: 1,
            taxonomy: "category".into(),
            description: String::new(),
            parent: 0,
            count: 0,
        };
        assert_eq!(tt.values().len(), TermTaxonomyRow::COLUMNS.len());

        let rel = TermRelationshipRow {
            object_id: 3,
            term_taxonomy_id: 7,
        };
        assert_eq!(rel.values().len(), TermRelationshipRow::COLUMNS.len());
    }

    #[test]
    fn test_attachment_id_is_null() {
        let post = PostRow {
            id: None,
            post_author: 1,
            post_date: String::new(),
            post_date_gmt: String::new(),
            post_content: String::new(),
            post_title: String::new(),
            post_excerpt: String::new(),
            post_status: "inherit".into(),
            comment_status: "closed".into(),
            ping_status: "closed".into(),
            post_password: String::new(),
            post_name: String::new(),
            to_ping: String::new(),
            pinged: String::new(),
            post_modified: String::new(),
            post_modified_gmt: String::new(),
            post_content_filtered: String::new(),
            post_parent: 0,
            guid: String::new(),
            menu_order: 0,
            post_type: "attachment".into(),
            post_mime_type: String::new(),
            comment_count: 0,
        };
        assert_eq!(post.values().len(), PostRow::COLUMNS.len());
        assert_eq!(post.values()[0], Value::NULL);
    }
}
