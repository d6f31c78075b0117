//! Category mapping: `mt_category` rows to `wp_terms` plus
//! `wp_term_taxonomy`.

use crate::error::Result;
use crate::source::rows::CategoryRow;
use crate::target::rows::{TermRow, TermTaxonomyRow};

/// Movable Type basenames use underscores where WordPress slugs use
/// dashes, and WordPress slugs are lowercase.
pub fn category_slug(basename: &str) -> String {
    basename.to_lowercase().replace('_', "-")
}

/// Map one category to its term row. The category id is reused as the
/// term id so placements can be carried over without a lookup table.
pub fn map_term(row: &CategoryRow) -> Result<TermRow> {
    Ok(TermRow {
        term_id: row.category_id,
        name: row.category_label.clone(),
        slug: category_slug(&row.category_basename),
        term_group: 0,
    })
}

/// Map one category to its term-taxonomy row. There is exactly one
/// taxonomy row per term, so the category id serves as the
/// term-taxonomy id as well.
pub fn map_term_taxonomy(row: &CategoryRow) -> Result<TermTaxonomyRow> {
    Ok(TermTaxonomyRow {
        term_taxonomy_id: row.category_id,
        term_id: row.category_id,
        taxonomy: "category".to_string(),
        // Nullable in the source, NOT NULL in the destination.
        description: row.category_description.clone().unwrap_or_default(),
        parent: row.category_parent.unwrap_or(0),
        // Backfilled after placements are migrated.
        count: 0,
    })
}
