//! Placement mapping: `mt_placement` rows to `wp_term_relationships`.
//!
//! Works only because entry ids become post ids and category ids become
//! term-taxonomy ids, so the link table carries over value for value.

use crate::error::Result;
use crate::source::rows::PlacementRow;
use crate::target::rows::TermRelationshipRow;

pub fn map_term_relationship(row: &PlacementRow) -> Result<TermRelationshipRow> {
    Ok(TermRelationshipRow {
        object_id: row.placement_entry_id,
        term_taxonomy_id: row.placement_category_id,
    })
}
