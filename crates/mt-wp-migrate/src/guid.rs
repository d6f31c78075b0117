//! Post GUID generation.

use crate::source::rows::EntryRow;

/// Produces the immutable `guid` value for a migrated post.
///
/// WordPress treats the GUID as an opaque permanent identifier, so the
/// scheme only has to be stable, not resolvable. Implementations get
/// the full entry row because installations differ wildly in how their
/// templates built GUIDs; permalink-shaped schemes need the creation
/// date and basename, not just the id.
pub trait GuidGenerator: Send + Sync {
    fn post_guid(&self, entry: &EntryRow) -> String;
}

/// Default scheme: `{entry_id}@{domain}`, common for older Movable
/// Type installations.
#[derive(Debug, Clone)]
pub struct DomainGuid {
    domain: String,
}

impl DomainGuid {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl GuidGenerator for DomainGuid {
    fn post_guid(&self, entry: &EntryRow) -> String {
        format!("{}@{}", entry.entry_id, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> EntryRow {
        EntryRow {
            entry_id: 42,
            entry_allow_comments: Some(1),
            entry_allow_pings: Some(0),
            entry_author_id: 3,
            entry_basename: Some("a_fine_post".to_string()),
            entry_comment_count: Some(0),
            entry_created_on: NaiveDate::from_ymd_opt(2010, 6, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0),
            entry_class: "entry".to_string(),
            entry_convert_breaks: None,
            entry_excerpt: None,
            entry_text: None,
            entry_text_more: None,
            entry_title: None,
            entry_modified_on: None,
            entry_status: 2,
        }
    }

    #[test]
    fn test_domain_guid_format() {
        let guid = DomainGuid::new("https://www.example.com/");
        assert_eq!(guid.post_guid(&entry()), "42@https://www.example.com/");
    }

    #[test]
    fn test_permalink_scheme_can_use_date_and_basename() {
        // A permalink-shaped scheme, the other common variant on more
        // recent installations.
        struct PermalinkGuid {
            base: String,
        }

        impl GuidGenerator for PermalinkGuid {
            fn post_guid(&self, entry: &EntryRow) -> String {
                let date = entry
                    .entry_created_on
                    .map(|dt| dt.format("/%Y/%m/").to_string())
                    .unwrap_or_else(|| "/".to_string());
                let slug = entry
                    .entry_basename
                    .as_deref()
                    .unwrap_or("")
                    .replace('_', "-");
                format!("{}{}{}/", self.base, date, slug)
            }
        }

        let guid = PermalinkGuid {
            base: "https://www.example.com".to_string(),
        };
        assert_eq!(
            guid.post_guid(&entry()),
            "https://www.example.com/2010/06/a-fine-post/"
        );
    }
}
