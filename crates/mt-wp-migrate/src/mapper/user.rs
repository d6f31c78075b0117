//! Author mapping: `mt_author` rows to `wp_users` plus the minimal
//! `wp_usermeta` rows WordPress needs to recognize an administrator.

use crate::config::MigrationConfig;
use crate::content::sanitize_title_with_dashes;
use crate::error::Result;
use crate::source::rows::AuthorRow;
use crate::target::rows::{UserMetaRow, UserRow};

use super::timestamps;

/// PHP-serialized capability map granting the administrator role.
const ADMINISTRATOR_CAPABILITIES: &str = "a:1:{s:13:\"administrator\";s:1:\"1\";}";

/// Legacy user level matching the administrator role.
const ADMINISTRATOR_USER_LEVEL: &str = "10";

/// Map one author to a user row. Passwords are never migrated; the
/// blank value forces a reset on the new install.
pub fn map_user(row: &AuthorRow, config: &MigrationConfig) -> Result<UserRow> {
    let login = row.author_name.to_lowercase();

    Ok(UserRow {
        id: row.author_id,
        user_nicename: sanitize_title_with_dashes(&login),
        user_login: login,
        user_pass: String::new(),
        user_email: row.author_email.clone().unwrap_or_default(),
        user_url: row.author_url.clone().unwrap_or_default(),
        user_registered: timestamps::format_local(row.author_created_on, &config.date_format),
        display_name: row.author_nickname.clone().unwrap_or_default(),
    })
}

/// Usermeta rows for one author. Every migrated author becomes an
/// administrator; source permissions are too free-form to translate
/// into roles, so they are rebuilt by hand afterwards.
pub fn map_user_meta(row: &AuthorRow, table_prefix: &str) -> Result<Vec<UserMetaRow>> {
    Ok(vec![
        UserMetaRow {
            user_id: row.author_id,
            meta_key: format!("{table_prefix}capabilities"),
            meta_value: ADMINISTRATOR_CAPABILITIES.to_string(),
        },
        UserMetaRow {
            user_id: row.author_id,
            meta_key: format!("{table_prefix}user_level"),
            meta_value: ADMINISTRATOR_USER_LEVEL.to_string(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn author() -> AuthorRow {
        AuthorRow {
            author_id: 3,
            author_name: "Jane Doe".to_string(),
            author_nickname: Some("Jane".to_string()),
            author_email: Some("jane@example.com".to_string()),
            author_url: Some("https://example.com/jane".to_string()),
            author_created_on: NaiveDate::from_ymd_opt(2008, 4, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0),
        }
    }

    fn config() -> MigrationConfig {
        MigrationConfig::default()
    }

    #[test]
    fn test_login_is_lowercased_name() {
        let user = map_user(&author(), &config()).unwrap();
        assert_eq!(user.user_login, "jane doe");
        assert_eq!(user.user_nicename, "jane-doe");
    }

    #[test]
    fn test_password_is_never_carried() {
        let user = map_user(&author(), &config()).unwrap();
        assert_eq!(user.user_pass, "");
    }

    #[test]
    fn test_registered_uses_source_datetime() {
        let user = map_user(&author(), &config()).unwrap();
        assert_eq!(user.user_registered, "2008-04-01 09:30:00");
    }

    #[test]
    fn test_missing_optional_fields_become_empty() {
        let mut row = author();
        row.author_nickname = None;
        row.author_email = None;
        row.author_url = None;
        row.author_created_on = None;
        let user = map_user(&row, &config()).unwrap();
        assert_eq!(user.display_name, "");
        assert_eq!(user.user_email, "");
        assert_eq!(user.user_url, "");
        assert_eq!(user.user_registered, timestamps::ZERO_DATE);
    }

    #[test]
    fn test_usermeta_grants_administrator() {
        let meta = map_user_meta(&author(), "wp_").unwrap();
        assert_eq!(meta.len(), 2);
        assert_eq!(meta[0].meta_key, "wp_capabilities");
        assert_eq!(meta[0].meta_value, "a:1:{s:13:\"administrator\";s:1:\"1\";}");
        assert_eq!(meta[1].meta_key, "wp_user_level");
        assert_eq!(meta[1].meta_value, "10");
        assert!(meta.iter().all(|m| m.user_id == 3));
    }
}
