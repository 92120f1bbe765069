//! Administration registry
//!
//! Pairs each administered collection with its list-view and search
//! configuration. Entities absent from this registry have no admin
//! screen; handlers of registered collections apply `search_fields`
//! when a search term is supplied.

use contracts::shared::admin::AdminConfig;

/// Collections exposed to the administration UI
static ADMIN_REGISTRY: &[AdminConfig] = &[
    AdminConfig {
        collection: "user",
        list_display: &["last_name", "first_name", "email", "gender", "photo_path"],
        search_fields: &["email", "last_name", "first_name"],
    },
    AdminConfig {
        collection: "ethnic_group",
        list_display: &["name", "description", "history"],
        search_fields: &["name"],
    },
    AdminConfig {
        collection: "language",
        list_display: &["name", "ethnic_group_id"],
        search_fields: &["name"],
    },
    AdminConfig {
        collection: "course",
        list_display: &["title", "description", "language_id", "photo_path"],
        search_fields: &["title", "description"],
    },
    AdminConfig {
        collection: "theme",
        list_display: &["name", "description"],
        search_fields: &["name"],
    },
];

/// All registered configurations, in registration order
pub fn all() -> &'static [AdminConfig] {
    ADMIN_REGISTRY
}

/// Configuration of one collection, if registered
pub fn get(collection: &str) -> Option<&'static AdminConfig> {
    ADMIN_REGISTRY.iter().find(|c| c.collection == collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_collections() {
        let names: Vec<_> = all().iter().map(|c| c.collection).collect();
        assert_eq!(
            names,
            vec!["user", "ethnic_group", "language", "course", "theme"]
        );
    }

    #[test]
    fn test_user_search_fields() {
        let user = get("user").expect("user is registered");
        assert!(user.is_searchable("email"));
        assert!(user.is_searchable("last_name"));
        assert!(!user.is_searchable("photo_path"));
    }

    #[test]
    fn test_unregistered_collection_has_no_config() {
        assert!(get("podcast").is_none());
        assert!(get("event").is_none());
    }
}
