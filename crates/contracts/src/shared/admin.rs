use serde::Serialize;

/// Administration configuration for one collection
///
/// Declares which fields the admin list view shows and which fields
/// free-text search runs over. Pure configuration; the backend registry
/// pairs each entry with its collection.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminConfig {
    /// Collection name, matches `AggregateRoot::collection_name()`
    pub collection: &'static str,
    /// Fields shown as columns of the tabular list view
    pub list_display: &'static [&'static str],
    /// Fields eligible for free-text search
    pub search_fields: &'static [&'static str],
}

impl AdminConfig {
    /// Whether the given field participates in free-text search
    pub fn is_searchable(&self, field: &str) -> bool {
        self.search_fields.contains(&field)
    }
}
