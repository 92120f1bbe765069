use axum::Json;
use contracts::shared::admin::AdminConfig;

use crate::shared::admin::registry;

/// GET /api/admin/registry
///
/// Exposes the list/search configuration of every registered collection.
pub async fn get_registry() -> Json<Vec<AdminConfig>> {
    Json(registry::all().to_vec())
}
