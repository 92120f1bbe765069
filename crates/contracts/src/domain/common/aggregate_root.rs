use super::EntityMetadata;

/// Trait implemented by every aggregate root of the platform
///
/// Instance methods expose the data of one record; the static methods
/// describe the aggregate class itself (storage naming and UI labels).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Human-readable label of the record (list rows, references)
    fn display_name(&self) -> String;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for storage and routes (e.g. "ethnic_group")
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Ethnie")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Ethnies")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_ethnic_group")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Storage table name; equals the full aggregate name
    fn table_name() -> String {
        Self::full_name()
    }
}
