use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload directory for item photos
pub const PHOTO_UPLOAD_DIR: &str = "photo_objetVente/";

/// Image used when an item has none of its own
pub const DEFAULT_PHOTO: &str = "photo_objetVente/default.jpg";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a marketplace item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketplaceItemId(pub Uuid);

impl MarketplaceItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MarketplaceItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MarketplaceItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A handcrafted object offered for sale on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceItem {
    #[serde(flatten)]
    pub base: BaseAggregate<MarketplaceItemId>,

    pub title: String,
    pub author: String,

    /// Sale price, always two fractional digits
    pub price: Decimal,

    pub description: String,

    #[serde(rename = "photoPath")]
    pub photo_path: String,
}

impl MarketplaceItem {
    pub fn new_for_insert(
        title: String,
        author: String,
        price: Decimal,
        description: String,
        photo_path: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MarketplaceItemId::new_v4()),
            title,
            author,
            price,
            description,
            photo_path: photo_path.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &MarketplaceItemDto) {
        self.title = dto.title.clone();
        self.author = dto.author.clone();
        self.price = dto.price;
        self.description = dto.description.clone();
        if let Some(ref path) = dto.photo_path {
            self.photo_path = path.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre ne peut pas être vide".into());
        }
        if self.title.chars().count() > 64 {
            return Err("Le titre est limité à 64 caractères".into());
        }
        if self.author.chars().count() > 64 {
            return Err("Le nom de l'auteur est limité à 64 caractères".into());
        }
        if self.description.chars().count() > 255 {
            return Err("La description est limitée à 255 caractères".into());
        }
        if self.price.is_sign_negative() {
            return Err("Le prix ne peut pas être négatif".into());
        }
        Ok(())
    }

    /// Monetary values are normalized to exactly two fractional digits
    /// on write, padding the scale when needed (10.5 becomes 10.50)
    pub fn before_write(&mut self) {
        let mut price = self.price.round_dp(2);
        price.rescale(2);
        self.price = price;
        self.base.touch();
    }
}

impl AggregateRoot for MarketplaceItem {
    type Id = MarketplaceItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "marketplace_item"
    }

    fn element_name() -> &'static str {
        "Objet en vente"
    }

    fn list_name() -> &'static str {
        "Objets en vente"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a marketplace item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceItemDto {
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub description: String,
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_scale_padded_to_two_places() {
        let mut item = MarketplaceItem::new_for_insert(
            "Panier tressé".into(),
            "Artisan".into(),
            "10.5".parse().expect("valid decimal literal"),
            "Panier en raphia".into(),
            None,
        );
        item.before_write();
        assert_eq!(item.price.to_string(), "10.50");
    }

    #[test]
    fn test_title_length_limit() {
        let item = MarketplaceItem::new_for_insert(
            "x".repeat(65),
            "Artisan".into(),
            Decimal::ZERO,
            "desc".into(),
            None,
        );
        assert!(item.validate().is_err());
    }
}
