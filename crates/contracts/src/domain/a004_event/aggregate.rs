use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload directory for event images
pub const PHOTO_UPLOAD_DIR: &str = "photo_evenement/";

/// Image used when an event has none of its own
pub const DEFAULT_PHOTO: &str = "default.jpg";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
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

impl AggregateId for EventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EventId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A cultural event with a date, venue and ticketing information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub base: BaseAggregate<EventId>,

    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    /// Free-text status, e.g. "confirmé"
    pub status: String,

    /// Ticket price, always two fractional digits
    #[serde(rename = "entryPrice")]
    pub entry_price: Decimal,

    #[serde(rename = "seatsAvailable")]
    pub seats_available: i32,

    #[serde(rename = "photoPath")]
    pub photo_path: String,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        name: String,
        description: String,
        date: NaiveDate,
        location: String,
        status: String,
        entry_price: Decimal,
        seats_available: i32,
        photo_path: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(EventId::new_v4()),
            name,
            description,
            date,
            location,
            status,
            entry_price,
            seats_available,
            photo_path: photo_path.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &EventDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.date = dto.date;
        self.location = dto.location.clone();
        self.status = dto.status.clone();
        self.entry_price = dto.entry_price;
        self.seats_available = dto.seats_available;
        if let Some(ref path) = dto.photo_path {
            self.photo_path = path.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de l'événement ne peut pas être vide".into());
        }
        if self.location.trim().is_empty() {
            return Err("Le lieu ne peut pas être vide".into());
        }
        if self.status.chars().count() > 55 {
            return Err("Le statut est limité à 55 caractères".into());
        }
        if self.entry_price.is_sign_negative() {
            return Err("Le prix d'entrée ne peut pas être négatif".into());
        }
        if self.seats_available < 0 {
            return Err("Le nombre de places ne peut pas être négatif".into());
        }
        Ok(())
    }

    /// Monetary values are normalized to exactly two fractional digits
    /// on write, padding the scale when needed (10.5 becomes 10.50)
    pub fn before_write(&mut self) {
        let mut price = self.entry_price.round_dp(2);
        price.rescale(2);
        self.entry_price = price;
        self.base.touch();
    }
}

impl AggregateRoot for Event {
    type Id = EventId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Événement"
    }

    fn list_name() -> &'static str {
        "Événements"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub status: String,
    #[serde(rename = "entryPrice")]
    pub entry_price: Decimal,
    #[serde(rename = "seatsAvailable")]
    pub seats_available: i32,
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn test_entry_price_rounded_to_two_places() {
        let mut event = Event::new_for_insert(
            "Festival des cultures".into(),
            "Rencontre annuelle".into(),
            NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid date"),
            "Yaoundé".into(),
            "confirmé".into(),
            dec("1500.005"),
            300,
            None,
        );
        event.before_write();
        assert_eq!(event.entry_price, dec("1500.00"));
    }

    #[test]
    fn test_entry_price_scale_padded_to_two_places() {
        let mut event = Event::new_for_insert(
            "Soirée contes".into(),
            "Veillée traditionnelle".into(),
            NaiveDate::from_ymd_opt(2025, 3, 21).expect("valid date"),
            "Bafoussam".into(),
            "confirmé".into(),
            dec("10.5"),
            80,
            None,
        );
        event.before_write();
        assert_eq!(event.entry_price.to_string(), "10.50");
    }

    #[test]
    fn test_default_photo_applied() {
        let event = Event::new_for_insert(
            "Concert".into(),
            "desc".into(),
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            "Douala".into(),
            "prévu".into(),
            dec("0.00"),
            50,
            None,
        );
        assert_eq!(event.photo_path, DEFAULT_PHOTO);
    }
}
