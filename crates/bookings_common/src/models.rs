// --- File: crates/bookings_common/src/models.rs ---

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A booking as stored by the remote Booking Service.
///
/// Only the fields the client reads are typed. Everything else the server
/// sends (customer name, email, service id, ...) is kept in `extra` and
/// written back unchanged, so an update always carries the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque identifier, unique per user
    #[serde(rename = "_id")]
    pub id: String,

    /// The booked service (title or reference)
    #[serde(default)]
    pub service: String,

    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// Image reference (usually a URL)
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    pub fn new(id: impl Into<String>, service: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service: service.into(),
            date: date.into(),
            price: None,
            image: None,
            extra: Map::new(),
        }
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns a copy of this booking with `date` replaced.
    pub fn with_date(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }
}

/// A price as the server sends it: some records carry a number, others a
/// preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{:.2}", amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Acknowledgement of a delete request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(rename = "deletedCount", default)]
    pub deleted_count: u64,
}

impl DeleteResult {
    /// The only success signal for a delete; the HTTP status alone is not enough.
    pub fn is_applied(&self) -> bool {
        self.deleted_count > 0
    }
}

/// Acknowledgement of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    #[serde(rename = "modifiedCount", default)]
    pub modified_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl UpdateResult {
    /// The only success signal for an update.
    pub fn is_applied(&self) -> bool {
        self.modified_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_keeps_unknown_fields() {
        let raw = json!({
            "_id": "65f0",
            "service": "Oil change",
            "date": "2024-01-01",
            "price": 120.5,
            "img": "https://img.example.com/1.png",
            "email": "ann@example.com",
            "customerName": "Ann"
        });

        let booking: Booking = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(booking.id, "65f0");
        assert_eq!(booking.price, Some(Price::Amount(120.5)));
        assert_eq!(booking.image.as_deref(), Some("https://img.example.com/1.png"));
        assert_eq!(booking.extra.get("customerName"), Some(&json!("Ann")));

        assert_eq!(serde_json::to_value(&booking).unwrap(), raw);
    }

    #[test]
    fn test_with_date_replaces_only_the_date() {
        let booking = Booking::new("a", "Wash", "2024-01-01")
            .with_price(Price::Text("$20".to_string()))
            .with_image("wash.png");
        let moved = booking.with_date("2024-02-02");

        assert_eq!(moved.date, "2024-02-02");
        assert_eq!(moved.id, booking.id);
        assert_eq!(moved.service, booking.service);
        assert_eq!(moved.price, booking.price);
        assert_eq!(moved.image, booking.image);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Amount(20.0).to_string(), "20.00");
        assert_eq!(Price::Text("$20".to_string()).to_string(), "$20");
    }

    #[test]
    fn test_affected_counts_default_to_zero() {
        let deleted: DeleteResult = serde_json::from_str("{}").unwrap();
        assert!(!deleted.is_applied());

        let deleted: DeleteResult = serde_json::from_str(r#"{"acknowledged":true,"deletedCount":1}"#).unwrap();
        assert!(deleted.is_applied());

        let updated: UpdateResult = serde_json::from_str(r#"{"modifiedCount":0,"error":"stale"}"#).unwrap();
        assert!(!updated.is_applied());
        assert_eq!(updated.error, Some(json!("stale")));
    }
}
