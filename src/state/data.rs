//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the REST backend and the UI layer.

use serde::{Deserialize, Serialize};

/// A single product in the catalog.
///
/// This is both the domain model and the wire format: the backend accepts
/// and returns exactly this shape. `price` is transmitted verbatim as a
/// string; the backend is the source of truth and no numeric parsing
/// happens client-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier. `None` means "not yet persisted",
    /// so a create payload carries no id key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Price as a string (e.g. "19.99")
    pub price: String,
    /// Category name
    pub category: String,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_has_no_id_key() {
        let product = Product {
            id: None,
            title: "Chair".into(),
            description: "A chair".into(),
            price: "49.90".into(),
            category: "furniture".into(),
            image: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("image"));
        assert_eq!(object["title"], "Chair");
        assert_eq!(object["price"], "49.90");
    }

    #[test]
    fn persisted_product_serializes_its_id() {
        let product = Product {
            id: Some("7".into()),
            title: "Lamp".into(),
            description: String::new(),
            price: "12.00".into(),
            category: "lighting".into(),
            image: Some("https://example.com/lamp.png".into()),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["image"], "https://example.com/lamp.png");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_none() {
        let json = r#"{
            "title": "Desk",
            "description": "Standing desk",
            "price": "199.00",
            "category": "furniture"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.image, None);
        assert_eq!(product.title, "Desk");
    }
}
