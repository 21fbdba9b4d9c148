//! Canonical entity shapes handed to the host application.
//!
//! Every entity is a transient read-model rebuilt on each fetch; the client
//! layer projects whatever the upstream API returned into these shapes and
//! nothing here is persisted.

use serde::{Deserialize, Serialize};

/// A single shared 3D-model listing on a provider.
///
/// `id` and `name` are never null in a well-formed result; absent upstream
/// values map to an empty string or `None`, never drop the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing {
    /// Opaque identifier, scoped to the provider that returned it.
    pub id: String,
    pub name: String,
    /// May be HTML or plain text depending on the source endpoint; not
    /// normalized further.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Canonical web URL of the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One downloadable file attached to a [`Thing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingFile {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A user-curated named group of Things.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// On Thingiverse this is the creator's public profile URL, not the
    /// collection's own URL — an intentional upstream mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thing_serde_roundtrip() {
        let thing = Thing {
            id: "4486012".to_string(),
            name: "Benchy".to_string(),
            description: Some("<p>A calibration boat</p>".to_string()),
            thumbnail: Some("https://cdn.example.com/benchy.jpg".to_string()),
            url: Some("https://www.thingiverse.com/thing:4486012".to_string()),
        };
        let json = serde_json::to_string(&thing).unwrap();
        let back: Thing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, thing);
    }

    #[test]
    fn test_thing_serde_skips_none() {
        let thing = Thing {
            id: "1".to_string(),
            name: "Cube".to_string(),
            description: None,
            thumbnail: None,
            url: None,
        };
        let json = serde_json::to_string(&thing).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("thumbnail"));
        assert!(!json.contains("url"));
    }

    #[test]
    fn test_thing_file_deserialize_missing_optionals() {
        let file: ThingFile =
            serde_json::from_str(r#"{"id": "77", "name": "hull.stl"}"#).unwrap();
        assert_eq!(file.id, "77");
        assert_eq!(file.name, "hull.stl");
        assert!(file.thumbnail.is_none());
        assert!(file.url.is_none());
    }

    #[test]
    fn test_collection_serde_roundtrip() {
        let collection = Collection {
            id: "9".to_string(),
            name: "Boats".to_string(),
            description: None,
            thumbnail: None,
            url: Some("https://www.thingiverse.com/maker42".to_string()),
        };
        let json = serde_json::to_string(&collection).unwrap();
        let back: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
    }
}
