//! Schema records as returned by the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The definition language of a schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    /// Avro schema, stored as `.avsc`.
    #[serde(rename = "AVRO")]
    Avro,
    /// Protocol Buffer schema, stored as `.proto`.
    #[serde(rename = "PROTOCOL_BUFFER")]
    ProtocolBuffer,
    /// Unset type. Cannot be stored locally.
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified,
}

impl SchemaType {
    /// File extension used when persisting a schema of this type, or `None`
    /// for types that cannot be stored.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            SchemaType::Avro => Some(".avsc"),
            SchemaType::ProtocolBuffer => Some(".proto"),
            SchemaType::Unspecified => None,
        }
    }
}

/// A schema as returned by the registry.
///
/// Listing returns these without a `definition` (BASIC view); fetching a
/// single schema fills it in (FULL view). Instances are transient: they live
/// for the duration of a single sync run and are never persisted beyond the
/// written definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Fully-qualified resource name, possibly carrying an `@revision` suffix.
    pub name: String,
    /// Definition language.
    #[serde(rename = "type", default)]
    pub schema_type: SchemaType,
    /// Raw definition body. Empty in listing responses.
    #[serde(default)]
    pub definition: String,
    /// Revision id of this schema snapshot.
    #[serde(default)]
    pub revision_id: String,
    /// When the revision was created. Informational only.
    #[serde(default)]
    pub revision_create_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_for_supported_types() {
        assert_eq!(SchemaType::Avro.extension(), Some(".avsc"));
        assert_eq!(SchemaType::ProtocolBuffer.extension(), Some(".proto"));
        assert_eq!(SchemaType::Unspecified.extension(), None);
    }

    #[test]
    fn deserializes_listing_entry() {
        let json = r#"{
            "name": "projects/p/schemas/orders",
            "type": "AVRO",
            "revisionId": "abc123",
            "revisionCreateTime": "2024-03-01T12:00:00Z"
        }"#;

        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.name, "projects/p/schemas/orders");
        assert_eq!(schema.schema_type, SchemaType::Avro);
        assert_eq!(schema.revision_id, "abc123");
        assert!(schema.definition.is_empty());
        assert!(schema.revision_create_time.is_some());
    }

    #[test]
    fn deserializes_full_view_with_definition() {
        let json = r#"{
            "name": "projects/p/schemas/events",
            "type": "PROTOCOL_BUFFER",
            "definition": "syntax = \"proto3\";"
        }"#;

        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.schema_type, SchemaType::ProtocolBuffer);
        assert_eq!(schema.definition, "syntax = \"proto3\";");
    }

    #[test]
    fn unspecified_type_deserializes() {
        let json = r#"{"name": "projects/p/schemas/x", "type": "TYPE_UNSPECIFIED"}"#;
        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.schema_type, SchemaType::Unspecified);
    }

    #[test]
    fn missing_type_defaults_to_unspecified() {
        let json = r#"{"name": "projects/p/schemas/x"}"#;
        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.schema_type, SchemaType::Unspecified);
    }
}
