//! Local persistence of downloaded schema definitions.
//!
//! Definitions land at `output_dir/{project}/{schema_id}.avsc` or `.proto`,
//! written verbatim. Path derivation is revision-insensitive: the stored
//! file always represents the schema under its bare id, whichever revision
//! was downloaded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};
use crate::registry::name::{strip_revision, SchemaName};
use crate::registry::schema::Schema;

/// Writes schema definitions under a base output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    directory: PathBuf,
}

impl LocalStorage {
    /// Validate the output directory and create the project subdirectory.
    ///
    /// Fails if the output path exists and is not a directory. Missing
    /// directories (including parents) are created.
    pub fn create(directory: &Path, project: &str) -> Result<Self> {
        tracing::debug!("checking output directory {}", directory.display());

        if directory.exists() && !directory.is_dir() {
            return Err(SyncError::Config {
                message: format!(
                    "output directory '{}' exists and is not a directory",
                    directory.display()
                ),
            });
        }

        let project_dir = directory.join(project);
        if !project_dir.is_dir() {
            tracing::debug!("creating project directory {}", project_dir.display());
            fs::create_dir_all(&project_dir)?;
        }

        Ok(Self {
            directory: directory.to_path_buf(),
        })
    }

    /// Derive the local path for a schema. Pure; does not touch the
    /// filesystem.
    pub fn location(&self, schema: &Schema) -> Result<PathBuf> {
        let extension =
            schema
                .schema_type
                .extension()
                .ok_or_else(|| SyncError::UnsupportedType {
                    name: schema.name.clone(),
                })?;

        let name = SchemaName::parse(strip_revision(&schema.name))?;

        Ok(self
            .directory
            .join(&name.project)
            .join(format!("{}{}", name.schema_id, extension)))
    }

    /// Write a schema's definition to its derived location.
    ///
    /// Parent directories are created as needed. The definition body is
    /// written verbatim, UTF-8, with no wrapping metadata.
    pub fn save(&self, schema: &Schema) -> Result<PathBuf> {
        let path = self.location(schema)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &schema.definition)?;

        tracing::info!("saved {} to {}", schema.name, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::schema::SchemaType;
    use tempfile::TempDir;

    fn schema(name: &str, schema_type: SchemaType, definition: &str) -> Schema {
        Schema {
            name: name.to_string(),
            schema_type,
            definition: definition.to_string(),
            revision_id: String::new(),
            revision_create_time: None,
        }
    }

    #[test]
    fn create_makes_project_subdirectory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("schemas");

        LocalStorage::create(&out, "p").unwrap();
        assert!(out.join("p").is_dir());
    }

    #[test]
    fn create_rejects_non_directory_output_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();

        let err = LocalStorage::create(&file, "p").unwrap_err();
        assert!(matches!(err, SyncError::Config { .. }));
    }

    #[test]
    fn avro_location_uses_avsc_extension() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();

        let path = storage
            .location(&schema("projects/p/schemas/orders", SchemaType::Avro, ""))
            .unwrap();
        assert_eq!(path, temp.path().join("p").join("orders.avsc"));
    }

    #[test]
    fn protobuf_location_uses_proto_extension() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();

        let path = storage
            .location(&schema(
                "projects/p/schemas/events",
                SchemaType::ProtocolBuffer,
                "",
            ))
            .unwrap();
        assert_eq!(path, temp.path().join("p").join("events.proto"));
    }

    #[test]
    fn location_is_revision_insensitive() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();

        let pinned = storage
            .location(&schema("projects/p/schemas/s@rev123", SchemaType::Avro, ""))
            .unwrap();
        let bare = storage
            .location(&schema("projects/p/schemas/s", SchemaType::Avro, ""))
            .unwrap();
        assert_eq!(pinned, bare);
        assert_eq!(bare, temp.path().join("p").join("s.avsc"));
    }

    #[test]
    fn unsupported_type_fails_path_resolution() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();

        let err = storage
            .location(&schema("projects/p/schemas/x", SchemaType::Unspecified, ""))
            .unwrap_err();
        assert!(matches!(err, SyncError::UnsupportedType { .. }));
    }

    #[test]
    fn save_writes_definition_verbatim() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();
        let definition = "{\n  \"type\": \"record\",\n  \"name\": \"Order\"\n}";

        let path = storage
            .save(&schema(
                "projects/p/schemas/orders@rev1",
                SchemaType::Avro,
                definition,
            ))
            .unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), definition);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::create(temp.path(), "p").unwrap();

        // A schema listed under a different project than the configured one.
        let path = storage
            .save(&schema(
                "projects/other/schemas/events",
                SchemaType::ProtocolBuffer,
                "syntax = \"proto3\";",
            ))
            .unwrap();

        assert!(path.starts_with(temp.path().join("other")));
        assert!(path.exists());
    }
}
