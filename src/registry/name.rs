//! Schema resource name parsing.
//!
//! The registry identifies schemas by resource names of the form
//! `projects/{project}/schemas/{schemaId}`, optionally suffixed with
//! `@{revisionId}` to pin an immutable revision. Parsing always discards
//! the revision suffix, so a parsed [`SchemaName`] never carries one.

use crate::error::{Result, SyncError};

/// Separator between a schema id and a pinned revision id.
pub const REVISION_SEPARATOR: char = '@';

/// A parsed schema resource name.
///
/// Invariant: `schema_id` never contains the revision separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName {
    /// Project the schema belongs to.
    pub project: String,
    /// Schema id, unique within the project.
    pub schema_id: String,
}

impl SchemaName {
    /// Parse a fully-qualified resource name, discarding any revision suffix.
    ///
    /// Accepts `projects/{project}/schemas/{schemaId}[@{revisionId}]` and
    /// fails with [`SyncError::MalformedName`] for anything else.
    pub fn parse(name: &str) -> Result<Self> {
        let bare = strip_revision(name);

        let malformed = || SyncError::MalformedName {
            name: name.to_string(),
        };

        let mut segments = bare.split('/');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some("projects"), Some(project), Some("schemas"), Some(schema_id), None)
                if !project.is_empty() && !schema_id.is_empty() =>
            {
                Ok(Self {
                    project: project.to_string(),
                    schema_id: schema_id.to_string(),
                })
            }
            _ => Err(malformed()),
        }
    }

    /// Whether a fetch key is a fully-qualified resource name rather than
    /// a bare schema id.
    pub fn is_qualified(key: &str) -> bool {
        Self::parse(key).is_ok()
    }

    /// The fully-qualified resource name, without a revision suffix.
    pub fn qualified(&self) -> String {
        format!("projects/{}/schemas/{}", self.project, self.schema_id)
    }
}

/// Drop a `@revision` suffix from a resource name or fetch key.
pub fn strip_revision(name: &str) -> &str {
    match name.split_once(REVISION_SEPARATOR) {
        Some((bare, _)) => bare,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_resource_name() {
        let name = SchemaName::parse("projects/my-project/schemas/orders").unwrap();
        assert_eq!(name.project, "my-project");
        assert_eq!(name.schema_id, "orders");
    }

    #[test]
    fn parse_discards_revision_suffix() {
        let name = SchemaName::parse("projects/p/schemas/orders@abc123").unwrap();
        assert_eq!(name.schema_id, "orders");
        assert!(!name.schema_id.contains(REVISION_SEPARATOR));
    }

    #[test]
    fn rejects_bare_ids() {
        assert!(matches!(
            SchemaName::parse("orders"),
            Err(SyncError::MalformedName { .. })
        ));
    }

    #[test]
    fn rejects_wrong_collection_segments() {
        assert!(SchemaName::parse("projects/p/topics/orders").is_err());
        assert!(SchemaName::parse("folders/p/schemas/orders").is_err());
    }

    #[test]
    fn rejects_missing_or_extra_segments() {
        assert!(SchemaName::parse("projects/p/schemas").is_err());
        assert!(SchemaName::parse("projects/p/schemas/a/b").is_err());
        assert!(SchemaName::parse("projects//schemas/a").is_err());
        assert!(SchemaName::parse("").is_err());
    }

    #[test]
    fn qualified_round_trips() {
        let name = SchemaName::parse("projects/p/schemas/orders@rev").unwrap();
        assert_eq!(name.qualified(), "projects/p/schemas/orders");
    }

    #[test]
    fn is_qualified_distinguishes_key_forms() {
        assert!(SchemaName::is_qualified("projects/p/schemas/orders"));
        assert!(SchemaName::is_qualified("projects/p/schemas/orders@rev"));
        assert!(!SchemaName::is_qualified("orders"));
        assert!(!SchemaName::is_qualified("orders@rev"));
    }

    #[test]
    fn strip_revision_handles_both_forms() {
        assert_eq!(strip_revision("orders@rev1"), "orders");
        assert_eq!(strip_revision("orders"), "orders");
        assert_eq!(
            strip_revision("projects/p/schemas/orders@rev1"),
            "projects/p/schemas/orders"
        );
    }
}
