//! Run configuration.
//!
//! A [`SyncConfig`] is assembled once per invocation (from CLI arguments in
//! the binary, or directly in tests) and handed to the sync runner. There is
//! no lazy state: everything the run needs is constructed up front.

use std::path::PathBuf;

use crate::registry::gateway::DEFAULT_ENDPOINT;
use crate::registry::schema::SchemaType;

/// Everything one sync run needs to know.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Project whose schema registry is synced.
    pub project: String,
    /// Only sync schemas of this type; `None` syncs all types.
    pub schema_type: Option<SchemaType>,
    /// Ordered subject patterns. Empty means match all schemas.
    pub patterns: Vec<String>,
    /// Revisions pinned per pattern, positionally paired. Empty means no
    /// pinning.
    pub versions: Vec<String>,
    /// Base directory the definition files are written under.
    pub output_dir: PathBuf,
    /// Short-circuit the whole run without touching network or filesystem.
    pub skip: bool,
    /// Registry endpoint base URL.
    pub endpoint: String,
}

impl SyncConfig {
    /// A minimal configuration syncing every schema of every type.
    pub fn new(project: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            schema_type: None,
            patterns: Vec::new(),
            versions: Vec::new(),
            output_dir: output_dir.into(),
            skip: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
