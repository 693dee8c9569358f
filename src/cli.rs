//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros and the
//! conversion into a [`SyncConfig`].

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::registry::gateway::DEFAULT_ENDPOINT;
use crate::registry::schema::SchemaType;

/// schema-sync - download Pub/Sub schema registry definitions at build time.
#[derive(Debug, Parser)]
#[command(name = "schema-sync")]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Project whose schema registry is synced
    #[arg(short, long)]
    pub project: String,

    /// Only sync schemas of this type
    #[arg(long, value_enum)]
    pub schema_type: Option<SchemaTypeFilter>,

    /// Pattern a schema id must fully match to be synced (repeatable, ordered)
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,

    /// Revision pinned for the pattern at the same position (repeatable;
    /// either none or one per pattern)
    #[arg(long = "version")]
    pub versions: Vec<String>,

    /// Directory the schema files are written under
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Skip the run entirely
    #[arg(long, env = "SCHEMA_SYNC_SKIP")]
    pub skip: bool,

    /// Registry endpoint base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Schema types accepted by `--schema-type`.
///
/// Unknown values are rejected at parse time rather than silently ignored.
/// The upper-case aliases match the registry's wire enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTypeFilter {
    /// Avro schemas only
    #[value(name = "avro", alias = "AVRO")]
    Avro,
    /// Protocol Buffer schemas only
    #[value(name = "protocol-buffer", alias = "PROTOCOL_BUFFER")]
    ProtocolBuffer,
}

impl From<SchemaTypeFilter> for SchemaType {
    fn from(filter: SchemaTypeFilter) -> Self {
        match filter {
            SchemaTypeFilter::Avro => SchemaType::Avro,
            SchemaTypeFilter::ProtocolBuffer => SchemaType::ProtocolBuffer,
        }
    }
}

impl Cli {
    /// Assemble the run configuration from the parsed arguments.
    pub fn into_config(self) -> SyncConfig {
        SyncConfig {
            project: self.project,
            schema_type: self.schema_type.map(SchemaType::from),
            patterns: self.patterns,
            versions: self.versions,
            output_dir: self.output_dir,
            skip: self.skip,
            endpoint: self.endpoint,
        }
    }
}
