//! schema-sync - build-time download of schema registry definitions.
//!
//! schema-sync pulls a selected subset of Avro and Protocol Buffer schema
//! definitions out of a Pub/Sub-style schema registry and writes them into a
//! local directory tree, one file per schema. It is meant to run once per
//! build, with selection driven entirely by configuration: subject patterns,
//! optionally pinned revisions, and an optional schema type filter.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registry access: resource names, schema records, gateway
//! - [`selector`] - Pattern/version selection of listed schemas
//! - [`storage`] - Local persistence of schema definitions
//! - [`sync`] - The sync pipeline tying everything together
//!
//! # Example
//!
//! ```no_run
//! use schema_sync::config::SyncConfig;
//! use schema_sync::registry::HttpGateway;
//! use schema_sync::sync::SyncRunner;
//!
//! let config = SyncConfig::new("my-project", "schemas/");
//! let gateway = HttpGateway::new(&config.endpoint, &config.project)?;
//! let report = SyncRunner::new(config, gateway).run()?;
//! println!("wrote {} schema files", report.written.len());
//! # Ok::<(), schema_sync::SyncError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod selector;
pub mod storage;
pub mod sync;

pub use error::{Result, SyncError};
