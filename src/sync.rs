//! The sync pipeline: list, select, fetch, persist.
//!
//! Runs strictly sequentially: one listing call, then one fetch per selected
//! schema, then one write per fetched schema. The first error aborts the run;
//! files written earlier in the same run are left in place (no rollback, no
//! partial-success state).

use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::registry::gateway::RegistryGateway;
use crate::registry::schema::Schema;
use crate::selector::Selector;
use crate::storage::LocalStorage;

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Paths written, in the order the registry listed their schemas.
    pub written: Vec<PathBuf>,
    /// Whether the run was short-circuited by the skip flag.
    pub skipped: bool,
}

/// Drives one sync run against a registry gateway.
///
/// The gateway is owned by the runner, so its connections are released when
/// the runner goes out of scope, on success and on error alike.
pub struct SyncRunner<G: RegistryGateway> {
    config: SyncConfig,
    gateway: G,
}

impl<G: RegistryGateway> SyncRunner<G> {
    pub fn new(config: SyncConfig, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// Execute the run.
    ///
    /// Configuration problems (pattern compilation, version pairing, output
    /// directory) surface before any registry call is made.
    pub fn run(&self) -> Result<SyncReport> {
        if self.config.skip {
            tracing::info!("schema sync skipped");
            return Ok(SyncReport {
                written: Vec::new(),
                skipped: true,
            });
        }

        let selector = Selector::build(&self.config.patterns, &self.config.versions)?;
        let storage = LocalStorage::create(&self.config.output_dir, &self.config.project)?;

        let listed = self.gateway.list()?;
        let schemas = self.select_and_fetch(&selector, &listed)?;

        let mut written = Vec::with_capacity(schemas.len());
        for schema in &schemas {
            written.push(storage.save(schema)?);
        }

        tracing::info!(
            "downloaded {} schema(s) from project {}",
            written.len(),
            self.config.project
        );

        Ok(SyncReport {
            written,
            skipped: false,
        })
    }

    /// Apply the type pre-filter and the selector to the listing, fetching
    /// every surviving entry.
    fn select_and_fetch(&self, selector: &Selector, listed: &[Schema]) -> Result<Vec<Schema>> {
        let mut fetched = Vec::new();

        for entry in listed {
            if let Some(wanted) = self.config.schema_type {
                if entry.schema_type != wanted {
                    tracing::debug!("{}: filtered out by schema type", entry.name);
                    continue;
                }
            }

            match selector.matches(&entry.name)? {
                Some(key) => {
                    tracing::debug!("{}: fetching as '{key}'", entry.name);
                    fetched.push(self.gateway.fetch(&key)?);
                }
                None => {
                    tracing::debug!("{}: no subject pattern matched", entry.name);
                }
            }
        }

        Ok(fetched)
    }
}
