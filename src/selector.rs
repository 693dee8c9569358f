//! Schema selection: which listed schemas to download, at which revision.
//!
//! A [`Selector`] is built once per run from the configured subject patterns
//! and their optionally pinned versions, then asked for a fetch key per
//! listing entry. Patterns and versions are positionally paired, so the same
//! pattern text may appear twice with different versions; the first matching
//! rule (lowest index) always wins, which keeps that configuration
//! well-defined.

use regex::Regex;

use crate::error::{Result, SyncError};
use crate::registry::name::{SchemaName, REVISION_SEPARATOR};

/// One configured pattern with its optionally pinned revision.
#[derive(Debug, Clone)]
pub struct SelectionRule {
    pattern: Regex,
    revision: Option<String>,
}

impl SelectionRule {
    fn fetch_key(&self, schema_id: &str) -> String {
        match &self.revision {
            Some(revision) => format!("{schema_id}{REVISION_SEPARATOR}{revision}"),
            None => schema_id.to_string(),
        }
    }
}

/// Decides, per listing entry, whether a schema is synced and under which
/// fetch key.
#[derive(Debug, Clone)]
pub enum Selector {
    /// No patterns configured: every schema matches, never pinned.
    MatchAll,
    /// Ordered rules; the first match wins.
    Rules(Vec<SelectionRule>),
}

impl Selector {
    /// Build a selector from ordered pattern and version lists.
    ///
    /// With no patterns this is [`Selector::MatchAll`]. A non-empty version
    /// list must pair 1:1 with the patterns; a partial mix is a configuration
    /// error. An empty version list leaves every rule unpinned.
    pub fn build(patterns: &[String], versions: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Selector::MatchAll);
        }

        if !versions.is_empty() && versions.len() != patterns.len() {
            return Err(SyncError::Config {
                message: format!(
                    "number of versions ({}) must match number of patterns ({})",
                    versions.len(),
                    patterns.len()
                ),
            });
        }

        let rules = patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                Ok(SelectionRule {
                    pattern: compile(pattern)?,
                    revision: versions.get(index).cloned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Selector::Rules(rules))
    }

    /// Resolve a listed schema name to a fetch key, or `None` if no rule
    /// matches (the schema is excluded from the sync).
    ///
    /// The name is parsed first, so any revision embedded in the listing
    /// entry is discarded before matching.
    pub fn matches(&self, full_name: &str) -> Result<Option<String>> {
        let schema_id = SchemaName::parse(full_name)?.schema_id;

        let key = match self {
            Selector::MatchAll => Some(schema_id),
            Selector::Rules(rules) => rules
                .iter()
                .find(|rule| rule.pattern.is_match(&schema_id))
                .map(|rule| rule.fetch_key(&schema_id)),
        };

        Ok(key)
    }
}

/// Compile one subject pattern with full-string match semantics.
fn compile(pattern: &str) -> Result<Regex> {
    tracing::debug!("compiling subject pattern '{pattern}'");

    // Anchored so `a` matches the schema id `a`, not `ab`.
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| SyncError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
