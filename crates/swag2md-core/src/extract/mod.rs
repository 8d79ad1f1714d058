pub mod access;
pub mod operation;
pub mod schema;

use serde_json::Value;

use crate::error::MissingFieldError;
use crate::ir::{Api, Component};
use crate::parse::spec::Document;

/// Example text for a property that declares none.
pub const MISSING_EXAMPLE: &str = "/";

/// Bound on chained `$ref` hops, so reference cycles terminate.
const MAX_REF_DEPTH: usize = 16;

/// What to do when a single list item (e.g. one parameter) is malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemPolicy {
    /// Drop the item, record a warning and keep going.
    #[default]
    Skip,
    /// Fail the whole extraction.
    Abort,
}

/// Walks the raw paths and schema catalog of a [`Document`] and produces
/// [`Api`] and [`Component`] lists in deterministic (sorted) order.
#[derive(Debug)]
pub struct Extractor<'a> {
    doc: &'a Document,
    policy: ItemPolicy,
    warnings: Vec<MissingFieldError>,
}

impl<'a> Extractor<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            policy: ItemPolicy::default(),
            warnings: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: ItemPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_warnings(self) -> Vec<MissingFieldError> {
        self.warnings
    }

    /// Every operation of every path, paths sorted, then methods sorted.
    pub fn extract_all_apis(&mut self) -> Result<Vec<Api>, MissingFieldError> {
        let doc = self.doc;
        let mut paths: Vec<(&String, &Value)> = doc.paths.iter().collect();
        paths.sort_by(|a, b| a.0.cmp(b.0));

        let mut apis = Vec::new();
        for (path, item) in paths {
            apis.extend(self.extract_apis(path, item)?);
        }
        log::debug!("extracted {} operations", apis.len());
        Ok(apis)
    }

    /// Follow local `$ref` pointers until a non-reference node is reached.
    /// Unresolvable references are returned as-is.
    fn resolve<'v>(&self, node: &'v Value) -> &'v Value
    where
        'a: 'v,
    {
        let mut current = node;
        for _ in 0..MAX_REF_DEPTH {
            let Some(reference) = current.get("$ref").and_then(Value::as_str) else {
                return current;
            };
            match self.doc.resolve_ref(reference) {
                Some(target) => current = target,
                None => {
                    log::debug!("unresolved reference {reference}");
                    return current;
                }
            }
        }
        current
    }

    /// Apply the item policy to a per-item failure.
    fn recover(&mut self, err: MissingFieldError) -> Result<(), MissingFieldError> {
        match self.policy {
            ItemPolicy::Abort => Err(err),
            ItemPolicy::Skip => {
                log::warn!("skipping malformed item: {err}");
                self.warnings.push(err);
                Ok(())
            }
        }
    }
}

/// Convenience for callers that only need the component list.
pub fn extract_components(doc: &Document) -> Result<Vec<Component>, MissingFieldError> {
    Extractor::new(doc).extract_components()
}
