//! Resource registry for document-ingestion outcomes
//!
//! Records one entry per upload attempt whose outcome is known. Entries are
//! append-only; duplicate names are kept as separate records and never
//! merged.

use serde::{Deserialize, Serialize};

/// What kind of resource was ingested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// An uploaded document
    Document,
}

/// Terminal outcome of one upload attempt
///
/// A status never transitions once recorded; there are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// The conversion service produced a transcript and summary
    Ingested,
    /// The conversion service rejected the document
    Failed,
}

/// Record of one document-ingestion attempt and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// File name as uploaded
    pub name: String,
    /// Resource kind
    pub kind: ResourceKind,
    /// Terminal status
    pub status: ResourceStatus,
}

/// Append-only registry of ingestion outcomes
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: Vec<Resource>,
}

impl ResourceRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one upload attempt
    pub fn record(&mut self, name: impl Into<String>, status: ResourceStatus) {
        self.entries.push(Resource {
            name: name.into(),
            kind: ResourceKind::Document,
            status,
        });
    }

    /// All recorded entries in attempt order
    pub fn entries(&self) -> &[Resource] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any outcome has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = ResourceRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_record_appends_document_entry() {
        let mut registry = ResourceRegistry::new();
        registry.record("notes.pdf", ResourceStatus::Ingested);

        assert_eq!(registry.len(), 1);
        let entry = &registry.entries()[0];
        assert_eq!(entry.name, "notes.pdf");
        assert_eq!(entry.kind, ResourceKind::Document);
        assert_eq!(entry.status, ResourceStatus::Ingested);
    }

    #[test]
    fn test_duplicate_names_are_not_merged() {
        let mut registry = ResourceRegistry::new();
        registry.record("notes.pdf", ResourceStatus::Ingested);
        registry.record("notes.pdf", ResourceStatus::Ingested);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].name, registry.entries()[1].name);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceStatus::Ingested).unwrap();
        assert_eq!(json, "\"ingested\"");
        let json = serde_json::to_string(&ResourceStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }
}
