//! # Material Catalog
//!
//! The fixed table of construction materials and the filter queries the UI
//! layer runs against it.
//!
//! ## Filter Semantics
//!
//! The free-text query is split on whitespace into tokens. A record matches
//! when **every** token is a case-insensitive substring of at least one of:
//! name, unit, kind key, any alias, or any tag (OR across fields, AND
//! across tokens). A non-empty kind selection additionally constrains the
//! record's kind. Results keep catalog-definition order; there is no
//! relevance ranking.
//!
//! ## Example
//!
//! ```rust
//! use check_core::catalog::{MaterialCatalog, MaterialKind};
//!
//! let catalog = MaterialCatalog::builtin();
//!
//! // "metal plumbing" reaches Steel Pipe through its tags alone
//! let hits = catalog.filter("metal plumbing", &[]);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Steel Pipe");
//!
//! // kind constraint without a query
//! let loose = catalog.filter("", &[MaterialKind::Loose]);
//! assert_eq!(loose[0].name, "Gravel");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Handling class of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Holds its shape; stack or rack it
    Rigid,
    /// Designed to stack in courses
    Stackable,
    /// Granular or unbound; needs containment
    Loose,
}

impl MaterialKind {
    /// All kind variants for UI filter checkboxes
    pub const ALL: [MaterialKind; 3] = [
        MaterialKind::Rigid,
        MaterialKind::Stackable,
        MaterialKind::Loose,
    ];

    /// Get the filter key for this kind (e.g., "rigid")
    pub fn key(&self) -> &'static str {
        match self {
            MaterialKind::Rigid => "rigid",
            MaterialKind::Stackable => "stackable",
            MaterialKind::Loose => "loose",
        }
    }

    /// Parse from a filter key, case-insensitively
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rigid" => Some(MaterialKind::Rigid),
            "stackable" => Some(MaterialKind::Stackable),
            "loose" => Some(MaterialKind::Loose),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialKind::Rigid => "Rigid",
            MaterialKind::Stackable => "Stackable",
            MaterialKind::Loose => "Loose",
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A catalog entry: one material with its unit weight and advisory notes.
///
/// Reference data, immutable once seeded. Evaluation outcomes are tracked
/// separately in [`crate::status::StatusLedger`], never on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Unique display name, also the lookup key (e.g., "Cinder Block")
    pub name: String,

    /// Unit the quantity is entered in (e.g., "each", "cubic ft")
    pub unit: String,

    /// Weight per unit in pounds
    pub weight_per_unit_lb: f64,

    /// Handling class
    #[serde(rename = "type")]
    pub kind: MaterialKind,

    /// Advisory handling notes; empty means none
    pub notes: String,

    /// Alternate names matched by the filter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Free-form tags matched by the filter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl MaterialRecord {
    /// Create a record with no aliases or tags
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        weight_per_unit_lb: f64,
        kind: MaterialKind,
        notes: impl Into<String>,
    ) -> Self {
        MaterialRecord {
            name: name.into(),
            unit: unit.into(),
            weight_per_unit_lb,
            kind,
            notes: notes.into(),
            aliases: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add aliases (builder pattern)
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Add tags (builder pattern)
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Check whether every query token matches some searchable field.
    ///
    /// Tokens are expected lower-cased; fields are lower-cased here.
    fn matches_tokens(&self, tokens: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        let unit = self.unit.to_lowercase();
        let kind = self.kind.key();
        let aliases: Vec<String> = self.aliases.iter().map(|a| a.to_lowercase()).collect();
        let tags: Vec<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();

        tokens.iter().all(|t| {
            name.contains(t)
                || unit.contains(t)
                || kind.contains(t)
                || aliases.iter().any(|a| a.contains(t))
                || tags.iter().any(|tag| tag.contains(t))
        })
    }
}

impl std::fmt::Display for MaterialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} lb/{})",
            self.name, self.kind, self.weight_per_unit_lb, self.unit
        )
    }
}

/// A `{name, unit}` pair for populating a choice list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOption {
    /// Material name (the selection value)
    pub name: String,
    /// Unit shown alongside the name
    pub unit: String,
}

impl MaterialOption {
    /// Label in the form the original choice list rendered: `Name (unit)`
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

impl From<&MaterialRecord> for MaterialOption {
    fn from(record: &MaterialRecord) -> Self {
        MaterialOption {
            name: record.name.clone(),
            unit: record.unit.clone(),
        }
    }
}

/// The material catalog: definition-ordered records with a name index.
///
/// Records are kept in seed order so filter results are stable; the index
/// provides O(1) case-insensitive lookup by name.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    /// Records in definition order
    records: Vec<MaterialRecord>,

    /// Uppercase name -> index into `records`
    by_name: HashMap<String, usize>,
}

/// The builtin six-material table, constructed once.
static BUILTIN: Lazy<MaterialCatalog> = Lazy::new(|| {
    let mut catalog = MaterialCatalog::new();

    catalog.insert(MaterialRecord::new(
        "Lumber (2x4)",
        "ft",
        1.2,
        MaterialKind::Rigid,
        "Stack flat to prevent roll-off.",
    ));
    catalog.insert(MaterialRecord::new(
        "Cinder Block",
        "each",
        35.0,
        MaterialKind::Stackable,
        "Avoid stacking above shoulder height.",
    ));
    catalog.insert(MaterialRecord::new(
        "Drywall Sheet",
        "each",
        50.0,
        MaterialKind::Rigid,
        "Edges chip easily; support vertically.",
    ));
    catalog.insert(MaterialRecord::new(
        "Gravel",
        "cubic ft",
        100.0,
        MaterialKind::Loose,
        "Shifts; secure containers.",
    ));
    catalog.insert(MaterialRecord::new(
        "Plywood Sheet",
        "each",
        60.0,
        MaterialKind::Rigid,
        "Store flat to prevent bowing.",
    ));
    catalog.insert(
        MaterialRecord::new(
            "Steel Pipe",
            "ft",
            2.5,
            MaterialKind::Rigid,
            "Wear gloves; edges can be sharp. Store horizontally to prevent rolling.",
        )
        .with_aliases(&["metal pipe", "tubing"])
        .with_tags(&["metal", "construction", "plumbing"]),
    );

    catalog
});

impl MaterialCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the builtin material table
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Insert a record, replacing any record with the same name
    pub fn insert(&mut self, record: MaterialRecord) {
        let key = record.name.to_uppercase();
        match self.by_name.get(&key) {
            Some(&idx) => self.records[idx] = record,
            None => {
                self.by_name.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name, case-insensitively.
    pub fn lookup(&self, name: &str) -> CheckResult<&MaterialRecord> {
        self.by_name
            .get(&name.to_uppercase())
            .map(|&idx| &self.records[idx])
            .ok_or_else(|| CheckError::material_not_found(name))
    }

    /// Check whether a record with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_uppercase())
    }

    /// All records in definition order
    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    /// Get the number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter records by free-text query and kind constraint.
    ///
    /// Empty query and empty `kinds` return the full catalog. An unmatched
    /// query returns an empty Vec, never an error.
    pub fn filter(&self, query: &str, kinds: &[MaterialKind]) -> Vec<&MaterialRecord> {
        let normalized = query.trim().to_lowercase();
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        self.records
            .iter()
            .filter(|r| tokens.is_empty() || r.matches_tokens(&tokens))
            .filter(|r| kinds.is_empty() || kinds.contains(&r.kind))
            .collect()
    }

    /// Filter results as `{name, unit}` option pairs (see [`MaterialOption`])
    pub fn options(&self, query: &str, kinds: &[MaterialKind]) -> Vec<MaterialOption> {
        self.filter(query, kinds)
            .into_iter()
            .map(MaterialOption::from)
            .collect()
    }
}
