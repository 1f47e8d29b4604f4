//! # Status Ledger & Material Notes
//!
//! A side-table mapping material name to the outcome of the last check
//! against it, plus the notes payload the UI renders for the selected
//! material. Keeping the ledger separate from [`crate::catalog`] keeps the
//! catalog immutable reference data and makes the dependency explicit: the
//! notes renderer takes the ledger as an argument.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::MaterialCatalog;

/// Outcome of the most recent check against a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LastStatus {
    /// No check recorded
    #[default]
    None,
    /// Last check was within capacity
    Pass,
    /// Last check was overloaded
    Fail,
}

/// Per-material record of last check outcomes.
///
/// Keyed by uppercase material name; absence means [`LastStatus::None`].
/// Each new check against a material overwrites its previous entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusLedger {
    by_material: HashMap<String, LastStatus>,
}

impl StatusLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a check against a material
    pub fn record(&mut self, material: &str, passed: bool) {
        let status = if passed {
            LastStatus::Pass
        } else {
            LastStatus::Fail
        };
        self.by_material.insert(material.to_uppercase(), status);
    }

    /// Get the last recorded outcome for a material
    pub fn last(&self, material: &str) -> LastStatus {
        self.by_material
            .get(&material.to_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Forget all recorded outcomes
    pub fn clear(&mut self) {
        self.by_material.clear();
    }
}

/// Notes payload for the selected material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialNotes {
    /// Advisory text, prefixed with the last check outcome when one exists
    pub text: String,
    /// Last check outcome for the material
    pub status: LastStatus,
}

impl MaterialNotes {
    /// The payload for "nothing selected"
    pub fn empty() -> Self {
        MaterialNotes {
            text: String::new(),
            status: LastStatus::None,
        }
    }
}

/// Build the notes payload for a selected material.
///
/// - `None` selection: empty text, status [`LastStatus::None`].
/// - Unknown name: treated the same as no selection.
/// - Otherwise: the record's notes ("No notes." when empty), prefixed with
///   "Load passes! " or "Load fails! " when the ledger holds an outcome.
pub fn notes_for(
    catalog: &MaterialCatalog,
    ledger: &StatusLedger,
    selected: Option<&str>,
) -> MaterialNotes {
    let Some(name) = selected else {
        return MaterialNotes::empty();
    };
    let Ok(record) = catalog.lookup(name) else {
        return MaterialNotes::empty();
    };

    let base = if record.notes.is_empty() {
        "No notes.".to_string()
    } else {
        record.notes.clone()
    };

    let status = ledger.last(name);
    let text = match status {
        LastStatus::Pass => format!("Load passes! {}", base),
        LastStatus::Fail => format!("Load fails! {}", base),
        LastStatus::None => base,
    };

    MaterialNotes { text, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MaterialKind, MaterialRecord};

    #[test]
    fn test_ledger_record_and_overwrite() {
        let mut ledger = StatusLedger::new();
        assert_eq!(ledger.last("Gravel"), LastStatus::None);

        ledger.record("Gravel", true);
        assert_eq!(ledger.last("Gravel"), LastStatus::Pass);
        // Case-insensitive key
        assert_eq!(ledger.last("gravel"), LastStatus::Pass);

        ledger.record("Gravel", false);
        assert_eq!(ledger.last("Gravel"), LastStatus::Fail);
    }

    #[test]
    fn test_notes_no_selection() {
        let catalog = MaterialCatalog::builtin();
        let ledger = StatusLedger::new();

        let notes = notes_for(&catalog, &ledger, None);
        assert_eq!(notes, MaterialNotes::empty());
        assert!(notes.text.is_empty());
    }

    #[test]
    fn test_notes_without_status() {
        let catalog = MaterialCatalog::builtin();
        let ledger = StatusLedger::new();

        let notes = notes_for(&catalog, &ledger, Some("Gravel"));
        assert_eq!(notes.text, "Shifts; secure containers.");
        assert_eq!(notes.status, LastStatus::None);
    }

    #[test]
    fn test_notes_prefixed_by_outcome() {
        let catalog = MaterialCatalog::builtin();
        let mut ledger = StatusLedger::new();

        ledger.record("Gravel", true);
        let notes = notes_for(&catalog, &ledger, Some("Gravel"));
        assert_eq!(notes.text, "Load passes! Shifts; secure containers.");
        assert_eq!(notes.status, LastStatus::Pass);

        ledger.record("Gravel", false);
        let notes = notes_for(&catalog, &ledger, Some("Gravel"));
        assert_eq!(notes.text, "Load fails! Shifts; secure containers.");
        assert_eq!(notes.status, LastStatus::Fail);
    }

    #[test]
    fn test_notes_fallback_when_absent() {
        let mut catalog = MaterialCatalog::builtin();
        catalog.insert(MaterialRecord::new(
            "Sand",
            "cubic ft",
            90.0,
            MaterialKind::Loose,
            "",
        ));
        let ledger = StatusLedger::new();

        let notes = notes_for(&catalog, &ledger, Some("Sand"));
        assert_eq!(notes.text, "No notes.");
    }

    #[test]
    fn test_notes_unknown_material() {
        let catalog = MaterialCatalog::builtin();
        let ledger = StatusLedger::new();

        let notes = notes_for(&catalog, &ledger, Some("Rebar"));
        assert_eq!(notes, MaterialNotes::empty());
    }
}
