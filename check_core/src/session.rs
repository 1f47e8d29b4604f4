//! # Check Session
//!
//! The UI-facing container: one `CheckSession` owns the catalog, the status
//! ledger, the optional result store, and the current selection. Every
//! operation is a synchronous, run-to-completion transition driven by a
//! single user action; there is no partial visible state.
//!
//! ## Example
//!
//! ```rust
//! use check_core::session::{CheckSession, Submission};
//!
//! let mut session = CheckSession::new();
//!
//! let options = session.options("cinder", &[]);
//! assert_eq!(options[0].name, "Cinder Block");
//!
//! session.select(Some("Cinder Block")).unwrap();
//!
//! let result = session
//!     .submit(&Submission {
//!         material: "Cinder Block".to_string(),
//!         quantity: 2.0,
//!         support: "hoist".to_string(),
//!         distribution: "centered".to_string(),
//!     })
//!     .unwrap();
//! assert!(result.passes());
//! assert!(session.notes().text.starts_with("Load passes!"));
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{MaterialCatalog, MaterialKind, MaterialOption};
use crate::errors::{CheckError, CheckResult};
use crate::evaluate::{evaluate, EvaluationResult};
use crate::limits::{Distribution, SupportType};
use crate::status::{notes_for, MaterialNotes, StatusLedger};
use crate::store::ResultStore;

/// One form submission, exactly as the surrounding UI collects it.
///
/// `support` and `distribution` are raw form keys and `quantity` may be NaN
/// (the result of parsing an empty numeric field); [`CheckSession::submit`]
/// validates all four fields together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Selected material name; empty means nothing selected
    pub material: String,
    /// Quantity in the material's unit
    pub quantity: f64,
    /// Support-type key (e.g., "scaffold")
    pub support: String,
    /// Distribution key (e.g., "off-center")
    pub distribution: String,
}

/// Session state for one user working the check form.
pub struct CheckSession {
    catalog: MaterialCatalog,
    ledger: StatusLedger,
    store: Option<Box<dyn ResultStore>>,
    selected: Option<String>,
}

impl CheckSession {
    /// Create a session over the builtin catalog, with no persistence
    pub fn new() -> Self {
        Self::with_catalog(MaterialCatalog::builtin())
    }

    /// Create a session over a custom catalog
    pub fn with_catalog(catalog: MaterialCatalog) -> Self {
        CheckSession {
            catalog,
            ledger: StatusLedger::new(),
            store: None,
            selected: None,
        }
    }

    /// Attach a result store (builder pattern)
    pub fn with_store(mut self, store: Box<dyn ResultStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// The catalog this session reads from
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// The per-material outcome ledger
    pub fn ledger(&self) -> &StatusLedger {
        &self.ledger
    }

    /// The currently selected material name, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set or clear the current selection.
    ///
    /// The name must resolve in the catalog; the stored selection uses the
    /// record's canonical name.
    pub fn select(&mut self, name: Option<&str>) -> CheckResult<()> {
        match name {
            None => {
                self.selected = None;
                Ok(())
            }
            Some(name) => {
                let record = self.catalog.lookup(name)?;
                self.selected = Some(record.name.clone());
                Ok(())
            }
        }
    }

    /// Choice-list options for the current filter.
    ///
    /// Pure filter results in catalog order, except that a live selection
    /// excluded by the filter is prepended, so choosing a material and then
    /// narrowing the filter never silently drops the choice.
    pub fn options(&self, query: &str, kinds: &[MaterialKind]) -> Vec<MaterialOption> {
        let mut options = self.catalog.options(query, kinds);

        if let Some(current) = self.selected.as_deref() {
            if !options.iter().any(|o| o.name == current) {
                if let Ok(record) = self.catalog.lookup(current) {
                    options.insert(0, MaterialOption::from(record));
                }
            }
        }

        options
    }

    /// Notes payload for the current selection
    pub fn notes(&self) -> MaterialNotes {
        notes_for(&self.catalog, &self.ledger, self.selected.as_deref())
    }

    /// Validate and run one submission.
    ///
    /// Every offending field is collected into a single
    /// [`CheckError::ValidationFailed`]; nothing is computed or recorded on
    /// rejection. On success the outcome is recorded in the ledger and the
    /// snapshot is written to the store best-effort (a store failure never
    /// fails the check).
    pub fn submit(&mut self, submission: &Submission) -> CheckResult<EvaluationResult> {
        let mut invalid: Vec<String> = Vec::new();

        let record = if submission.material.trim().is_empty() {
            invalid.push("material".to_string());
            None
        } else {
            match self.catalog.lookup(&submission.material) {
                Ok(record) => Some(record),
                Err(_) => {
                    invalid.push("material".to_string());
                    None
                }
            }
        };

        if !submission.quantity.is_finite() || submission.quantity < 0.0 {
            invalid.push("quantity".to_string());
        }

        let support = SupportType::from_key(&submission.support);
        if support.is_none() {
            invalid.push("support".to_string());
        }

        let distribution = Distribution::from_key(&submission.distribution);
        if distribution.is_none() {
            invalid.push("distribution".to_string());
        }

        if !invalid.is_empty() {
            return Err(CheckError::validation_failed(invalid));
        }

        // All four are present after the emptiness check above
        let record = record.unwrap();
        let result = evaluate(
            record,
            submission.quantity,
            support.unwrap(),
            distribution.unwrap(),
        )?;

        self.ledger.record(&result.material, result.passes());

        if let Some(store) = &self.store {
            // Best-effort cache: a failed write is not a failed check
            let _ = store.save(&result);
        }

        Ok(result)
    }

    /// Recover the most recent persisted result, if any.
    ///
    /// Read or parse failures mean "no prior result", never an error.
    pub fn restore_last(&self) -> Option<EvaluationResult> {
        self.store
            .as_ref()
            .and_then(|store| store.load().ok())
            .flatten()
    }
}

impl Default for CheckSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::LoadStatus;
    use crate::status::LastStatus;
    use crate::store::{JsonFileStore, MemoryStore};
    use std::env::temp_dir;
    use std::fs;

    fn submission(material: &str, quantity: f64, support: &str, distribution: &str) -> Submission {
        Submission {
            material: material.to_string(),
            quantity,
            support: support.to_string(),
            distribution: distribution.to_string(),
        }
    }

    #[test]
    fn test_submit_happy_path() {
        let mut session = CheckSession::new();
        let result = session
            .submit(&submission("Gravel", 3.0, "truck", "top-heavy"))
            .unwrap();

        assert_eq!(result.status, LoadStatus::Pass);
        assert!(result.warning.is_some());
        assert_eq!(session.ledger().last("Gravel"), LastStatus::Pass);
    }

    #[test]
    fn test_submit_missing_material_rejected() {
        let mut session = CheckSession::new();
        let err = session
            .submit(&submission("", 10.0, "truck", "centered"))
            .unwrap_err();

        assert_eq!(
            err,
            CheckError::validation_failed(vec!["material".to_string()])
        );
    }

    #[test]
    fn test_submit_nan_quantity_rejected() {
        let mut session = CheckSession::new();
        let err = session
            .submit(&submission("Gravel", f64::NAN, "truck", "centered"))
            .unwrap_err();

        assert_eq!(
            err,
            CheckError::validation_failed(vec!["quantity".to_string()])
        );
    }

    #[test]
    fn test_submit_aggregates_all_offending_fields() {
        let mut session = CheckSession::new();
        let err = session
            .submit(&submission("", f64::NAN, "crane", "sideways"))
            .unwrap_err();

        match err {
            CheckError::ValidationFailed { fields } => {
                assert_eq!(fields, vec!["material", "quantity", "support", "distribution"]);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_submission_records_nothing() {
        let mut session = CheckSession::new();
        let _ = session.submit(&submission("Gravel", f64::NAN, "truck", "centered"));
        assert_eq!(session.ledger().last("Gravel"), LastStatus::None);
    }

    #[test]
    fn test_notes_follow_submissions() {
        let mut session = CheckSession::new();
        session.select(Some("Cinder Block")).unwrap();
        assert_eq!(session.notes().status, LastStatus::None);

        // 20 blocks on an off-center scaffold: overloaded
        session
            .submit(&submission("Cinder Block", 20.0, "scaffold", "off-center"))
            .unwrap();
        let notes = session.notes();
        assert_eq!(notes.status, LastStatus::Fail);
        assert!(notes.text.starts_with("Load fails! "));

        // 2 blocks on a centered hoist: passes, overwriting the old outcome
        session
            .submit(&submission("Cinder Block", 2.0, "hoist", "centered"))
            .unwrap();
        assert!(session.notes().text.starts_with("Load passes! "));
    }

    #[test]
    fn test_select_unknown_material() {
        let mut session = CheckSession::new();
        assert!(session.select(Some("Rebar")).is_err());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_select_canonicalizes_name() {
        let mut session = CheckSession::new();
        session.select(Some("steel pipe")).unwrap();
        assert_eq!(session.selected(), Some("Steel Pipe"));
    }

    #[test]
    fn test_options_keep_live_selection_visible() {
        let mut session = CheckSession::new();
        session.select(Some("Gravel")).unwrap();

        // The filter excludes Gravel; the selection is prepended anyway
        let options = session.options("sheet", &[]);
        assert_eq!(options[0].name, "Gravel");
        assert_eq!(options[1].name, "Drywall Sheet");
        assert_eq!(options[2].name, "Plywood Sheet");

        // The pure filter itself stays strict
        assert!(session
            .catalog()
            .filter("sheet", &[])
            .iter()
            .all(|r| r.name != "Gravel"));
    }

    #[test]
    fn test_options_no_duplicate_when_selection_matches() {
        let mut session = CheckSession::new();
        session.select(Some("Gravel")).unwrap();

        let options = session.options("gravel", &[]);
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_store_written_on_submit_and_restored() {
        let mut session = CheckSession::new().with_store(Box::new(MemoryStore::new()));
        assert!(session.restore_last().is_none());

        let result = session
            .submit(&submission("Gravel", 3.0, "truck", "top-heavy"))
            .unwrap();

        let restored = session.restore_last().unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn test_restore_survives_corrupt_slot() {
        let path = temp_dir().join("loadcheck_test_session_corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        let session = CheckSession::new().with_store(Box::new(JsonFileStore::new(&path)));
        assert!(session.restore_last().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_no_store_is_fine() {
        let session = CheckSession::new();
        assert!(session.restore_last().is_none());
    }
}
