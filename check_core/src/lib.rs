//! # check_core - Load Safety Evaluation Engine
//!
//! `check_core` is the engine behind Loadcheck: pick a construction
//! material, enter a quantity and loading configuration, and get a
//! pass / near-limit / overloaded assessment against fixed support-capacity
//! limits. The crate is headless: filtering, evaluation, notes, and
//! persistence are plain functions and injected collaborators, so any
//! front end (the bundled CLI, a GUI, a web layer) can sit on top.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: `evaluate()` is a pure function; the only mutable
//!   state lives in one [`session::CheckSession`]
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **No ambient dependencies**: storage is injected via
//!   [`store::ResultStore`], never looked up from the environment
//!
//! ## Quick Start
//!
//! ```rust
//! use check_core::session::{CheckSession, Submission};
//!
//! let mut session = CheckSession::new();
//!
//! // Filter the catalog the way a search box would
//! let options = session.options("metal plumbing", &[]);
//! assert_eq!(options[0].display_label(), "Steel Pipe (ft)");
//!
//! // Run a check
//! let result = session
//!     .submit(&Submission {
//!         material: "Steel Pipe".to_string(),
//!         quantity: 100.0,
//!         support: "hoist".to_string(),
//!         distribution: "off-center".to_string(),
//!     })
//!     .unwrap();
//!
//! // 250 lb against a 750 lb adjusted limit
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Material records, the builtin table, and filtering
//! - [`limits`] - Support capacities and distribution modifiers
//! - [`evaluate`] - The load check itself
//! - [`status`] - Per-material outcome ledger and notes payloads
//! - [`session`] - UI-facing container and submission validation
//! - [`store`] - Best-effort persistence of the last result
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod evaluate;
pub mod limits;
pub mod session;
pub mod status;
pub mod store;

// Re-export commonly used types at crate root for convenience
pub use catalog::{MaterialCatalog, MaterialKind, MaterialOption, MaterialRecord};
pub use errors::{CheckError, CheckResult};
pub use evaluate::{evaluate, EvaluationResult, LoadStatus};
pub use limits::{adjusted_limit_lb, Distribution, SupportType};
pub use session::{CheckSession, Submission};
pub use status::{LastStatus, MaterialNotes, StatusLedger};
pub use store::{JsonFileStore, MemoryStore, ResultStore};
