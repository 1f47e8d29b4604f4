//! # Load Evaluation
//!
//! The core check: given a material, a quantity, and a loading
//! configuration, compute total weight, the adjusted capacity limit, and a
//! pass / near-limit / overloaded classification.
//!
//! ## Algorithm
//!
//! ```text
//! total weight   = weight per unit × quantity
//! adjusted limit = base capacity(support) × modifier(distribution)
//! utilization    = total weight / adjusted limit
//! ```
//!
//! Classification is a pure function of utilization: ≤ 0.9 passes, up to and
//! including 1.0 is near the limit, above 1.0 is overloaded.
//!
//! ## Example
//!
//! ```rust
//! use check_core::catalog::MaterialCatalog;
//! use check_core::evaluate::{evaluate, LoadStatus};
//! use check_core::limits::{Distribution, SupportType};
//!
//! let catalog = MaterialCatalog::builtin();
//! let gravel = catalog.lookup("Gravel").unwrap();
//!
//! let result = evaluate(gravel, 3.0, SupportType::Truck, Distribution::TopHeavy).unwrap();
//! assert_eq!(result.total_weight_lb, 300.0);
//! assert_eq!(result.adjusted_limit_lb, 3000.0);
//! assert_eq!(result.status, LoadStatus::Pass);
//! assert!(result.warning.is_some()); // loose material, top-heavy
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{MaterialKind, MaterialRecord};
use crate::errors::{CheckError, CheckResult};
use crate::limits::{adjusted_limit_lb, Distribution, SupportType};

/// Utilization at or below this ratio is a clean pass
const PASS_THRESHOLD: f64 = 0.9;

/// Advisory attached when loose material is arranged top-heavy
pub const SHIFTING_LOAD_WARNING: &str =
    "Loose material can shift in a top-heavy arrangement; secure containers and re-check before moving.";

/// Classification of a load check outcome.
///
/// `NearLimit` is a distinct status for utilization in (0.9, 1.0]; use
/// [`LoadStatus::is_safe`] when only safe/unsafe matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    /// Utilization ≤ 0.9
    Pass,
    /// Utilization in (0.9, 1.0]: within capacity, but close
    NearLimit,
    /// Utilization > 1.0
    Overloaded,
}

impl LoadStatus {
    /// Classify a utilization ratio
    pub fn classify(utilization: f64) -> Self {
        if utilization <= PASS_THRESHOLD {
            LoadStatus::Pass
        } else if utilization <= 1.0 {
            LoadStatus::NearLimit
        } else {
            LoadStatus::Overloaded
        }
    }

    /// Check whether the load is within capacity (utilization ≤ 1.0)
    pub fn is_safe(&self) -> bool {
        !matches!(self, LoadStatus::Overloaded)
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadStatus::Pass => "PASS",
            LoadStatus::NearLimit => "NEAR LIMIT",
            LoadStatus::Overloaded => "OVERLOADED",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of one load check.
///
/// Serializable as a flat record; the most recent instance is what the
/// cache slot persists (see [`crate::store`]).
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "Cinder Block",
///   "quantity": 20.0,
///   "support": "scaffold",
///   "distribution": "off-center",
///   "total_weight_lb": 700.0,
///   "adjusted_limit_lb": 375.0,
///   "utilization": 1.8666666666666667,
///   "status": "OVERLOADED",
///   "warning": null,
///   "checked_at": "2026-08-06T17:20:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Material name as selected
    pub material: String,

    /// Quantity entered, in the material's unit
    pub quantity: f64,

    /// Support bearing the load
    pub support: SupportType,

    /// Load arrangement on the support
    pub distribution: Distribution,

    /// Total weight: weight per unit × quantity (lb)
    pub total_weight_lb: f64,

    /// Capacity limit after the distribution modifier (lb)
    pub adjusted_limit_lb: f64,

    /// Utilization ratio: total weight / adjusted limit
    pub utilization: f64,

    /// Classification of the utilization ratio
    pub status: LoadStatus,

    /// Domain advisory, when one applies
    pub warning: Option<String>,

    /// When this check was computed
    pub checked_at: DateTime<Utc>,
}

impl EvaluationResult {
    /// Check whether the load is within capacity
    pub fn passes(&self) -> bool {
        self.status.is_safe()
    }

    /// Utilization as a percentage of the limit, for display
    pub fn utilization_percent(&self) -> f64 {
        self.utilization * 100.0
    }
}

/// Run the load check for a material.
///
/// This is a pure function over validated input: the only rejection is a
/// quantity that is not a finite number ≥ 0. Status recording and
/// persistence are the caller's concern (see [`crate::session`]).
///
/// # Example
///
/// ```rust
/// use check_core::catalog::MaterialCatalog;
/// use check_core::evaluate::evaluate;
/// use check_core::limits::{Distribution, SupportType};
///
/// let catalog = MaterialCatalog::builtin();
/// let block = catalog.lookup("Cinder Block").unwrap();
///
/// let result = evaluate(block, 20.0, SupportType::Scaffold, Distribution::OffCenter).unwrap();
/// assert!(!result.passes());
/// ```
pub fn evaluate(
    record: &MaterialRecord,
    quantity: f64,
    support: SupportType,
    distribution: Distribution,
) -> CheckResult<EvaluationResult> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CheckError::invalid_input(
            "quantity",
            quantity.to_string(),
            "Quantity must be a finite number >= 0",
        ));
    }

    let total_weight_lb = record.weight_per_unit_lb * quantity;
    let adjusted_limit_lb = adjusted_limit_lb(support, distribution);
    let utilization = total_weight_lb / adjusted_limit_lb;
    let status = LoadStatus::classify(utilization);

    let warning = if record.kind == MaterialKind::Loose && distribution == Distribution::TopHeavy {
        Some(SHIFTING_LOAD_WARNING.to_string())
    } else {
        None
    };

    Ok(EvaluationResult {
        material: record.name.clone(),
        quantity,
        support,
        distribution,
        total_weight_lb,
        adjusted_limit_lb,
        utilization,
        status,
        warning,
        checked_at: Utc::now(),
    })
}
