//! # Support Limits & Distribution Modifiers
//!
//! Fixed capacity tables for the load check:
//!
//! ```text
//! adjusted limit = base capacity(support) × modifier(distribution)
//! ```
//!
//! | Support  | Base capacity | Distribution | Modifier |
//! |----------|---------------|--------------|----------|
//! | scaffold | 500 lb        | centered     | 1.00     |
//! | hoist    | 1000 lb       | off-center   | 0.75     |
//! | truck    | 5000 lb       | top-heavy    | 0.60     |
//!
//! Both tables are immutable. Base capacities and modifiers are positive, so
//! the adjusted limit is always positive and a utilization ratio is always
//! defined.

use serde::{Deserialize, Serialize};

/// Class of equipment bearing the load, each with a fixed base capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SupportType {
    /// Scaffold platform: 500 lb base capacity
    #[default]
    Scaffold,

    /// Material hoist: 1000 lb base capacity
    Hoist,

    /// Flatbed truck: 5000 lb base capacity
    Truck,
}

impl SupportType {
    /// All support variants for UI selection
    pub const ALL: [SupportType; 3] = [
        SupportType::Scaffold,
        SupportType::Hoist,
        SupportType::Truck,
    ];

    /// Get the base capacity in pounds
    pub fn base_capacity_lb(&self) -> f64 {
        match self {
            SupportType::Scaffold => 500.0,
            SupportType::Hoist => 1000.0,
            SupportType::Truck => 5000.0,
        }
    }

    /// Get the form key for this support type (e.g., "scaffold")
    pub fn key(&self) -> &'static str {
        match self {
            SupportType::Scaffold => "scaffold",
            SupportType::Hoist => "hoist",
            SupportType::Truck => "truck",
        }
    }

    /// Parse from a form key, case-insensitively
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scaffold" => Some(SupportType::Scaffold),
            "hoist" => Some(SupportType::Hoist),
            "truck" => Some(SupportType::Truck),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Scaffold => "Scaffold (500 lb)",
            SupportType::Hoist => "Hoist (1000 lb)",
            SupportType::Truck => "Truck (5000 lb)",
        }
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the load is arranged on the support, scaling effective capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Load centered on the support: full capacity
    #[default]
    Centered,

    /// Load off-center: capacity reduced to 75%
    OffCenter,

    /// Top-heavy arrangement: capacity reduced to 60%
    TopHeavy,
}

impl Distribution {
    /// All distribution variants for UI selection
    pub const ALL: [Distribution; 3] = [
        Distribution::Centered,
        Distribution::OffCenter,
        Distribution::TopHeavy,
    ];

    /// Get the capacity multiplier
    pub fn factor(&self) -> f64 {
        match self {
            Distribution::Centered => 1.0,
            Distribution::OffCenter => 0.75,
            Distribution::TopHeavy => 0.6,
        }
    }

    /// Get the form key for this distribution (e.g., "off-center")
    pub fn key(&self) -> &'static str {
        match self {
            Distribution::Centered => "centered",
            Distribution::OffCenter => "off-center",
            Distribution::TopHeavy => "top-heavy",
        }
    }

    /// Parse from a form key, case-insensitively
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "centered" => Some(Distribution::Centered),
            "off-center" => Some(Distribution::OffCenter),
            "top-heavy" => Some(Distribution::TopHeavy),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Distribution::Centered => "Centered (1.00)",
            Distribution::OffCenter => "Off-center (0.75)",
            Distribution::TopHeavy => "Top-heavy (0.60)",
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Calculate the adjusted capacity limit in pounds.
///
/// Depends only on the support type and distribution, never on the material
/// or quantity.
pub fn adjusted_limit_lb(support: SupportType, distribution: Distribution) -> f64 {
    support.base_capacity_lb() * distribution.factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_capacities() {
        assert_eq!(SupportType::Scaffold.base_capacity_lb(), 500.0);
        assert_eq!(SupportType::Hoist.base_capacity_lb(), 1000.0);
        assert_eq!(SupportType::Truck.base_capacity_lb(), 5000.0);
    }

    #[test]
    fn test_distribution_factors() {
        assert_eq!(Distribution::Centered.factor(), 1.0);
        assert_eq!(Distribution::OffCenter.factor(), 0.75);
        assert_eq!(Distribution::TopHeavy.factor(), 0.6);
    }

    #[test]
    fn test_adjusted_limit_table() {
        assert_eq!(
            adjusted_limit_lb(SupportType::Scaffold, Distribution::Centered),
            500.0
        );
        assert_eq!(
            adjusted_limit_lb(SupportType::Hoist, Distribution::OffCenter),
            750.0
        );
        assert_eq!(
            adjusted_limit_lb(SupportType::Truck, Distribution::TopHeavy),
            3000.0
        );
    }

    #[test]
    fn test_adjusted_limit_always_positive() {
        for support in SupportType::ALL {
            for distribution in Distribution::ALL {
                assert!(adjusted_limit_lb(support, distribution) > 0.0);
            }
        }
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(SupportType::from_key("truck"), Some(SupportType::Truck));
        assert_eq!(SupportType::from_key(" SCAFFOLD "), Some(SupportType::Scaffold));
        assert_eq!(SupportType::from_key("crane"), None);
        assert_eq!(SupportType::from_key(""), None);

        assert_eq!(
            Distribution::from_key("off-center"),
            Some(Distribution::OffCenter)
        );
        assert_eq!(
            Distribution::from_key("Top-Heavy"),
            Some(Distribution::TopHeavy)
        );
        assert_eq!(Distribution::from_key("sideways"), None);
    }

    #[test]
    fn test_keys_roundtrip() {
        for support in SupportType::ALL {
            assert_eq!(SupportType::from_key(support.key()), Some(support));
        }
        for distribution in Distribution::ALL {
            assert_eq!(Distribution::from_key(distribution.key()), Some(distribution));
        }
    }

    #[test]
    fn test_serialization_uses_form_keys() {
        let json = serde_json::to_string(&Distribution::TopHeavy).unwrap();
        assert_eq!(json, "\"top-heavy\"");
        let parsed: Distribution = serde_json::from_str("\"off-center\"").unwrap();
        assert_eq!(parsed, Distribution::OffCenter);

        let json = serde_json::to_string(&SupportType::Scaffold).unwrap();
        assert_eq!(json, "\"scaffold\"");
    }
}
