use serde::{Deserialize, Serialize};

/// The closed set of caregiving event kinds.
///
/// New kinds require a source change: every per-category table and match
/// in the crate is sized to exactly these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Feeding,
    GasReliefDose,
    VitaminDose,
    DiaperChange,
}

/// All categories in display order.
pub const ALL_CATEGORIES: [Category; 4] = [
    Category::Feeding,
    Category::GasReliefDose,
    Category::VitaminDose,
    Category::DiaperChange,
];

impl Category {
    /// Stable wire/CLI key, also used in the CSV `tipo` column.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Feeding => "feeding",
            Category::GasReliefDose => "gas-relief-dose",
            Category::VitaminDose => "vitamin-dose",
            Category::DiaperChange => "diaper-change",
        }
    }

    /// Display label shown in tables and status output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Feeding => "Leche",
            Category::GasReliefDose => "Simeticona",
            Category::VitaminDose => "Vitamina",
            Category::DiaperChange => "Pañal",
        }
    }

    /// Default measurement unit for the amount field, if the category
    /// tracks a quantity at all.
    pub fn default_unit(&self) -> Option<&'static str> {
        match self {
            Category::Feeding => Some("ml"),
            Category::GasReliefDose => Some("gotas"),
            Category::VitaminDose => Some("gotas"),
            Category::DiaperChange => None,
        }
    }

    /// Dense index, used by fixed-size per-category tables.
    pub fn index(&self) -> usize {
        match self {
            Category::Feeding => 0,
            Category::GasReliefDose => 1,
            Category::VitaminDose => 2,
            Category::DiaperChange => 3,
        }
    }

    /// Parse a category from its key or display label, case-insensitively.
    pub fn from_key(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase();
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.key() == norm || c.label().to_lowercase() == norm)
    }
}
