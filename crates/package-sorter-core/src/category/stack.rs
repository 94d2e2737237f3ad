//! Dispatch Category
//!
//! 荷物の振り分け先スタック。制約の緩い順に Standard < Special < Rejected。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Bulky and heavy
    Rejected,
}

impl Category {
    /// All categories, least restrictive first
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    /// Combine the two predicates into a category
    pub const fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }

    /// Operator-facing handling status
    pub fn handling_note(&self) -> &'static str {
        match self {
            Category::Standard => "Can be handled automatically",
            Category::Special => "Requires special handling",
            Category::Rejected => "Package rejected - too large and heavy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(Category::from_flags(false, false), Category::Standard);
        assert_eq!(Category::from_flags(true, false), Category::Special);
        assert_eq!(Category::from_flags(false, true), Category::Special);
        assert_eq!(Category::from_flags(true, true), Category::Rejected);
    }

    #[test]
    fn test_restrictiveness_order() {
        assert!(Category::Standard < Category::Special);
        assert!(Category::Special < Category::Rejected);
    }

    #[test]
    fn test_display_and_parse() {
        for cat in Category::ALL {
            assert_eq!(cat.to_string().parse::<Category>().unwrap(), cat);
        }
        assert_eq!("special".parse::<Category>().unwrap(), Category::Special);
        assert!("oversized".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_stack_names() {
        let json = serde_json::to_string(&Category::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
        let cat: Category = serde_json::from_str("\"STANDARD\"").unwrap();
        assert_eq!(cat, Category::Standard);
    }
}
