//! The six basic abilities plus luck

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alias::classify;

/// An ability a skill check can be based on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Agility,
    Intellect,
    Sense,
    Mental,
    Luck,
}

static ABILITY_TABLE: &[(Ability, &[&str])] = &[
    (Ability::Strength, &["筋力", "筋", "str"]),
    (Ability::Dexterity, &["器用", "器", "dex"]),
    (Ability::Agility, &["敏捷", "敏", "agi"]),
    (Ability::Intellect, &["知力", "知", "int"]),
    (Ability::Sense, &["感知", "感", "sen"]),
    (Ability::Mental, &["精神", "精", "mnd"]),
    (Ability::Luck, &["幸運", "幸", "luk"]),
];

impl Ability {
    /// Resolve an ability from its written form, `None` if unrecognized
    pub fn from_text(text: &str) -> Option<Ability> {
        classify(text, ABILITY_TABLE)
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Strength => "筋力",
            Ability::Dexterity => "器用",
            Ability::Agility => "敏捷",
            Ability::Intellect => "知力",
            Ability::Sense => "感知",
            Ability::Mental => "精神",
            Ability::Luck => "幸運",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_kanji() {
        assert_eq!(Ability::from_text("筋力"), Some(Ability::Strength));
        assert_eq!(Ability::from_text("幸運"), Some(Ability::Luck));
    }

    #[test]
    fn test_from_text_abbreviations() {
        assert_eq!(Ability::from_text("敏"), Some(Ability::Agility));
        assert_eq!(Ability::from_text("ＤＥＸ"), Some(Ability::Dexterity));
    }

    #[test]
    fn test_from_text_unknown() {
        assert_eq!(Ability::from_text("魅力"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ability::Intellect.to_string(), "知力");
    }
}
