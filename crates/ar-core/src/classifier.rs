//! Skill-school classifier
//!
//! A spell classifier can carry elemental sub-tags written directly after
//! the school marker, e.g. "魔術〈水／光〉".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alias::classify;
use crate::element::Element;

/// The school a skill belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classifier {
    /// Spell, with its elements in written order (may be empty)
    Spell(Vec<Element>),
    Song,
    Alchemy,
    Role,
    Style,
    /// Explicit school annotation kept verbatim
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Spell,
    Song,
    Alchemy,
    Role,
    Style,
}

static CLASSIFIER_TABLE: &[(Kind, &[&str])] = &[
    (Kind::Spell, &["魔", "魔術", "spell", "spl", "sp", "magic", "mag", "mg"]),
    (Kind::Song, &["呪", "歌", "呪歌", "song", "sg"]),
    (Kind::Alchemy, &["錬", "錬金", "錬金術", "alchemy", "alc", "ac", "acm"]),
    (Kind::Role, &["ロ", "ロール", "role", "rl"]),
    (Kind::Style, &["ス", "スタイル", "流", "流派", "style", "sty", "stl", "st", "sy"]),
];

impl Kind {
    fn into_classifier(self) -> Classifier {
        match self {
            Kind::Spell => Classifier::Spell(Vec::new()),
            Kind::Song => Classifier::Song,
            Kind::Alchemy => Classifier::Alchemy,
            Kind::Role => Classifier::Role,
            Kind::Style => Classifier::Style,
        }
    }
}

// Bracket and separator glyphs allowed around element lists.
const IGNORABLE: &[char] = &[
    '〈', '〉', '《', '》', '(', ')', '（', '）', '・', '／', '/', '、', ' ', '　',
];

impl Classifier {
    /// Parse a school annotation. `None` means the text is not a
    /// classifier at all; callers leave it where it was.
    pub fn from_text(text: &str) -> Option<Classifier> {
        if let Some(kind) = classify(text, CLASSIFIER_TABLE) {
            return Some(kind.into_classifier());
        }
        let rest = text
            .strip_prefix("魔術")
            .or_else(|| text.strip_prefix("魔"))?;
        let mut elements = Vec::new();
        for c in rest.chars() {
            if IGNORABLE.contains(&c) {
                continue;
            }
            match Element::from_text(&c.to_string()) {
                Some(element) => elements.push(element),
                None => return None,
            }
        }
        if elements.is_empty() {
            None
        } else {
            Some(Classifier::Spell(elements))
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classifier::Spell(elements) if elements.is_empty() => write!(f, "魔術"),
            Classifier::Spell(elements) => {
                let glyphs: Vec<&str> = elements.iter().map(Element::as_str).collect();
                write!(f, "魔術〈{}〉", glyphs.join("／"))
            }
            Classifier::Song => write!(f, "呪歌"),
            Classifier::Alchemy => write!(f, "錬金術"),
            Classifier::Role => write!(f, "ロール"),
            Classifier::Style => write!(f, "流派"),
            Classifier::Text(s) => write!(f, "{}", s),
        }
    }
}
