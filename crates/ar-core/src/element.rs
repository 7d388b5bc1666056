//! Spell elements

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alias::classify;

/// Elemental attribute carried by a spell classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
}

static ELEMENT_TABLE: &[(Element, &[&str])] = &[
    (Element::Fire, &["火", "炎", "fire"]),
    (Element::Water, &["水", "water"]),
    (Element::Earth, &["地", "土", "earth"]),
    (Element::Wind, &["風", "wind"]),
    (Element::Light, &["光", "light"]),
    (Element::Dark, &["闇", "dark"]),
];

impl Element {
    /// Resolve an element from its written form, `None` if unrecognized
    pub fn from_text(text: &str) -> Option<Element> {
        classify(text, ELEMENT_TABLE)
    }

    /// Canonical single-glyph display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "火",
            Element::Water => "水",
            Element::Earth => "地",
            Element::Wind => "風",
            Element::Light => "光",
            Element::Dark => "闇",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
