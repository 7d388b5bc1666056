//! Cost field micro-parser
//!
//! Three kinds only: no cost, a numeric MP cost, and the fate-point
//! notation ("fate2", "フェイト３点"). Parsing is total; anything
//! unrecognized counts as no cost.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::normalize;

/// The resource expenditure required to use a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cost {
    Nothing,
    Numeric(u32),
    Fate(u32),
}

const NO_COST_SET: &[&str] = &["", "-", "ー", "無", "なし", "無し"];

// Accepts any truncation of "fate" mixed with its katakana rendering,
// matched against folded text. Start-anchored only; trailing garbage is
// tolerated like the rest of the informal notation.
static FATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[fフ]a?ァ?t?e?ェ?イ?ト?([0-9]+)点?").unwrap());

impl Cost {
    /// Parse the cost field. Never fails: the final fallback is no cost.
    pub fn from_text(text: &str) -> Cost {
        if NO_COST_SET.iter().any(|alias| normalize::compare(text, alias)) {
            return Cost::Nothing;
        }
        let folded = normalize::fold(text);
        if let Some(caps) = FATE_RE.captures(&folded) {
            if let Ok(n) = caps[1].parse::<u32>() {
                return Cost::Fate(n);
            }
        }
        if let Ok(n) = folded.parse::<u32>() {
            return Cost::Numeric(n);
        }
        Cost::Nothing
    }

    /// The numeric cost, when the kind has one.
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            Cost::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// The consumption sentence a fate cost contributes to the effect
    /// body. Empty for the other kinds.
    pub fn as_effect_text(&self) -> String {
        match self {
            Cost::Fate(n) => format!("フェイトを{}点消費。", n),
            _ => String::new(),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Numeric(n) if *n > 0 => write!(f, "{}", n),
            _ => write!(f, "ー"),
        }
    }
}
