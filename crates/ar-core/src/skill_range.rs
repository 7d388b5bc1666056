//! Skill range field micro-parser

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::alias::classify;
use crate::normalize;

/// The effective distance or area of a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillRange {
    Nothing,
    Weapon,
    Sight,
    Scene,
    /// Distance in metres; zero means point-blank
    Metric(u32),
    /// Distance in grid squares
    Squares(u32),
    /// Unrecognized input, kept verbatim
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Nothing,
    Weapon,
    Sight,
    Scene,
}

static RANGE_TABLE: &[(Kind, &[&str])] = &[
    (Kind::Nothing, &["", "-", "ー", "無", "なし"]),
    (Kind::Weapon, &["武", "武器", "weapon", "wp"]),
    (Kind::Sight, &["視", "視界", "視線", "sight"]),
    (Kind::Scene, &["シーン", "scene", "sc"]),
];

impl Kind {
    fn into_range(self) -> SkillRange {
        match self {
            Kind::Nothing => SkillRange::Nothing,
            Kind::Weapon => SkillRange::Weapon,
            Kind::Sight => SkillRange::Sight,
            Kind::Scene => SkillRange::Scene,
        }
    }
}

// Matched against folded text, so digits and unit letters are half-width
// lowercase by the time they get here. A bare number means metres.
static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)m?$").unwrap());
static SQUARES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)sq$").unwrap());

impl SkillRange {
    /// Parse the range field. Never fails: the last fallback wraps the
    /// input verbatim.
    pub fn from_text(text: &str) -> SkillRange {
        if let Some(kind) = classify(text, RANGE_TABLE) {
            return kind.into_range();
        }
        if normalize::compare(text, "至近") {
            return SkillRange::Metric(0);
        }
        let folded = normalize::fold(text);
        if let Some(caps) = METRIC_RE.captures(&folded) {
            if let Ok(n) = caps[1].parse::<u32>() {
                return SkillRange::Metric(n);
            }
        }
        if let Some(caps) = SQUARES_RE.captures(&folded) {
            if let Ok(n) = caps[1].parse::<u32>() {
                return SkillRange::Squares(n);
            }
        }
        SkillRange::Text(text.to_string())
    }
}

impl fmt::Display for SkillRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillRange::Nothing => write!(f, "ー"),
            SkillRange::Weapon => write!(f, "武器"),
            SkillRange::Sight => write!(f, "視界"),
            SkillRange::Scene => write!(f, "シーン"),
            SkillRange::Metric(0) => write!(f, "至近"),
            SkillRange::Metric(n) => write!(f, "{}m", n),
            SkillRange::Squares(n) => write!(f, "{}sq", n),
            SkillRange::Text(s) => write!(f, "{}", s),
        }
    }
}
