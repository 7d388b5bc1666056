//! Judge field micro-parser
//!
//! Accepts the many shorthand spellings of the resolution-check type
//! ("命", "ＨＩＴ", "spl", ...), an optional trailing "判定" suffix, and an
//! optional trailing difficulty annotation such as "命中（難易度12）".

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::ability::Ability;
use crate::alias::classify;
use crate::normalize;

/// The resolution-check type a skill requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judge {
    /// No check at all
    Nothing,
    /// Automatic success
    AutoSuccess,
    /// Hit check
    Hit,
    /// Spell check
    Spell,
    /// Spellsong check
    Song,
    /// Alchemy check
    Alchemy,
    /// Check based on a specific ability
    Ability(Ability),
    /// Unrecognized input, kept verbatim
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Nothing,
    AutoSuccess,
    Hit,
    Spell,
    Song,
    Alchemy,
}

static JUDGE_TABLE: &[(Kind, &[&str])] = &[
    (Kind::Nothing, &["", "-", "ー", "無", "なし"]),
    (Kind::AutoSuccess, &["自", "成", "自動", "成功", "自動成功"]),
    (Kind::Hit, &["命", "命中", "hit", "ht"]),
    (Kind::Spell, &["魔", "魔術", "spell", "spl", "sp", "magic", "mag", "mg"]),
    (Kind::Song, &["呪", "歌", "呪歌", "song", "sg"]),
    (Kind::Alchemy, &["錬", "錬金", "錬金術", "alchemy", "alc", "ac", "acm"]),
];

impl Kind {
    fn into_judge(self) -> Judge {
        match self {
            Kind::Nothing => Judge::Nothing,
            Kind::AutoSuccess => Judge::AutoSuccess,
            Kind::Hit => Judge::Hit,
            Kind::Spell => Judge::Spell,
            Kind::Song => Judge::Song,
            Kind::Alchemy => Judge::Alchemy,
        }
    }
}

// Trailing difficulty annotation: "命中12", "魔術（難易度：12）", "敏捷 難8".
static DIFFICULTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*[（(]?(?:難易度|難)?[：:]?([0-9０-９]+)[)）]?$").unwrap()
});

impl Judge {
    /// Parse the judge field, returning the tag plus the difficulty
    /// annotation when one is present.
    ///
    /// The fallback chain is alias table, then ability lookup, then a
    /// verbatim `Text` wrap of the original input. On the `Text` path the
    /// difficulty slot stays `None` since the annotation remains part of
    /// the preserved string.
    pub fn from_text(text: &str) -> (Judge, Option<u32>) {
        let mut body = text;
        let mut difficulty = None;
        if let Some(caps) = DIFFICULTY_RE.captures(text) {
            if let Ok(n) = normalize::fold(&caps[2]).parse::<u32>() {
                difficulty = Some(n);
                body = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            }
        }
        let stripped = body.strip_suffix("判定").unwrap_or(body);
        if let Some(kind) = classify(stripped, JUDGE_TABLE) {
            return (kind.into_judge(), difficulty);
        }
        if let Some(ability) = Ability::from_text(stripped) {
            return (Judge::Ability(ability), difficulty);
        }
        (Judge::Text(text.to_string()), None)
    }

    /// Render the judge. Label mode (`in_effect == false`) fills the
    /// dedicated judge slot on a card; effect-clause mode produces the form
    /// that reads naturally inside effect text ("【知力】判定", bare "判定").
    pub fn display(&self, in_effect: bool) -> String {
        match self {
            Judge::Nothing => {
                if in_effect {
                    "判定".to_string()
                } else {
                    "ー".to_string()
                }
            }
            Judge::AutoSuccess => {
                if in_effect {
                    "判定".to_string()
                } else {
                    "自動成功".to_string()
                }
            }
            Judge::Hit => "命中判定".to_string(),
            Judge::Spell => "魔術判定".to_string(),
            Judge::Song => "呪歌判定".to_string(),
            Judge::Alchemy => "錬金術判定".to_string(),
            Judge::Ability(ability) => {
                if in_effect {
                    format!("【{}】判定", ability)
                } else {
                    format!("{}判定", ability)
                }
            }
            Judge::Text(s) => s.clone(),
        }
    }
}
