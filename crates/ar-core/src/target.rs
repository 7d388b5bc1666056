//! Target field micro-parser
//!
//! Covers the alias kinds, kanji-numeral counts ("三体"), the SL-tied
//! count ("SL"), and a verbatim fallback for anything else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::alias::classify;
use crate::normalize;

/// How many and which entities a skill affects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Myself,
    Single,
    /// Single target, choice forced by the skill
    ForceSingle,
    /// A fixed number of targets, always two or more
    Multiple(u32),
    /// As many targets as the skill's current level
    LevelMultiple,
    Engage,
    EngageSelectable,
    Field,
    FieldSelectable,
    Line,
    LineSelectable,
    Cross,
    CrossSelectable,
    /// Unrecognized input, kept verbatim
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Myself,
    Single,
    ForceSingle,
    Engage,
    EngageSelectable,
    Field,
    FieldSelectable,
    Line,
    LineSelectable,
    Cross,
    CrossSelectable,
}

const MYSELF_SET: &[&str] = &["", "-", "自", "自身", "0", "self", "u", "自分"];
const SINGLE_SET: &[&str] = &["単", "単体", "1", "一", "1体", "一体", "one", "single"];
const ENGAGE_SET: &[&str] = &["範", "範囲", "eg", "e", "engage", "エンゲージ"];
const FIELD_SET: &[&str] = &["場", "場面", "field", "scene", "s", "シーン"];
const LINE_SET: &[&str] = &["直", "直線", "line", "ln", "ライン"];
const CROSS_SET: &[&str] = &["十", "十字", "cross", "クロス"];
const SELECTABLE_SET: &[&str] = &["（選択）", "（選）", "選択", "選", "c", "choice", " choice"];

fn owned(set: &[&str]) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}

fn with_selectable(set: &[&str]) -> Vec<String> {
    set.iter()
        .flat_map(|base| SELECTABLE_SET.iter().map(move |sel| format!("{base}{sel}")))
        .collect()
}

static TARGET_TABLE: LazyLock<Vec<(Kind, Vec<String>)>> = LazyLock::new(|| {
    vec![
        (Kind::Myself, owned(MYSELF_SET)),
        (Kind::Single, owned(SINGLE_SET)),
        (
            Kind::ForceSingle,
            SINGLE_SET.iter().map(|s| format!("{s}※")).collect(),
        ),
        (Kind::Engage, owned(ENGAGE_SET)),
        (Kind::EngageSelectable, with_selectable(ENGAGE_SET)),
        (Kind::Field, owned(FIELD_SET)),
        (Kind::FieldSelectable, with_selectable(FIELD_SET)),
        (Kind::Line, owned(LINE_SET)),
        (Kind::LineSelectable, with_selectable(LINE_SET)),
        (Kind::Cross, owned(CROSS_SET)),
        (Kind::CrossSelectable, with_selectable(CROSS_SET)),
    ]
});

impl Kind {
    fn into_target(self) -> Target {
        match self {
            Kind::Myself => Target::Myself,
            Kind::Single => Target::Single,
            Kind::ForceSingle => Target::ForceSingle,
            Kind::Engage => Target::Engage,
            Kind::EngageSelectable => Target::EngageSelectable,
            Kind::Field => Target::Field,
            Kind::FieldSelectable => Target::FieldSelectable,
            Kind::Line => Target::Line,
            Kind::LineSelectable => Target::LineSelectable,
            Kind::Cross => Target::Cross,
            Kind::CrossSelectable => Target::CrossSelectable,
        }
    }
}

// Kanji numerals seen in target counts, formal spellings included.
// The counter suffix "体" is dropped during transliteration.
const KANJI_DIGITS: &str = "〇一二三四五六七八九零壱弐参";
const ASCII_DIGITS: &[u8] = b"01234567890123";

fn transliterate_kanji_digits(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '体')
        .map(|c| {
            KANJI_DIGITS
                .chars()
                .position(|k| k == c)
                .map(|i| ASCII_DIGITS[i] as char)
                .unwrap_or(c)
        })
        .collect()
}

impl Target {
    /// Parse the target field. Never fails: the last fallback wraps the
    /// input verbatim.
    pub fn from_text(text: &str) -> Target {
        if let Some(kind) = classify(text, TARGET_TABLE.as_slice()) {
            return kind.into_target();
        }
        let transliterated = transliterate_kanji_digits(text);
        if let Ok(n) = normalize::fold(&transliterated).parse::<u32>() {
            if n >= 2 {
                return Target::Multiple(n);
            }
        }
        if normalize::compare(text, "SL") {
            return Target::LevelMultiple;
        }
        Target::Text(text.to_string())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Myself => write!(f, "自身"),
            Target::Single => write!(f, "単体"),
            Target::ForceSingle => write!(f, "単体※"),
            Target::Multiple(n) => write!(f, "{}体", normalize::widen_digits(&n.to_string())),
            Target::LevelMultiple => write!(f, "ＳＬ体"),
            Target::Engage => write!(f, "範囲"),
            Target::EngageSelectable => write!(f, "範囲（選択）"),
            Target::Field => write!(f, "場面"),
            Target::FieldSelectable => write!(f, "場面（選択）"),
            Target::Line => write!(f, "直線"),
            Target::LineSelectable => write!(f, "直線（選択）"),
            Target::Cross => write!(f, "十字"),
            Target::CrossSelectable => write!(f, "十字（選択）"),
            Target::Text(s) => write!(f, "{}", s),
        }
    }
}
