//! Timing keywords and their informal spellings
//!
//! The same table serves the timing field itself and the recurrence
//! keywords inside usage-limitation tokens ("1/シーン" and friends).

use crate::alias::classify;

static TIMING_TABLE: &[(&str, &[&str])] = &[
    ("メジャーアクション", &["メジャーアクション", "メジャー", "major", "mj"]),
    ("マイナーアクション", &["マイナーアクション", "マイナー", "minor", "mn"]),
    ("ムーブアクション", &["ムーブアクション", "ムーブ", "move", "mv"]),
    ("リアクション", &["リアクション", "リア", "reaction", "re"]),
    ("セットアップ", &["セットアップ", "セット", "setup", "su"]),
    ("イニシアチブ", &["イニシアチブ", "イニシア", "initiative", "ini"]),
    ("クリンナップ", &["クリンナップ", "クリン", "cleanup", "cu"]),
    ("オート", &["オート", "常時", "常", "auto", "passive"]),
    ("シーン", &["シーン", "場面", "scene", "sc"]),
    ("ラウンド", &["ラウンド", "round", "r"]),
    ("シナリオ", &["シナリオ", "scenario"]),
    ("セッション", &["セッション", "session"]),
];

/// Expand an informal timing spelling to its canonical keyword.
/// Unrecognized text passes through verbatim.
pub fn unify_timing(text: &str) -> String {
    classify(text, TIMING_TABLE)
        .map(str::to_string)
        .unwrap_or_else(|| text.to_string())
}
