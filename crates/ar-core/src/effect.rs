//! Effect field splitter and text beautification
//!
//! The effect field is a grab bag: an optional leading school annotation,
//! the effect body, an optional critical-effect clause, and an optional
//! flavor-text clause, all in one free-text run. The splitter peels the
//! optional parts off and cleans up the remaining body.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::alias::classify;
use crate::classifier::Classifier;

/// Result of decomposing one effect field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEffect {
    pub classifier: Option<Classifier>,
    pub body: String,
    pub critical: Option<String>,
    pub flavor: Option<String>,
}

// Critical clause: an abbreviation of "critical", a separator, then text
// up to the next sentence terminator.
static CRITICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:クリティカル|クリ|(?i:critical|crit))[：:][ 　]*([^。]*)。?").unwrap()
});

// Flavor clause: an abbreviation of "flavor" plus separator, or a literal
// "##" marker, capturing to the end of the text.
static FLAVOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:フレーバー|フレーバ|(?i:flavou?r|flv))[：:][ 　]*|[#＃][#＃][ 　]*)(.*)$")
        .unwrap()
});

// Canonical critical-effect labels and their informal spellings.
static CRITICAL_TABLE: &[(&str, &[&str])] = &[
    ("効果なし", &["なし", "無し", "無", "-", "ー"]),
    ("ダメージ２倍", &["2倍", "２倍", "ダメージ2倍", "倍加"]),
];

// Applied to the body in this exact order, each a plain substring replace.
// Later entries rely on earlier ones (the dice-letter unification feeds
// the SLＤ bracketing), and no replacement output re-triggers another, so
// the whole list is idempotent.
const EFFECT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("d", "Ｄ"),
    ("ｄ", "Ｄ"),
    ("D", "Ｄ"),
    ("SLＤ", "（ＳＬ）Ｄ"),
    ("ＳＬＤ", "（ＳＬ）Ｄ"),
    ("major", "メジャー"),
    ("minor", "マイナー"),
    ("メイン終了まで", "メインプロセスの終了時まで効果が持続する。"),
    ("ラウンド終了まで", "そのラウンドの終了時まで効果が持続する。"),
    ("Ｒ終了まで", "そのラウンドの終了時まで効果が持続する。"),
    ("シーン終了まで", "そのシーンの終了時まで効果が持続する。"),
    ("シナリオ終了まで", "そのシナリオの終了時まで効果が持続する。"),
    ("行う", "行なう"),
    ("おこなう", "行なう"),
    ("ＤＲ直後", "ダメージロールの直後"),
    ("ＤＲ直前", "ダメージロールの直前"),
    ("ＤＲ後", "ダメージロールの直後"),
    ("ＤＲ前", "ダメージロールの直前"),
];

// Readability spacing around decorated skill-name tokens.
static SPACE_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\s、。，．！？（「『【〈［》])(《[^》]+》)").unwrap()
});
static SPACE_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(《[^》]+》)([^\s、。，．！？）」』】〉］《])").unwrap()
});

/// Apply the beautification passes to an effect body: the literal
/// substitution table, spacing around 《スキル名》 tokens, and a trailing
/// sentence terminator. Idempotent.
pub fn unify_effect(text: &str) -> String {
    let mut body = text.to_string();
    for (from, to) in EFFECT_SUBSTITUTIONS {
        body = body.replace(from, to);
    }
    loop {
        let spaced = SPACE_BEFORE_RE.replace_all(&body, "$1 $2").into_owned();
        let spaced = SPACE_AFTER_RE.replace_all(&spaced, "$1 $2").into_owned();
        if spaced == body {
            break;
        }
        body = spaced;
    }
    if !body.is_empty() && !body.ends_with(['。', '！', '？']) {
        body.push('。');
    }
    body
}

fn normalize_critical(text: &str) -> String {
    classify(text, CRITICAL_TABLE)
        .map(str::to_string)
        .unwrap_or_else(|| text.to_string())
}

/// Decompose one effect field into its classifier annotation, cleaned-up
/// body, critical-effect text, and flavor text.
pub fn split_effect(text: &str) -> SplitEffect {
    let mut body = text.to_string();

    let mut classifier = None;
    if let Some(pos) = body.find('。') {
        if let Some(c) = Classifier::from_text(&body[..pos]) {
            classifier = Some(c);
            body = body[pos + '。'.len_utf8()..].to_string();
        }
    }

    let mut critical = None;
    if let Some(caps) = CRITICAL_RE.captures(&body) {
        let captured = caps[1].trim().to_string();
        let clause = caps.get(0).unwrap().range();
        if !captured.is_empty() {
            critical = Some(normalize_critical(&captured));
        }
        body.replace_range(clause, "");
    }

    let mut flavor = None;
    if let Some(caps) = FLAVOR_RE.captures(&body) {
        let captured = caps[1].trim().to_string();
        if !captured.is_empty() {
            flavor = Some(captured);
        }
        let start = caps.get(0).unwrap().start();
        body.truncate(start);
    }

    SplitEffect {
        classifier,
        body: unify_effect(&body),
        critical,
        flavor,
    }
}
