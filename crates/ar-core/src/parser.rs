//! Line extractor: one sheet line to one skill record
//!
//! A skill line is a bracketed name followed by eight slash-delimited
//! fields. Anything that does not match the grammar in full is not a skill
//! and is silently skipped; the surrounding document is full of prose and
//! header lines, so a mismatch is expected, not an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::cost::Cost;
use crate::effect::split_effect;
use crate::judge::Judge;
use crate::normalize;
use crate::skill::Skill;
use crate::skill_range::SkillRange;
use crate::target::Target;
use crate::timing::unify_timing;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^《([^》/]+)》\s*([^\s/]+)\s*/\s*([^/]*?)\s*/\s*([^/]*?)\s*/\s*([^/]*?)\s*/\s*([^/]*?)\s*/\s*([^/]*?)\s*/\s*([^/]*?)\s*/\s*(.*)$",
    )
    .unwrap()
});

// Column-header rows in common sheet exports carry these in the name slot.
const PLACEHOLDER_NAMES: &[&str] = &["スキル名", "特技名"];

// A literal slash inside a field ("1/シーン") would be misread as a field
// delimiter. Known count/keyword idioms get their slash swapped for a
// private-use sentinel before line splitting; the keyword must be followed
// by whitespace, a real delimiter, or the end of the text, so a cost field
// in front of a limitation like "シーンSL回" is left alone.
const ESCAPED_SLASH: char = '\u{f8ff}';

static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9０-９]+|[SsＳｓ][LlＬｌ])/(シーン|ラウンド|シナリオ|セッション|[RrＲｒ])([\s/]|$)")
        .unwrap()
});

/// Protect literal slashes in known count/keyword idioms. Applied to the
/// whole sheet before line splitting.
pub fn escape_known_slashes(text: &str) -> String {
    ESCAPE_RE
        .replace_all(text, "${1}\u{f8ff}${2}${3}")
        .into_owned()
}

/// Reverse [`escape_known_slashes`]. Applied exactly once per extracted
/// field.
pub fn unescape_slashes(text: &str) -> String {
    text.replace(ESCAPED_SLASH, "/")
}

fn is_excluded_name(name: &str) -> bool {
    if PLACEHOLDER_NAMES.iter().any(|p| normalize::compare(name, p)) {
        return true;
    }
    let mut chars = name.chars();
    matches!((chars.next(), chars.next_back()), (Some('■'), Some('■')))
}

fn parse_level(token: &str) -> u32 {
    let raw = normalize::fold(token).parse::<u32>().unwrap_or(1);
    // Alternate sheet notation encodes levels 2..=4 as 7..=9. Opaque
    // compatibility rule, kept as observed.
    if (7..=9).contains(&raw) {
        raw - 5
    } else {
        raw
    }
}

static LIMIT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)([0-9０-９]+|[SsＳｓ][LlＬｌ])回?$").unwrap());

fn unify_count(token: &str, level: u32) -> String {
    if normalize::compare(token, "SL") {
        return level.to_string();
    }
    let folded = normalize::fold(token);
    if !folded.is_empty() && folded.chars().all(|c| c.is_ascii_digit()) {
        folded
    } else {
        token.to_string()
    }
}

fn unify_limitation_token(token: &str, level: u32) -> String {
    if let Some((count, keyword)) = token.split_once('/') {
        return format!("{}{}回", unify_timing(keyword), unify_count(count, level));
    }
    if let Some(caps) = LIMIT_TOKEN_RE.captures(token) {
        let keyword = &caps[1];
        let count = unify_count(&caps[2], level);
        let keyword = if keyword.is_empty() {
            String::new()
        } else {
            unify_timing(keyword)
        };
        return format!("{}{}回", keyword, count);
    }
    token.to_string()
}

const NO_LIMITATION_SET: &[&str] = &["-", "ー", "無", "なし", "無し"];

/// Normalize the limitation field. A purely numeric field is actually a
/// level-above threshold and leaves the limitation empty.
fn parse_limitation(text: &str, level: u32) -> (Option<String>, Option<u32>) {
    let folded = normalize::fold(text);
    if !folded.is_empty() && folded.chars().all(|c| c.is_ascii_digit()) {
        return (None, folded.parse().ok());
    }
    let mut parts = Vec::new();
    for chunk in text.split_whitespace() {
        for token in chunk.split(['、', ',']) {
            if token.is_empty()
                || NO_LIMITATION_SET.iter().any(|m| normalize::compare(token, m))
            {
                continue;
            }
            parts.push(unify_limitation_token(token, level));
        }
    }
    if parts.is_empty() {
        (None, None)
    } else {
        (Some(parts.join("・")), None)
    }
}

/// Apply the line grammar and assemble a skill record. `None` when the
/// line is not a skill.
pub fn parse_line(line: &str) -> Option<Skill> {
    let caps = LINE_RE.captures(line)?;
    let name = &caps[1];
    if is_excluded_name(name) {
        return None;
    }
    let level = parse_level(&caps[2]);
    let timing = unify_timing(&caps[3]);
    let (judge, difficulty) = Judge::from_text(&caps[4]);
    let target = Target::from_text(&caps[5]);
    let skill_range = SkillRange::from_text(&caps[6]);
    let cost = Cost::from_text(&caps[7]);
    let limitation_field = unescape_slashes(&caps[8]);
    let (usage_limitation, level_above) = parse_limitation(&limitation_field, level);
    let effect_field = unescape_slashes(&caps[9]);
    let split = split_effect(&effect_field);
    Some(Skill {
        name: name.to_string(),
        level,
        timing,
        judge,
        difficulty,
        target,
        skill_range,
        cost,
        usage_limitation,
        classifier: split.classifier,
        effect: split.body,
        critical: split.critical,
        flavor: split.flavor,
        level_above,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::Judge;

    #[test]
    fn test_full_line() {
        let skill = parse_line(
            "《ゲイルスラッシュ》3/メジャー/自動/自/ー/15/シーンSL回/ワイドアタックによる攻撃を行なう。",
        )
        .unwrap();
        assert_eq!(skill.name, "ゲイルスラッシュ");
        assert_eq!(skill.level, 3);
        assert_eq!(skill.timing, "メジャーアクション");
        assert_eq!(skill.judge, Judge::AutoSuccess);
        assert_eq!(skill.target, Target::Myself);
        assert_eq!(skill.skill_range, SkillRange::Nothing);
        assert_eq!(skill.cost, Cost::Numeric(15));
        assert_eq!(skill.usage_limitation, Some("シーン3回".to_string()));
        assert!(skill.effect.ends_with('。'));
        assert_eq!(skill.level_above, None);
    }

    #[test]
    fn test_prose_line_is_not_a_skill() {
        assert!(parse_line("ただの説明文です。").is_none());
        assert!(parse_line("■スキル■").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_placeholder_names_excluded() {
        assert!(parse_line("《スキル名》SL/タイミング/判定/対象/射程/コスト/制限/効果").is_none());
        assert!(parse_line("《■一般スキル■》1/メジャー/自動/自/ー/0//攻撃。").is_none());
    }

    #[test]
    fn test_level_default_and_remap() {
        let sl = |token: &str| {
            parse_line(&format!("《テスト》{token}/メジャー/自動/自/ー/0//効果。"))
                .unwrap()
                .level
        };
        assert_eq!(sl("8"), 3);
        assert_eq!(sl("7"), 2);
        assert_eq!(sl("9"), 4);
        assert_eq!(sl("6"), 6);
        assert_eq!(sl("３"), 3);
        assert_eq!(sl("SL"), 1);
    }

    #[test]
    fn test_numeric_limitation_is_level_above() {
        let skill =
            parse_line("《テスト》1/メジャー/自動/自/ー/0/3/効果。").unwrap();
        assert_eq!(skill.level_above, Some(3));
        assert_eq!(skill.usage_limitation, None);
        assert_eq!(skill.limitation_display(), "なし");
    }

    #[test]
    fn test_limitation_count_keyword_idiom() {
        let escaped = escape_known_slashes("《テスト》1/メジャー/自動/自/ー/0/1/シーン/効果。");
        let skill = parse_line(&escaped).unwrap();
        assert_eq!(skill.usage_limitation, Some("シーン1回".to_string()));
    }

    #[test]
    fn test_limitation_multiple_tokens() {
        let skill = parse_line("《テスト》1/メジャー/自動/自/ー/0/シーン1回、ラウンド1回/効果。")
            .unwrap();
        assert_eq!(
            skill.usage_limitation,
            Some("シーン1回・ラウンド1回".to_string())
        );
    }

    #[test]
    fn test_limitation_sl_count_uses_level() {
        let skill =
            parse_line("《テスト》2/メジャー/自動/自/ー/0/シナリオＳＬ回/効果。").unwrap();
        assert_eq!(skill.usage_limitation, Some("シナリオ2回".to_string()));
    }

    #[test]
    fn test_no_limitation_markers() {
        let skill = parse_line("《テスト》1/メジャー/自動/自/ー/0/なし/効果。").unwrap();
        assert_eq!(skill.usage_limitation, None);
        let skill = parse_line("《テスト》1/メジャー/自動/自/ー/0/ー/効果。").unwrap();
        assert_eq!(skill.usage_limitation, None);
    }

    #[test]
    fn test_empty_limitation_is_none() {
        let skill = parse_line("《テスト》1/メジャー/自動/自/ー/0//効果。").unwrap();
        assert_eq!(skill.usage_limitation, None);
        assert_eq!(skill.level_above, None);
    }

    #[test]
    fn test_fields_tolerate_surrounding_whitespace() {
        let skill = parse_line(
            "《テスト》 1 / メジャー / 命中 / 単体 / 武器 / 5 / シーン1回 /対象を攻撃する。",
        )
        .unwrap();
        assert_eq!(skill.timing, "メジャーアクション");
        assert_eq!(skill.judge, Judge::Hit);
        assert_eq!(skill.target, Target::Single);
        assert_eq!(skill.skill_range, SkillRange::Weapon);
        assert_eq!(skill.cost, Cost::Numeric(5));
    }

    #[test]
    fn test_escape_protects_field_internal_idiom() {
        let escaped = escape_known_slashes("1/シーン");
        assert!(!escaped.contains('/'));
        assert_eq!(unescape_slashes(&escaped), "1/シーン");
    }

    #[test]
    fn test_escape_leaves_field_delimiters_alone() {
        // A cost field followed by a limitation field starting with a
        // keyword must keep its real delimiter.
        let line = "《テスト》1/メジャー/自動/自/ー/15/シーンSL回/効果。";
        assert_eq!(escape_known_slashes(line), line);
    }

    #[test]
    fn test_escape_round_trip_inside_effect() {
        let line = "《テスト》1/メジャー/自動/自/ー/0//この効果は1/シーン まで使用できる";
        let skill = parse_line(&escape_known_slashes(line)).unwrap();
        assert!(skill.effect.contains("1/シーン"));
    }
}
