//! Sheet extractor: locate the skill table inside a full sheet export
//!
//! A pasted export usually contains the whole character sheet. The skill
//! table sits between fixed section headers; everything outside the span
//! is ignored, and inside it every line runs through the line extractor.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::normalize;
use crate::parser::{escape_known_slashes, parse_line};
use crate::skill::Skill;

static AREA_BEGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^■スキル■[ \t　]*$").unwrap());
static AREA_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^■コネクション■[ \t　]*$").unwrap());

/// Extract all skills from a sheet, in input order.
pub fn extract_skills(sheet: &str) -> Vec<Skill> {
    let begin = AREA_BEGIN_RE.find(sheet).map(|m| m.end()).unwrap_or(0);
    let end = AREA_END_RE
        .find(sheet)
        .map(|m| m.start())
        .filter(|&end| end >= begin)
        .unwrap_or(sheet.len());
    let area = &sheet[begin..end];

    let escaped = escape_known_slashes(area);
    let folded = normalize::widen_kana(&escaped);
    folded.lines().filter_map(parse_line).collect()
}

/// Read a sheet file and extract all skills from it.
pub fn extract_skills_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Skill>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(extract_skills(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::judge::Judge;
    use crate::skill_range::SkillRange;
    use crate::target::Target;

    const SHEET: &str = "\
キャラクター名：アリア
■スキル■
《スキル名》ＳＬ/タイミング/判定/対象/射程/コスト/制限/効果
《ゲイルスラッシュ》3/メジャー/自動/自/ー/15/シーンSL回/ワイドアタックによる攻撃を行なう。
《インファイト》1/常時/なし/自/ー/0//至近の対象への命中判定に＋1Ｄ。
ここはただのメモ行です。
《フェザーステップ》7/ムーブ/自動/自/ー/5/1/シーン/通常移動の代わりに使用する。
■コネクション■
《これは拾わない》1/メジャー/自動/自/ー/0//効果。
";

    #[test]
    fn test_extracts_in_input_order() {
        let skills = extract_skills(SHEET);
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ゲイルスラッシュ", "インファイト", "フェザーステップ"]
        );
    }

    #[test]
    fn test_header_and_prose_lines_skipped() {
        let skills = extract_skills(SHEET);
        assert!(skills.iter().all(|s| s.name != "スキル名"));
    }

    #[test]
    fn test_section_end_marker_respected() {
        let skills = extract_skills(SHEET);
        assert!(skills.iter().all(|s| s.name != "これは拾わない"));
    }

    #[test]
    fn test_end_to_end_gale_slash() {
        let skills = extract_skills(SHEET);
        let skill = &skills[0];
        assert_eq!(skill.level, 3);
        assert_eq!(skill.timing, "メジャーアクション");
        assert_eq!(skill.judge, Judge::AutoSuccess);
        assert_eq!(skill.target, Target::Myself);
        assert_eq!(skill.skill_range, SkillRange::Nothing);
        assert_eq!(skill.cost, Cost::Numeric(15));
        assert_eq!(skill.usage_limitation, Some("シーン3回".to_string()));
        assert!(skill.effect.ends_with('。'));
    }

    #[test]
    fn test_remap_and_escaped_limitation() {
        let skills = extract_skills(SHEET);
        let skill = &skills[2];
        assert_eq!(skill.level, 2);
        assert_eq!(skill.usage_limitation, Some("シーン1回".to_string()));
    }

    #[test]
    fn test_whole_document_without_markers() {
        let skills =
            extract_skills("《テスト》1/メジャー/自動/自/ー/0//効果。\nその他の行。");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "テスト");
    }

    #[test]
    fn test_half_width_kana_folded_before_parsing() {
        let skills = extract_skills("《テスト》1/ﾒｼﾞｬｰ/自動/自/ー/0//効果。");
        assert_eq!(skills[0].timing, "メジャーアクション");
    }

    #[test]
    fn test_empty_sheet() {
        assert!(extract_skills("").is_empty());
    }
}
