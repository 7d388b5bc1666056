//! Width and case normalization for informal sheet notation
//!
//! Sheet exports mix full-width and half-width spellings freely ("ＨＩＴ",
//! "hit", "ｈｔ" all mean the same judge). Comparisons run on a folded form;
//! the folded form is never shown to the user.

use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: NFKC compatibility normalization (full-width
/// ASCII/digits to half-width, half-width katakana to full-width) plus
/// lowercasing. Comparison use only, never for display.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Compare two strings ignoring width and case differences.
pub fn compare(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Convert ASCII digits to full-width digits (display direction).
pub fn widen_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32('０' as u32 + (c as u32 - '0' as u32)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

const HALF_KANA: &str = "ｦｧｨｩｪｫｬｭｮｯｰｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ｡｢｣､･";
const FULL_KANA: &str = "ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン。「」、・";

fn widen_kana_char(c: char) -> Option<char> {
    HALF_KANA
        .chars()
        .position(|h| h == c)
        .and_then(|i| FULL_KANA.chars().nth(i))
}

fn voiced(c: char) -> Option<char> {
    match c {
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ' | 'タ' | 'チ'
        | 'ツ' | 'テ' | 'ト' | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 1),
        'ウ' => Some('ヴ'),
        _ => None,
    }
}

fn semi_voiced(c: char) -> Option<char> {
    match c {
        'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 2),
        _ => None,
    }
}

/// Convert half-width katakana to full-width, combining voiced and
/// semi-voiced sound marks. Digits and ASCII are left untouched, unlike
/// [`fold`], so this is safe to run over a whole sheet before parsing.
pub fn widen_kana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(base) = widen_kana_char(c) else {
            out.push(c);
            continue;
        };
        match chars.peek() {
            Some('ﾞ') => {
                if let Some(v) = voiced(base) {
                    out.push(v);
                    chars.next();
                } else {
                    out.push(base);
                }
            }
            Some('ﾟ') => {
                if let Some(v) = semi_voiced(base) {
                    out.push(v);
                    chars.next();
                } else {
                    out.push(base);
                }
            }
            _ => out.push(base),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_full_width_ascii() {
        assert_eq!(fold("ＨＩＴ"), "hit");
        assert_eq!(fold("１５"), "15");
        assert_eq!(fold("Fate"), "fate");
    }

    #[test]
    fn test_fold_keeps_kana_and_kanji() {
        assert_eq!(fold("命中"), "命中");
        assert_eq!(fold("シーン"), "シーン");
    }

    #[test]
    fn test_compare_mixed_width() {
        assert!(compare("ＨＩＴ", "hit"));
        assert!(compare("ｈｔ", "HT"));
        assert!(compare("エンゲージ", "ｴﾝｹﾞｰｼﾞ"));
        assert!(!compare("命中", "魔術"));
    }

    #[test]
    fn test_widen_digits() {
        assert_eq!(widen_digits("3体"), "３体");
        assert_eq!(widen_digits("15"), "１５");
        assert_eq!(widen_digits("シーン"), "シーン");
    }

    #[test]
    fn test_widen_kana_basic() {
        assert_eq!(widen_kana("ｼｰﾝ"), "シーン");
        assert_eq!(widen_kana("ﾒｼﾞｬｰ"), "メジャー");
    }

    #[test]
    fn test_widen_kana_voiced_marks() {
        assert_eq!(widen_kana("ｴﾝｹﾞｰｼﾞ"), "エンゲージ");
        assert_eq!(widen_kana("ﾊﾟﾆｯｸ"), "パニック");
        assert_eq!(widen_kana("ｳﾞ"), "ヴ");
    }

    #[test]
    fn test_widen_kana_leaves_ascii_and_digits() {
        assert_eq!(widen_kana("SL3回 2d6"), "SL3回 2d6");
        assert_eq!(widen_kana("１５"), "１５");
    }
}
