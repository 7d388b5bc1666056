//! Ordered alias-table lookup shared by every field parser

use crate::normalize;

/// Look up `text` in an ordered alias table, returning the first tag with an
/// alias equal to `text` under width- and case-insensitive comparison.
///
/// Tags are iterated in table order, so when a surface string appears under
/// two tags the earlier tag wins. Returns `None` when nothing matches;
/// callers apply their own fallback (numeric parse, free-text wrap, or a
/// default kind).
pub fn classify<T, A, S>(text: &str, table: &[(T, A)]) -> Option<T>
where
    T: Copy,
    A: AsRef<[S]>,
    S: AsRef<str>,
{
    for (tag, aliases) in table {
        for alias in aliases.as_ref() {
            if normalize::compare(text, alias.as_ref()) {
                return Some(*tag);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Pear,
    }

    static TABLE: &[(Fruit, &[&str])] = &[
        (Fruit::Apple, &["りんご", "apple"]),
        (Fruit::Pear, &["なし", "pear", "apple"]),
    ];

    #[test]
    fn test_classify_matches_fold_insensitive() {
        assert_eq!(classify("ＡＰＰＬＥ", TABLE), Some(Fruit::Apple));
        assert_eq!(classify("pear", TABLE), Some(Fruit::Pear));
    }

    #[test]
    fn test_classify_first_tag_wins_on_collision() {
        assert_eq!(classify("apple", TABLE), Some(Fruit::Apple));
    }

    #[test]
    fn test_classify_none_on_miss() {
        assert_eq!(classify("banana", TABLE), None);
    }
}
