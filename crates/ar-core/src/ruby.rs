//! Ruby (gloss) annotations in skill names
//!
//! Sheet names carry glosses in the pipe notation, "｜魔剣《アロンダイト》",
//! or as a plain trailing bracket, "魔剣（まけん）". Both forms parse into
//! base/ruby segments that render either as plain text or as HTML `<ruby>`
//! markup.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static RUBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[|｜])(?P<base>[^|｜]+)(?P<top>《[^》]+》|\([^)]+\)|（[^）]+）)").unwrap()
});

/// A name split into segments, each with an optional ruby gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubyString {
    segments: Vec<(String, Option<String>)>,
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl RubyString {
    /// Parse ruby annotations out of a name.
    pub fn from_text(text: &str) -> RubyString {
        let mut segments = Vec::new();
        let mut last_pos = 0;
        for caps in RUBY_RE.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            if whole.start() > last_pos {
                segments.push((text[last_pos..whole.start()].to_string(), None));
            }
            let base = caps.name("base").unwrap().as_str();
            let top = caps.name("top").unwrap().as_str();
            // The ruby text sits between one-glyph brackets on both ends.
            let ruby: String = {
                let mut chars = top.chars();
                chars.next();
                chars.next_back();
                chars.collect()
            };
            segments.push((base.to_string(), Some(ruby)));
            last_pos = whole.end();
        }
        if last_pos < text.len() {
            segments.push((text[last_pos..].to_string(), None));
        }
        RubyString { segments }
    }

    /// The base text with all glosses removed.
    pub fn base(&self) -> String {
        self.segments.iter().map(|(base, _)| base.as_str()).collect()
    }

    /// Render as HTML, glossed segments as `<ruby>` markup. All content is
    /// escaped.
    pub fn as_html(&self) -> String {
        let mut out = String::new();
        for (base, ruby) in &self.segments {
            match ruby {
                None => out.push_str(&escape_html(base)),
                Some(ruby) => {
                    out.push_str("<ruby>");
                    out.push_str(&escape_html(base));
                    out.push_str("<rp>（</rp><rt>");
                    out.push_str(&escape_html(ruby));
                    out.push_str("</rt><rp>）</rp></ruby>");
                }
            }
        }
        out
    }
}

impl fmt::Display for RubyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (base, ruby) in &self.segments {
            match ruby {
                None => write!(f, "{}", base)?,
                Some(ruby) => write!(f, "{}（{}）", base, ruby)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let name = RubyString::from_text("ゲイルスラッシュ");
        assert_eq!(name.base(), "ゲイルスラッシュ");
        assert_eq!(name.to_string(), "ゲイルスラッシュ");
        assert_eq!(name.as_html(), "ゲイルスラッシュ");
    }

    #[test]
    fn test_pipe_notation() {
        let name = RubyString::from_text("｜魔剣《アロンダイト》");
        assert_eq!(name.base(), "魔剣");
        assert_eq!(name.to_string(), "魔剣（アロンダイト）");
        assert_eq!(
            name.as_html(),
            "<ruby>魔剣<rp>（</rp><rt>アロンダイト</rt><rp>）</rp></ruby>"
        );
    }

    #[test]
    fn test_bracket_notation() {
        let name = RubyString::from_text("縮地（しゅくち）");
        assert_eq!(name.base(), "縮地");
        assert_eq!(name.to_string(), "縮地（しゅくち）");
    }

    #[test]
    fn test_mixed_segments() {
        let name = RubyString::from_text("二刀流｜奥義《おうぎ》改");
        assert_eq!(name.base(), "二刀流奥義改");
        assert!(name.as_html().contains("<rt>おうぎ</rt>"));
        assert!(name.as_html().starts_with("二刀流<ruby>"));
        assert!(name.as_html().ends_with("</ruby>改"));
    }

    #[test]
    fn test_html_is_escaped() {
        let name = RubyString::from_text("a<b（ルビ）");
        assert!(name.as_html().contains("&lt;"));
    }
}
