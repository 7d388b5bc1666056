//! Printable HTML card renderer
//!
//! A thin, mechanical consumer of the extraction pipeline: one card per
//! skill, stylesheet embedded so the output is a single self-contained
//! file.

use ar_core::{RubyString, Skill};
use chrono::Local;
use std::fmt::Write;

/// Rendering switches set from the command line
pub struct RenderOptions {
    /// Shrink cards to sleeved-card size
    pub sleeve: bool,
    /// Enlarge skill names
    pub large_name: bool,
}

const MAIN_CSS: &str = include_str!("../assets/main.css");

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn judge_label(skill: &Skill) -> String {
    match skill.difficulty {
        Some(d) => format!("{}（難易度{}）", skill.judge.display(false), d),
        None => skill.judge.display(false),
    }
}

// The fate consumption sentence lives in the effect text; the cost slot
// shows a dash for fate costs.
fn effect_text(skill: &Skill) -> String {
    format!("{}{}", skill.cost.as_effect_text(), skill.effect)
}

fn push_card(doc: &mut String, skill: &Skill) {
    doc.push_str("    <div class=\"card-outline-box\">\n");
    doc.push_str("      <div class=\"card-title-box\">\n");
    if let Some(classifier) = &skill.classifier {
        let _ = writeln!(
            doc,
            "        <h3 class=\"skill-class\">{}</h3>",
            escape_html(&classifier.to_string())
        );
    }
    let _ = writeln!(
        doc,
        "        <h2 class=\"skill-name\">{}</h2>",
        RubyString::from_text(&skill.name).as_html()
    );
    let _ = writeln!(
        doc,
        "        <p class=\"skill-level\">ＳＬ：{}</p>",
        skill.level
    );
    doc.push_str("      </div>\n");
    doc.push_str("      <div class=\"card-main-box\">\n");
    let _ = writeln!(
        doc,
        "        <p class=\"timing\">{}</p>",
        escape_html(&skill.timing)
    );
    doc.push_str("        <div class=\"inner-horizontal-box\">\n");
    let _ = writeln!(
        doc,
        "          <p class=\"judge\">{}</p>",
        escape_html(&judge_label(skill))
    );
    let _ = writeln!(
        doc,
        "          <p class=\"target\">{}</p>",
        escape_html(&skill.target.to_string())
    );
    doc.push_str("        </div>\n");
    doc.push_str("        <div class=\"inner-horizontal-box\">\n");
    let _ = writeln!(
        doc,
        "          <p class=\"effect-range\">{}</p>",
        escape_html(&skill.skill_range.to_string())
    );
    let _ = writeln!(
        doc,
        "          <p class=\"skill-cost\">{}</p>",
        escape_html(&skill.cost.to_string())
    );
    doc.push_str("        </div>\n");
    if let Some(level_above) = skill.level_above {
        let _ = writeln!(
            doc,
            "        <p class=\"skill-level-bound\">ＬＶ{}以上</p>",
            level_above
        );
    }
    let _ = writeln!(
        doc,
        "        <p class=\"limitation\">{}</p>",
        escape_html(skill.limitation_display())
    );
    let _ = writeln!(
        doc,
        "        <p class=\"effect\">{}</p>",
        escape_html(&effect_text(skill))
    );
    if let Some(critical) = &skill.critical {
        let _ = writeln!(
            doc,
            "        <p class=\"critical\">クリティカル：{}</p>",
            escape_html(critical)
        );
    }
    if let Some(flavor) = &skill.flavor {
        let _ = writeln!(
            doc,
            "        <p class=\"flavor\">{}</p>",
            escape_html(flavor)
        );
    }
    doc.push_str("      </div>\n");
    doc.push_str("    </div>\n");
}

/// Render all skills as one printable HTML page.
pub fn generate_html(skills: &[Skill], options: &RenderOptions) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(
        doc,
        "<!-- generated {} -->",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    doc.push_str("<html>\n<head>\n");
    doc.push_str("  <meta charset=\"utf-8\">\n");
    doc.push_str("  <title>Arianrhod Skill Cards</title>\n");
    doc.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    doc.push_str("  <style>\n");
    doc.push_str(MAIN_CSS);
    doc.push_str("  </style>\n");
    doc.push_str("</head>\n");
    let mut body_classes = Vec::new();
    if options.sleeve {
        body_classes.push("sleeve");
    }
    if options.large_name {
        body_classes.push("large-name");
    }
    if body_classes.is_empty() {
        doc.push_str("<body>\n");
    } else {
        let _ = writeln!(doc, "<body class=\"{}\">", body_classes.join(" "));
    }
    doc.push_str("  <div class=\"cards-container\">\n");
    for skill in skills {
        push_card(&mut doc, skill);
    }
    doc.push_str("  </div>\n");
    doc.push_str("</body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::parse_line;

    fn sample_skill() -> Skill {
        parse_line(
            "《ゲイルスラッシュ》3/メジャー/自動/自/ー/15/シーンSL回/《ワイドアタック》による攻撃を行なう。",
        )
        .unwrap()
    }

    fn default_options() -> RenderOptions {
        RenderOptions {
            sleeve: false,
            large_name: false,
        }
    }

    #[test]
    fn test_card_markup() {
        let page = generate_html(&[sample_skill()], &default_options());
        assert!(page.contains("class=\"card-outline-box\""));
        assert!(page.contains("ゲイルスラッシュ"));
        assert!(page.contains("<p class=\"timing\">メジャーアクション</p>"));
        assert!(page.contains("<p class=\"judge\">自動成功</p>"));
        assert!(page.contains("<p class=\"limitation\">シーン3回</p>"));
        assert!(page.contains("<p class=\"skill-cost\">15</p>"));
    }

    #[test]
    fn test_fate_cost_renders_dash_and_sentence() {
        let skill =
            parse_line("《連撃》1/メジャー/命中/単体/武器/fate2//二回攻撃を行なう。").unwrap();
        let page = generate_html(&[skill], &default_options());
        assert!(page.contains("<p class=\"skill-cost\">ー</p>"));
        assert!(page.contains("フェイトを2点消費。"));
    }

    #[test]
    fn test_ruby_name_renders_ruby_markup() {
        let skill =
            parse_line("《魔剣（アロンダイト）》1/メジャー/命中/単体/武器/5//攻撃。").unwrap();
        let page = generate_html(&[skill], &default_options());
        assert!(page.contains("<rt>アロンダイト</rt>"));
    }

    #[test]
    fn test_body_classes_from_options() {
        let options = RenderOptions {
            sleeve: true,
            large_name: true,
        };
        let page = generate_html(&[sample_skill()], &options);
        assert!(page.contains("<body class=\"sleeve large-name\">"));
    }

    #[test]
    fn test_empty_batch_still_renders_page() {
        let page = generate_html(&[], &default_options());
        assert!(page.contains("cards-container"));
        assert!(page.contains("</html>"));
    }
}
