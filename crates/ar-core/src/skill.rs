//! The structured skill record

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::cost::Cost;
use crate::judge::Judge;
use crate::skill_range::SkillRange;
use crate::target::Target;

/// One skill, extracted from one sheet line
///
/// Fully populated on construction; fields are optional only where the
/// domain allows "none".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name, possibly with inline ruby annotations
    pub name: String,
    /// Current skill level
    pub level: u32,
    /// Timing keyword, alias-expanded
    pub timing: String,
    /// Resolution-check type
    pub judge: Judge,
    /// Difficulty annotation captured next to the judge, if any
    pub difficulty: Option<u32>,
    /// Who or what the skill affects
    pub target: Target,
    /// Effective distance or area
    pub skill_range: SkillRange,
    /// Resource expenditure
    pub cost: Cost,
    /// Normalized usage limitation ("シーン3回"), `None` for unlimited
    pub usage_limitation: Option<String>,
    /// School annotation pulled from the effect field, if any
    pub classifier: Option<Classifier>,
    /// Cleaned-up effect body
    pub effect: String,
    /// Bonus-on-critical text, if any
    pub critical: Option<String>,
    /// Narrative description text, if any
    pub flavor: Option<String>,
    /// Acquired-at-level-or-above threshold, if the sheet carried one
    pub level_above: Option<u32>,
}

impl Skill {
    /// The limitation text as shown on a card.
    pub fn limitation_display(&self) -> &str {
        self.usage_limitation.as_deref().unwrap_or("なし")
    }
}
