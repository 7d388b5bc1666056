//! ar-core: Core library for parsing Arianrhod character-sheet skill tables
//!
//! This library provides functionality to:
//! - Locate the skill table inside a pasted character-sheet export
//! - Parse each table line into a structured skill record
//! - Normalize the informal shorthand notation players use in every field
//!   (judge type, cost, target, range, school, timing, usage limitation)
//! - Split the free-text effect field into body, critical effect, and
//!   flavor text
//!
//! Parsing is total: malformed field content falls back to a verbatim
//! free-text variant or a default kind instead of failing, and lines that
//! are not skills are silently skipped.

pub mod ability;
pub mod alias;
pub mod classifier;
pub mod cost;
pub mod effect;
pub mod element;
pub mod error;
pub mod judge;
pub mod normalize;
pub mod parser;
pub mod ruby;
pub mod sheet;
pub mod skill;
pub mod skill_range;
pub mod target;
pub mod timing;

pub use ability::Ability;
pub use classifier::Classifier;
pub use cost::Cost;
pub use effect::{split_effect, unify_effect, SplitEffect};
pub use element::Element;
pub use error::{Error, Result};
pub use judge::Judge;
pub use parser::parse_line;
pub use ruby::RubyString;
pub use sheet::{extract_skills, extract_skills_from_file};
pub use skill::Skill;
pub use skill_range::SkillRange;
pub use target::Target;
pub use timing::unify_timing;
