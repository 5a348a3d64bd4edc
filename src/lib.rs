//! Deterministic pitch-to-production planning.
//!
//! [`generate_plan`] turns a free-text idea into a logline, tone, four-line
//! script and three scene breakdowns. The same idea always yields the same
//! plan: every choice is derived from a hash of the trimmed idea text and the
//! content tables in [`catalog::Catalog`].

pub mod cast;
pub mod catalog;
pub mod error_codes;
pub mod inference;
pub mod keywords;
pub mod logline;
pub mod plan;
pub mod render;
pub mod scenes;
pub mod script;
pub mod seed;
pub mod selection;

pub use cast::Cast;
pub use catalog::{load_catalog, Catalog};
pub use plan::{
    analyze_idea, analyze_idea_with, generate_plan, generate_plan_with, plan_fingerprint,
    IdeaAnalysis, ProductionPlan, DEFAULT_IDEA,
};
pub use render::render_text;
pub use scenes::SceneBreakdown;
pub use script::ScriptLine;
