use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::cast::{assign_cast, Cast};
use crate::catalog::{Catalog, Setting};
use crate::inference::{infer_setting, infer_tone};
use crate::keywords::extract_keywords;
use crate::logline::build_logline;
use crate::scenes::{craft_scenes, palette_for, SceneBreakdown};
use crate::script::{craft_script, ScriptLine};
use crate::seed::{hash_text, normalize_idea, seed_text};

/// Idea shown when the caller has none of its own.
pub const DEFAULT_IDEA: &str =
    "A lone archivist uncovers a conspiracy encoded in vintage film reels.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub logline: String,
    pub tone: String,
    pub script: Vec<ScriptLine>,
    pub scenes: Vec<SceneBreakdown>,
}

/// Intermediate values of the pipeline for one idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaAnalysis {
    pub idea: String,
    pub seed_text: String,
    pub seed: u64,
    pub keywords: Vec<String>,
    pub tone: String,
    pub setting: Setting,
    pub visual_palette: String,
    pub cast: Cast,
}

pub fn generate_plan(idea: &str) -> ProductionPlan {
    generate_plan_with(idea, Catalog::builtin())
}

/// Builds a plan against `catalog`, which must have passed
/// [`Catalog::validate`]. Total for every idea string.
pub fn generate_plan_with(idea: &str, catalog: &Catalog) -> ProductionPlan {
    let idea = normalize_idea(idea);
    let seed = hash_text(seed_text(idea));
    let keywords = extract_keywords(idea, &catalog.stop_words);
    let cast = assign_cast(seed, catalog);
    let tone = infer_tone(idea, &catalog.tone_rules, &catalog.default_tone);
    debug!(
        "planning idea: seed={seed} keywords={} protagonist={} ally={}",
        keywords.len(),
        cast.protagonist,
        cast.ally
    );

    ProductionPlan {
        logline: build_logline(&keywords, &cast, tone),
        tone: tone.to_owned(),
        script: craft_script(&keywords, &cast, tone, seed, &catalog.narrator_roles),
        scenes: craft_scenes(idea, &keywords, &cast, seed, catalog),
    }
}

pub fn analyze_idea(idea: &str) -> IdeaAnalysis {
    analyze_idea_with(idea, Catalog::builtin())
}

pub fn analyze_idea_with(idea: &str, catalog: &Catalog) -> IdeaAnalysis {
    let idea = normalize_idea(idea);
    let hashed = seed_text(idea);
    let seed = hash_text(hashed);

    IdeaAnalysis {
        idea: idea.to_owned(),
        seed_text: hashed.to_owned(),
        seed,
        keywords: extract_keywords(idea, &catalog.stop_words),
        tone: infer_tone(idea, &catalog.tone_rules, &catalog.default_tone).to_owned(),
        setting: infer_setting(
            idea,
            seed,
            &catalog.location_presets,
            &catalog.fallback_settings,
        )
        .clone(),
        visual_palette: palette_for(seed, &catalog.visual_moods).to_owned(),
        cast: assign_cast(seed, catalog),
    }
}

/// Lowercase hex SHA-256 of the plan's compact JSON form.
pub fn plan_fingerprint(plan: &ProductionPlan) -> Result<String> {
    let bytes = serde_json::to_vec(plan).context("failed to serialize plan for fingerprint")?;
    let digest = Sha256::digest(&bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    Ok(out)
}
