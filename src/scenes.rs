use serde::{Deserialize, Serialize};

use crate::cast::Cast;
use crate::catalog::{Catalog, Setting, StageTemplate};
use crate::inference::infer_setting;
use crate::selection::select_one;

const PALETTE_OFFSET: u64 = 3;
const STAGE_SEED_STRIDE: u64 = 13;
const STAGE_SEED_MODULUS: u64 = 9973;
const FALLBACK_BEAT_WORDS: [&str; 3] = ["the plan", "the turning point", "the silence"];

const IMAGE_STYLE: &str = "hyper-realistic photography";
const IMAGE_CAMERA: &str =
    "shot on IMAX 65mm, shallow depth of field, volumetric lighting, fine film grain";
const VIDEO_STYLE: &str = "cinematic video";
const VIDEO_FRAMING: &str = "tracking shot with Steadicam";
const VIDEO_MOTION: &str =
    "dynamic camera movement, immersive spatial audio, 24fps, anamorphic lens flares";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneBreakdown {
    pub title: String,
    pub location: String,
    pub time_of_day: String,
    pub logline: String,
    pub visual_palette: String,
    pub beats: Vec<String>,
    pub image_prompt: String,
    pub video_prompt: String,
}

/// Visual mood shared by every scene of a plan.
pub fn palette_for(seed: u64, visual_moods: &[String]) -> &str {
    select_one(visual_moods, seed, PALETTE_OFFSET).as_str()
}

/// One breakdown per stage template, in catalog order. Setting and palette are
/// resolved once and shared.
pub fn craft_scenes(
    idea: &str,
    keywords: &[String],
    cast: &Cast,
    seed: u64,
    catalog: &Catalog,
) -> Vec<SceneBreakdown> {
    let setting = infer_setting(
        idea,
        seed,
        &catalog.location_presets,
        &catalog.fallback_settings,
    );
    let palette = palette_for(seed, &catalog.visual_moods);
    let beat_words: Vec<&str> = if keywords.is_empty() {
        FALLBACK_BEAT_WORDS.to_vec()
    } else {
        keywords.iter().map(String::as_str).collect()
    };
    let idea_lower = idea.to_lowercase();

    catalog
        .stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let beat_seed = (seed + index as u64 * STAGE_SEED_STRIDE) % STAGE_SEED_MODULUS;
            SceneBreakdown {
                title: format!("Scene {}: {}", index + 1, stage.title),
                location: setting.location.clone(),
                time_of_day: setting.time_of_day.clone(),
                logline: format!(
                    "{} as {} and {} maneuver through {}.",
                    stage.logline_lead, cast.protagonist, cast.ally, idea_lower
                ),
                visual_palette: palette.to_owned(),
                beats: stage_beats(stage, &beat_words, beat_seed),
                image_prompt: image_prompt(stage, cast, setting, palette),
                video_prompt: video_prompt(stage, cast, setting, palette),
            }
        })
        .collect()
}

fn stage_beats(stage: &StageTemplate, beat_words: &[&str], beat_seed: u64) -> Vec<String> {
    stage
        .beat_verbs
        .iter()
        .enumerate()
        .map(|(beat_index, verb)| {
            let target = select_one(beat_words, beat_seed, beat_index as u64);
            format!("{verb} {target}")
        })
        .collect()
}

fn image_prompt(stage: &StageTemplate, cast: &Cast, setting: &Setting, palette: &str) -> String {
    [
        format!("{} of a cinematic narrative", stage.title),
        IMAGE_STYLE.to_owned(),
        format!("featuring {} and {}", cast.protagonist, cast.ally),
        setting.location.to_lowercase(),
        format!("{} ambience", setting.time_of_day.to_lowercase()),
        palette.to_owned(),
        IMAGE_CAMERA.to_owned(),
    ]
    .join(", ")
}

fn video_prompt(stage: &StageTemplate, cast: &Cast, setting: &Setting, palette: &str) -> String {
    [
        format!("{} sequence", stage.title),
        VIDEO_STYLE.to_owned(),
        VIDEO_FRAMING.to_owned(),
        format!(
            "{} and {} in {}",
            cast.protagonist,
            cast.ally,
            setting.location.to_lowercase()
        ),
        format!("{} light", setting.time_of_day.to_lowercase()),
        palette.to_owned(),
        VIDEO_MOTION.to_owned(),
    ]
    .join(", ")
}
