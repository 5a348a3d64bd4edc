//! Plain-text layout of a plan for terminal output.

use std::fmt::Write;

use crate::plan::{IdeaAnalysis, ProductionPlan};

pub fn render_text(plan: &ProductionPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "STORY CORE");
    let _ = writeln!(out, "Logline: {}", plan.logline);
    let _ = writeln!(out, "Tone: {}", plan.tone);
    let _ = writeln!(out);
    let _ = writeln!(out, "Script Draft");
    for line in &plan.script {
        let _ = writeln!(out, "  {}: {}", line.speaker.to_uppercase(), line.line);
    }

    for scene in &plan.scenes {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", scene.title.to_uppercase());
        let _ = writeln!(out, "{} · {}", scene.location, scene.time_of_day);
        let _ = writeln!(out, "{}", scene.logline);
        let _ = writeln!(out, "Key Beats");
        for beat in &scene.beats {
            let _ = writeln!(out, "  - {beat}");
        }
        let _ = writeln!(out, "Visual Palette: {}", scene.visual_palette);
        let _ = writeln!(out, "Image Prompt: {}", scene.image_prompt);
        let _ = writeln!(out, "Video Prompt: {}", scene.video_prompt);
    }
    out
}

pub fn render_analysis_text(analysis: &IdeaAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Idea: {}", analysis.idea);
    let _ = writeln!(
        out,
        "Seed: {} (hashed \"{}\")",
        analysis.seed, analysis.seed_text
    );
    let keywords = if analysis.keywords.is_empty() {
        "(none)".to_owned()
    } else {
        analysis.keywords.join(", ")
    };
    let _ = writeln!(out, "Keywords: {keywords}");
    let _ = writeln!(out, "Tone: {}", analysis.tone);
    let _ = writeln!(
        out,
        "Setting: {} · {}",
        analysis.setting.location, analysis.setting.time_of_day
    );
    let _ = writeln!(out, "Palette: {}", analysis.visual_palette);
    let _ = writeln!(
        out,
        "Cast: {} (protagonist), {}, {}",
        analysis.cast.protagonist, analysis.cast.ally, analysis.cast.second_ally
    );
    out
}
