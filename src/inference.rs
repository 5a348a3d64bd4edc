//! Rule-based tone and setting inference.
//!
//! Both scans are linear over ordered tables and match by substring of the
//! lowercased idea, so "sci" also fires inside "science". The first hit wins.

use log::debug;

use crate::catalog::{LocationPreset, Setting, ToneRule};
use crate::selection::select_one;

pub fn match_tone_rule<'a>(idea: &str, rules: &'a [ToneRule]) -> Option<&'a ToneRule> {
    let lower = idea.to_lowercase();
    rules
        .iter()
        .find(|rule| lower.contains(rule.keyword.as_str()))
}

pub fn infer_tone<'a>(idea: &str, rules: &'a [ToneRule], default_tone: &'a str) -> &'a str {
    match match_tone_rule(idea, rules) {
        Some(rule) => {
            debug!("tone matched keyword '{}'", rule.keyword);
            &rule.tone
        }
        None => {
            debug!("no tone keyword matched; using default tone");
            default_tone
        }
    }
}

pub fn match_location_preset<'a>(
    idea: &str,
    presets: &'a [LocationPreset],
) -> Option<&'a LocationPreset> {
    let lower = idea.to_lowercase();
    presets.iter().find(|preset| {
        preset
            .keywords
            .iter()
            .any(|keyword| lower.contains(keyword.as_str()))
    })
}

pub fn infer_setting<'a>(
    idea: &str,
    seed: u64,
    presets: &'a [LocationPreset],
    fallback: &'a [Setting],
) -> &'a Setting {
    if let Some(preset) = match_location_preset(idea, presets) {
        debug!("setting matched preset '{}'", preset.setting.location);
        return &preset.setting;
    }
    let setting = select_one(fallback, seed, 0);
    debug!("no location keyword matched; fallback '{}'", setting.location);
    setting
}
