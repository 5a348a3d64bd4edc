//! Content tables driving every selection in a plan.
//!
//! The built-in catalog ships embedded in the binary. A YAML catalog may
//! replace any subset of tables; tables it omits keep their built-in values.
//! Tone rules and location presets are ordered lists because the first match
//! wins.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error_codes::CodedError;

pub const CATALOG_ENV_VAR: &str = "SCENE_DIRECTOR_CATALOG";
pub const STAGE_COUNT: usize = 3;
pub const BEATS_PER_STAGE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    pub stop_words: Vec<String>,
    pub protagonist_names: Vec<String>,
    pub supporting_names: Vec<String>,
    pub narrator_roles: Vec<String>,
    pub tone_rules: Vec<ToneRule>,
    pub default_tone: String,
    pub location_presets: Vec<LocationPreset>,
    pub fallback_settings: Vec<Setting>,
    pub visual_moods: Vec<String>,
    pub stages: Vec<StageTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRule {
    pub keyword: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub location: String,
    pub time_of_day: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPreset {
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub setting: Setting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTemplate {
    pub title: String,
    pub logline_lead: String,
    pub beat_verbs: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin_tables)
    }

    pub fn validate(&self) -> Result<()> {
        let protagonists = distinct(&self.protagonist_names);
        if protagonists.is_empty() {
            return Err(invalid("protagonist_names", "must list at least one name"));
        }
        let supporting = distinct(&self.supporting_names);
        if supporting.len() < 2 {
            return Err(invalid(
                "supporting_names",
                format!(
                    "must list at least 2 distinct names, found {}",
                    supporting.len()
                ),
            ));
        }
        let mut shared = protagonists
            .intersection(&supporting)
            .map(|name| (*name).to_owned())
            .collect::<Vec<_>>();
        if !shared.is_empty() {
            shared.sort();
            return Err(invalid(
                "supporting_names",
                format!(
                    "must not share names with protagonist_names: {}",
                    shared.join(", ")
                ),
            ));
        }

        if self.narrator_roles.is_empty() {
            return Err(invalid("narrator_roles", "must list at least one role"));
        }
        if self.default_tone.trim().is_empty() {
            return Err(invalid("default_tone", "must not be blank"));
        }
        for (index, rule) in self.tone_rules.iter().enumerate() {
            let field = format!("tone_rules[{index}].keyword");
            if rule.keyword.is_empty() {
                return Err(invalid(&field, "must not be empty"));
            }
            check_lowercase(&field, &rule.keyword)?;
        }
        for (index, preset) in self.location_presets.iter().enumerate() {
            let field = format!("location_presets[{index}].keywords");
            if preset.keywords.is_empty() || preset.keywords.iter().any(String::is_empty) {
                return Err(invalid(&field, "must list at least one non-empty keyword"));
            }
            for keyword in &preset.keywords {
                check_lowercase(&field, keyword)?;
            }
        }
        if self.fallback_settings.is_empty() {
            return Err(invalid("fallback_settings", "must list at least one setting"));
        }
        if self.visual_moods.is_empty() {
            return Err(invalid("visual_moods", "must list at least one mood"));
        }

        if self.stages.len() != STAGE_COUNT {
            return Err(invalid(
                "stages",
                format!(
                    "must hold exactly {STAGE_COUNT} entries, found {}",
                    self.stages.len()
                ),
            ));
        }
        for (index, stage) in self.stages.iter().enumerate() {
            if stage.beat_verbs.len() != BEATS_PER_STAGE {
                return Err(invalid(
                    &format!("stages[{index}].beat_verbs"),
                    format!(
                        "must hold exactly {BEATS_PER_STAGE} verbs, found {}",
                        stage.beat_verbs.len()
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Parses and validates a YAML catalog.
pub fn parse_catalog(yaml: &str, origin: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(yaml).map_err(|error| {
        let (line, column) = error
            .location()
            .map(|location| (Some(location.line()), Some(location.column())))
            .unwrap_or((None, None));
        let location_text = match (line, column) {
            (Some(line), Some(column)) => format!("line {line}, column {column}"),
            _ => "unknown location".to_owned(),
        };
        anyhow!(CodedError::config(
            "CATALOG_PARSE_FAILED",
            format!("failed to parse catalog {origin} at {location_text}: {error}"),
        )
        .with_details(json!({ "file": origin, "line": line, "column": column })))
    })?;

    catalog.validate()?;
    Ok(catalog)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path).map_err(|error| {
        anyhow!(CodedError::config(
            "CATALOG_READ_FAILED",
            format!("failed to read catalog {}: {error}", path.display()),
        )
        .with_details(json!({ "file": path.display().to_string() })))
    })?;
    parse_catalog(&contents, &path.display().to_string())
}

/// Explicit path first, then [`CATALOG_ENV_VAR`]. `None` means built-in.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env::var_os(CATALOG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn distinct(names: &[String]) -> HashSet<&str> {
    names.iter().map(String::as_str).collect()
}

/// Ideas are lowercased before matching, so an uppercase keyword never fires.
fn check_lowercase(field: &str, keyword: &str) -> Result<()> {
    if keyword.to_lowercase() != keyword {
        return Err(invalid(
            field,
            format!("must be lowercase, found '{keyword}'"),
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> anyhow::Error {
    let message = message.into();
    anyhow!(
        CodedError::config("INVALID_CATALOG", format!("{field} {message}"))
            .with_details(json!({ "field": field }))
    )
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn tone(keyword: &str, tone: &str) -> ToneRule {
    ToneRule {
        keyword: keyword.to_owned(),
        tone: tone.to_owned(),
    }
}

fn setting(location: &str, time_of_day: &str) -> Setting {
    Setting {
        location: location.to_owned(),
        time_of_day: time_of_day.to_owned(),
    }
}

fn preset(keywords: &[&str], location: &str, time_of_day: &str) -> LocationPreset {
    LocationPreset {
        keywords: strings(keywords),
        setting: setting(location, time_of_day),
    }
}

fn stage(title: &str, logline_lead: &str, beat_verbs: [&str; BEATS_PER_STAGE]) -> StageTemplate {
    StageTemplate {
        title: title.to_owned(),
        logline_lead: logline_lead.to_owned(),
        beat_verbs: strings(&beat_verbs),
    }
}

fn builtin_tables() -> Catalog {
    Catalog {
        stop_words: strings(&[
            "with", "that", "from", "into", "about", "after", "before", "under", "over", "between",
        ]),
        protagonist_names: strings(&[
            "Alex", "Jordan", "Riley", "Taylor", "Morgan", "Avery", "Quinn", "Sloane", "Rowan",
            "Phoenix", "Harper", "Elliot",
        ]),
        supporting_names: strings(&[
            "Casey", "Dakota", "Hayden", "Emerson", "Remy", "Skyler", "Reese", "Kai", "Noah",
            "Sage", "Peyton", "Jules",
        ]),
        narrator_roles: strings(&["Director", "Cinematographer", "Narrator"]),
        tone_rules: vec![
            tone("romance", "Tender, luminous, emotionally driven"),
            tone("love", "Warm, intimate, hopeful"),
            tone("adventure", "Alive, kinetic, heart-pounding"),
            tone("mystery", "Atmospheric, shadowy, tense"),
            tone("detective", "Noir-inspired, moody, deliberate"),
            tone("sci", "Sleek, visionary, futuristic"),
            tone("space", "Expansive, awe-struck, ethereal"),
            tone("cyber", "Neon-lit, high-contrast, edgy"),
            tone("dystopia", "Gritty, desaturated, urgent"),
            tone("fantasy", "Mythic, vibrant, enchanting"),
            tone("magic", "Glowing, whimsical, surreal"),
            tone("horror", "Foreboding, stark, unsettling"),
            tone("ghost", "Haunting, mist-laden, melancholic"),
            tone("thriller", "High-stakes, precise, tense"),
            tone("comedy", "Playful, lively, colorful"),
            tone("heist", "Slick, methodical, urbane"),
            tone("sports", "Dynamic, triumphant, high-energy"),
        ],
        default_tone: "Cinematic, grounded, emotionally resonant".to_owned(),
        location_presets: vec![
            preset(
                &["city", "urban", "street", "neon", "metropolis"],
                "Downtown rooftop overlooking the city",
                "Night",
            ),
            preset(
                &["forest", "woods", "nature", "grove"],
                "Ancient forest clearing",
                "Dusk",
            ),
            preset(&["desert", "sand", "arid"], "Vast desert ridge", "Twilight"),
            preset(
                &["ocean", "sea", "coast", "beach"],
                "Clifftop above the tide",
                "Golden Hour",
            ),
            preset(
                &["space", "galaxy", "planet"],
                "Observation deck aboard an orbital station",
                "Starlit",
            ),
            preset(
                &["castle", "kingdom", "throne"],
                "Torch-lit great hall",
                "Night",
            ),
            preset(
                &["lab", "science", "tech"],
                "High-security research lab",
                "Late Night",
            ),
            preset(
                &["village", "town", "market"],
                "Twinkling market square",
                "Evening",
            ),
        ],
        fallback_settings: vec![
            setting("Converted warehouse staging area", "Midnight"),
            setting("Glass-walled penthouse command center", "Blue Hour"),
            setting("Rain-specked tram station", "Dawn"),
        ],
        visual_moods: strings(&[
            "rain-soaked city streets reflecting neon glows",
            "sun-drenched vistas with cinematic lens flares",
            "moody interiors with chiaroscuro lighting",
            "wind-swept coastal cliffs under dramatic skies",
            "lush forests painted with volumetric light",
            "brutalist architecture softened by ambient haze",
            "futuristic skylines wrapped in low-lying clouds",
            "deserted alleyways carved by shafts of light",
            "art deco interiors with polished brass highlights",
            "misty mountains framed by golden hour light",
            "retro diners with saturated color palettes",
            "industrial rooftops glowing in pre-dawn blue",
        ]),
        stages: vec![
            stage("Spark", "Inciting moment", ["Introduce", "Reveal", "Provoke"]),
            stage(
                "Escalation",
                "Rising conflict",
                ["Collide", "Challenge", "Complicate"],
            ),
            stage(
                "Resolution",
                "Climactic turn",
                ["Confront", "Transform", "Resolve"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_codes::find_coded_error;

    fn error_code(error: &anyhow::Error) -> &'static str {
        find_coded_error(error).expect("error should be coded").code
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("built-in catalog should validate");
        assert_eq!(catalog.protagonist_names.len(), 12);
        assert_eq!(catalog.supporting_names.len(), 12);
        assert_eq!(catalog.fallback_settings.len(), 3);
        assert_eq!(catalog.stages.len(), STAGE_COUNT);
    }

    #[test]
    fn partial_yaml_keeps_builtin_tables() {
        let catalog = parse_catalog(
            r#"
narrator_roles: ["Showrunner"]
default_tone: "Dry, wry, understated"
"#,
            "inline",
        )
        .expect("partial catalog should parse");
        assert_eq!(catalog.narrator_roles, vec!["Showrunner"]);
        assert_eq!(catalog.default_tone, "Dry, wry, understated");
        assert_eq!(catalog.tone_rules, Catalog::builtin().tone_rules);
        assert_eq!(catalog.stages, Catalog::builtin().stages);
    }

    #[test]
    fn location_preset_yaml_is_flat() {
        let catalog = parse_catalog(
            r#"
location_presets:
  - keywords: ["moon"]
    location: "Lunar quarry"
    time_of_day: "Earthrise"
"#,
            "inline",
        )
        .expect("catalog should parse");
        assert_eq!(catalog.location_presets[0].setting.location, "Lunar quarry");
        assert_eq!(catalog.location_presets[0].setting.time_of_day, "Earthrise");
    }

    #[test]
    fn overlapping_name_pools_are_rejected() {
        let error = parse_catalog(
            r#"
protagonist_names: ["Ada", "Kai"]
supporting_names: ["Kai", "Lin", "Mo"]
"#,
            "inline",
        )
        .unwrap_err();
        assert_eq!(error_code(&error), "INVALID_CATALOG");
        assert!(error.to_string().contains("Kai"), "{error}");
    }

    #[test]
    fn supporting_pool_needs_two_distinct_names() {
        let error = parse_catalog(r#"supporting_names: ["Lin", "Lin"]"#, "inline").unwrap_err();
        assert_eq!(error_code(&error), "INVALID_CATALOG");
        assert!(error.to_string().contains("found 1"), "{error}");
    }

    #[test]
    fn stage_shape_is_enforced() {
        let error = parse_catalog(
            r#"
stages:
  - title: "Only"
    logline_lead: "Lone act"
    beat_verbs: ["Begin", "Middle", "End"]
"#,
            "inline",
        )
        .unwrap_err();
        assert!(error.to_string().contains("exactly 3 entries"), "{error}");

        let mut catalog = Catalog::builtin().clone();
        catalog.stages[1].beat_verbs.pop();
        let error = catalog.validate().unwrap_err();
        assert!(
            error.to_string().contains("stages[1].beat_verbs"),
            "{error}"
        );
    }

    #[test]
    fn empty_tables_are_rejected() {
        for yaml in [
            "narrator_roles: []",
            "fallback_settings: []",
            "visual_moods: []",
            "default_tone: \"  \"",
            "tone_rules: [{ keyword: \"\", tone: \"Odd\" }]",
            "location_presets: [{ keywords: [], location: \"Nowhere\", time_of_day: \"Noon\" }]",
        ] {
            let error = parse_catalog(yaml, "inline").unwrap_err();
            assert_eq!(error_code(&error), "INVALID_CATALOG", "{yaml}");
        }
    }

    #[test]
    fn uppercase_keywords_are_rejected() {
        let error = parse_catalog(
            "tone_rules: [{ keyword: \"Harbor\", tone: \"Briny\" }]",
            "inline",
        )
        .unwrap_err();
        assert_eq!(error_code(&error), "INVALID_CATALOG");
        assert!(error.to_string().contains("'Harbor'"), "{error}");

        let error = parse_catalog(
            r#"
location_presets:
  - keywords: ["pier", "Docks"]
    location: "Fogbound pier"
    time_of_day: "Dawn"
"#,
            "inline",
        )
        .unwrap_err();
        let details = find_coded_error(&error)
            .and_then(|coded| coded.details.clone())
            .expect("validation errors carry details");
        assert_eq!(details["field"], "location_presets[0].keywords");
    }

    #[test]
    fn unknown_table_reports_parse_location() {
        let error = parse_catalog("villains: [\"Mora\"]\n", "inline.yaml").unwrap_err();
        assert_eq!(error_code(&error), "CATALOG_PARSE_FAILED");
        let details = find_coded_error(&error)
            .and_then(|coded| coded.details.clone())
            .expect("parse errors carry details");
        assert_eq!(details["file"], "inline.yaml");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let error = load_catalog(Path::new("definitely/not/here.yaml")).unwrap_err();
        assert_eq!(error_code(&error), "CATALOG_READ_FAILED");
    }

    #[test]
    fn explicit_catalog_path_wins() {
        let explicit = Path::new("mine.yaml");
        assert_eq!(
            resolve_catalog_path(Some(explicit)),
            Some(PathBuf::from("mine.yaml"))
        );
    }
}
