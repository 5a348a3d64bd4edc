use serde::{Deserialize, Serialize};

use crate::cast::Cast;
use crate::logline::join_or;
use crate::selection::select_one;

pub const SCRIPT_LENGTH: usize = 4;

const NARRATOR_OFFSET: u64 = 5;
const STAKES_FALLBACK: &str = "the moment";
const CATALYST_FALLBACK: &str = "a fragile connection";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    pub speaker: String,
    pub line: String,
}

impl ScriptLine {
    fn new(speaker: &str, line: String) -> Self {
        Self {
            speaker: speaker.to_owned(),
            line,
        }
    }
}

/// Four-line cold open: narrator sets the scene, hero raises the stakes, ally
/// pushes back, hero closes on the mood.
pub fn craft_script(
    keywords: &[String],
    cast: &Cast,
    tone: &str,
    seed: u64,
    narrator_roles: &[String],
) -> Vec<ScriptLine> {
    let stakes = join_or(&keywords[..keywords.len().min(2)], " & ", STAKES_FALLBACK);
    let catalyst = join_or(
        keywords.get(2..keywords.len().min(4)).unwrap_or_default(),
        " & ",
        CATALYST_FALLBACK,
    );
    let mood_hint = mood_hint(tone);
    let narrator = select_one(narrator_roles, seed, NARRATOR_OFFSET);
    let hero = cast.protagonist.as_str();

    vec![
        ScriptLine::new(
            narrator,
            format!("Camera drifts in, catching {hero} as they center themselves amid {stakes}."),
        ),
        ScriptLine::new(
            hero,
            format!("\"If we misread {catalyst}, everything fractures.\""),
        ),
        ScriptLine::new(
            &cast.ally,
            "\"Then we don't misread it—we choreograph every beat.\"".to_owned(),
        ),
        ScriptLine::new(
            hero,
            format!(
                "\"Stay sharp. The air feels {mood_hint}, and the world is finally watching.\""
            ),
        ),
    ]
}

/// First comma-separated segment of the tone, lowercased.
fn mood_hint(tone: &str) -> String {
    tone.split(',').next().unwrap_or_default().to_lowercase()
}
