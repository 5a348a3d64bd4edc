use crate::cast::Cast;

const FOCUS_FALLBACK: &str = "an unexpected revelation";
const FOCUS_KEYWORDS: usize = 3;

pub fn build_logline(keywords: &[String], cast: &Cast, tone: &str) -> String {
    let focus = join_or(&keywords[..keywords.len().min(FOCUS_KEYWORDS)], ", ", FOCUS_FALLBACK);
    format!(
        "{} and {} navigate {} with a {} sensibility.",
        cast.protagonist,
        cast.ally,
        focus,
        tone.to_lowercase()
    )
}

/// Joins `words`, or returns `fallback` when there are none.
pub(crate) fn join_or(words: &[String], separator: &str, fallback: &str) -> String {
    if words.is_empty() {
        fallback.to_owned()
    } else {
        words.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast() -> Cast {
        Cast {
            protagonist: "Taylor".into(),
            ally: "Emerson".into(),
            second_ally: "Remy".into(),
        }
    }

    #[test]
    fn uses_first_three_keywords() {
        let keywords = ["lone", "archivist", "uncovers", "conspiracy"].map(String::from);
        assert_eq!(
            build_logline(&keywords, &cast(), "Cinematic, grounded, emotionally resonant"),
            "Taylor and Emerson navigate lone, archivist, uncovers with a cinematic, grounded, emotionally resonant sensibility."
        );
    }

    #[test]
    fn short_keyword_lists_are_used_whole() {
        let keywords = ["heist".to_owned()];
        assert_eq!(
            build_logline(&keywords, &cast(), "Slick, methodical, urbane"),
            "Taylor and Emerson navigate heist with a slick, methodical, urbane sensibility."
        );
    }

    #[test]
    fn no_keywords_uses_fallback_focus() {
        assert_eq!(
            build_logline(&[], &cast(), "Warm, intimate, hopeful"),
            "Taylor and Emerson navigate an unexpected revelation with a warm, intimate, hopeful sensibility."
        );
    }
}
