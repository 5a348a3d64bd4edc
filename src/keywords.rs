use std::sync::OnceLock;

use regex::Regex;

pub const MAX_KEYWORDS: usize = 8;
/// Tokens must be strictly longer than this.
pub const MIN_KEYWORD_LEN_EXCLUSIVE: usize = 3;

/// Salient words of an idea, in first-occurrence order.
///
/// Lowercases with Unicode rules, blanks out everything that is not an ASCII
/// letter, digit or whitespace, then keeps up to [`MAX_KEYWORDS`] tokens longer
/// than three characters that are not stop words. Accented letters and emoji
/// act as word breaks.
pub fn extract_keywords(idea: &str, stop_words: &[String]) -> Vec<String> {
    let lower = idea.to_lowercase();
    let cleaned = non_keyword_chars().replace_all(&lower, " ");

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > MIN_KEYWORD_LEN_EXCLUSIVE)
        .filter(|word| !stop_words.iter().any(|stop| stop.as_str() == *word))
        .take(MAX_KEYWORDS)
        .map(str::to_owned)
        .collect()
}

fn non_keyword_chars() -> &'static Regex {
    static NON_KEYWORD_RE: OnceLock<Regex> = OnceLock::new();
    NON_KEYWORD_RE.get_or_init(|| {
        Regex::new(r"[^a-z0-9\s]").expect("keyword filter regex should compile")
    })
}
