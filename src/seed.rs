//! Idea text to selection seed.
//!
//! The hash folds UTF-16 code units into a 32-bit signed accumulator
//! (`h = h * 31 + unit`, two's-complement wraparound) and keeps the absolute
//! value. Characters outside the Basic Multilingual Plane contribute both of
//! their surrogate units. Golden plans depend on this exact arithmetic.

/// Hashed in place of an idea that is empty after trimming.
pub const EMPTY_IDEA_SEED_TEXT: &str = "default";

pub fn hash_text(text: &str) -> u64 {
    let folded = text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    u64::from(folded.unsigned_abs())
}

/// Trims surrounding whitespace, including a stray byte-order mark.
///
/// NEL (U+0085) is Unicode whitespace but is kept, so seeds agree with
/// ECMAScript `trim` for every input.
pub fn normalize_idea(idea: &str) -> &str {
    idea.trim_matches(is_trimmed)
}

fn is_trimmed(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Text actually fed to the hash for an already-trimmed idea.
pub fn seed_text(trimmed: &str) -> &str {
    if trimmed.is_empty() {
        EMPTY_IDEA_SEED_TEXT
    } else {
        trimmed
    }
}

pub fn seed_for_idea(idea: &str) -> u64 {
    hash_text(seed_text(normalize_idea(idea)))
}
