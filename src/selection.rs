//! Seeded, repeatable picks from fixed tables.

/// `items[(seed + offset) % len]`.
///
/// Panics on an empty slice; every table reaching this point has been
/// validated as non-empty.
pub fn select_one<T>(items: &[T], seed: u64, offset: u64) -> &T {
    assert!(!items.is_empty(), "select_one requires a non-empty list");
    let index = seed.wrapping_add(offset) % items.len() as u64;
    &items[index as usize]
}

/// Collects `count` distinct elements by walking offsets 0, 1, 2, ...
///
/// One full lap over the slice visits every element, so the walk is bounded
/// by `items.len()`. Panics when the slice holds fewer than `count` distinct
/// elements.
pub fn select_unique<T: PartialEq>(items: &[T], seed: u64, count: usize) -> Vec<&T> {
    assert!(
        count <= items.len(),
        "select_unique asked for {count} elements from a list of {}",
        items.len()
    );

    let mut picked: Vec<&T> = Vec::with_capacity(count);
    for offset in 0..items.len() as u64 {
        if picked.len() == count {
            break;
        }
        let candidate = select_one(items, seed, offset);
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    assert!(
        picked.len() == count,
        "select_unique asked for {count} distinct elements but the list only holds {}",
        picked.len()
    );
    picked
}
