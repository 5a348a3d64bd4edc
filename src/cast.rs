use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::selection::select_unique;

/// Named characters for one plan. `second_ally` is drawn but no template
/// references it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub protagonist: String,
    pub ally: String,
    pub second_ally: String,
}

/// Protagonist and supporting names come from disjoint pools, so the three
/// names never collide even though each pool is walked independently.
pub fn assign_cast(seed: u64, catalog: &Catalog) -> Cast {
    let protagonist = select_unique(&catalog.protagonist_names, seed, 1)[0].clone();
    let supporting = select_unique(&catalog.supporting_names, seed, 2);

    Cast {
        protagonist,
        ally: supporting[0].clone(),
        second_ally: supporting[1].clone(),
    }
}
