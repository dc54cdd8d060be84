use crate::models::CandidatePath;
use std::collections::BTreeSet;

/// Merges accepted candidates from every source into the final result set:
/// invalid candidates dropped, exact duplicates removed, sorted
/// lexicographically. No further ranking is applied.
pub fn resolve_overlaps<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = CandidatePath>,
{
    candidates
        .into_iter()
        .filter(|candidate| candidate.valid)
        .map(|candidate| candidate.render())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
