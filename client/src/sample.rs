//! Random subset selection for the shuffle mode

use std::collections::HashSet;

use pokegrid_protocol::ListEntry;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `amount` distinct indices below `len`, in draw order.
///
/// Uses rejection sampling against the set of indices already drawn. When
/// `amount >= len` every index is returned in random order.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, amount: usize, rng: &mut R) -> Vec<usize> {
    if amount >= len {
        let mut all: Vec<usize> = (0..len).collect();
        all.shuffle(rng);
        return all;
    }

    let mut used = HashSet::with_capacity(amount);
    let mut picked = Vec::with_capacity(amount);

    while picked.len() < amount {
        let idx = rng.gen_range(0..len);
        if used.insert(idx) {
            picked.push(idx);
        }
    }

    picked
}

/// Pick `amount` distinct entries at random
pub fn random_subset<R: Rng + ?Sized>(
    entries: &[ListEntry],
    amount: usize,
    rng: &mut R,
) -> Vec<ListEntry> {
    sample_indices(entries.len(), amount, rng)
        .into_iter()
        .map(|idx| entries[idx].clone())
        .collect()
}
