//! Precomputed match intervals for every DNA prefix of a fixed length.
//!
//! The table converts the first `depth` characters of a query lookup into a
//! single read, indexed by the MSB-first 2-bit encoding of the prefix. `N` has
//! no 2-bit code, so any query prefix containing it bypasses the table and the
//! match engine falls back to a plain root descent. The same fallback is used
//! for prefixes that do not occur in the reference at all, preserving the
//! maximality guarantee of the match engine for matches shorter than `depth`.

use rayon::prelude::*;

use crate::{
    Error, Esa,
    alphabet::{BASE_CODE_TABLE, CODE_BASE_TABLE, INVALID_CODE},
};

/// Larger depths would make the table bigger than any realistic reference.
pub(crate) const MAX_CACHE_DEPTH: usize = 13;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CacheEntry {
    pub(crate) start: i32,
    pub(crate) end: i32,
}

impl CacheEntry {
    const MISS: Self = Self { start: -1, end: -1 };
}

#[derive(Debug)]
pub(crate) struct PrefixCache {
    depth: usize,
    entries: Vec<CacheEntry>,
}

impl PrefixCache {
    pub(crate) fn empty() -> Self {
        Self {
            depth: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the precomputed interval of the first `depth` bases of `query`,
    /// or `None` if the table is disabled, the query is too short, the prefix
    /// contains `N`, or the prefix does not occur in the reference.
    pub(crate) fn lookup(&self, query: &[u8]) -> Option<CacheEntry> {
        if self.depth == 0 || query.len() < self.depth {
            return None;
        }

        let mut code: usize = 0;
        for &base in &query[..self.depth] {
            let base_code = BASE_CODE_TABLE[base as usize];
            if base_code == INVALID_CODE {
                return None;
            }

            code = (code << 2) | base_code as usize;
        }

        let entry = self.entries[code];
        if entry.start < 0 { None } else { Some(entry) }
    }
}

/// Fills the table by matching every ACGT word of length `depth` against the
/// index, in parallel. The index must already carry its suffix array, LCP
/// array and child table; its own cache is still empty at this point.
pub(crate) fn build(esa: &Esa, depth: usize) -> Result<PrefixCache, Error> {
    assert!(depth <= MAX_CACHE_DEPTH);

    let num_entries = 1usize << (2 * depth);

    let mut entries = Vec::new();
    entries
        .try_reserve_exact(num_entries)
        .map_err(|_| Error::AllocationFailed)?;
    entries.resize(num_entries, CacheEntry::MISS);

    entries
        .par_iter_mut()
        .enumerate()
        .for_each(|(code, entry)| {
            let mut word = [0u8; MAX_CACHE_DEPTH];
            decode_word(code, depth, &mut word);

            let interval = esa.match_uncached(&word[..depth]);
            if interval.len == depth {
                *entry = CacheEntry {
                    start: interval.start as i32,
                    end: interval.end as i32,
                };
            }
        });

    Ok(PrefixCache { depth, entries })
}

fn decode_word(code: usize, depth: usize, word: &mut [u8; MAX_CACHE_DEPTH]) {
    for position in 0..depth {
        let shift = 2 * (depth - 1 - position);
        word[position] = CODE_BASE_TABLE[(code >> shift) & 0b11];
    }
}
