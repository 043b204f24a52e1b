//! The match engine: resolving, for a query suffix, the longest prefix that
//! occurs in the reference, as an interval of the suffix array.
//!
//! The walk starts from the prefix lookup table entry where possible and
//! descends through lcp-intervals using the child table. Inside an interval,
//! the query is compared against the text of the interval's first suffix in
//! bulk; branching happens only at interval boundaries, where the child table
//! gives the matching child in O(alphabet size).

use crate::Esa;

/// An interval `[start, end]` of suffix array positions whose suffixes all
/// begin with the same matched prefix of length `len`.
///
/// `start == end` means the prefix occurs exactly once in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInterval {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl MatchInterval {
    /// Whether the matched prefix is unique in the reference.
    pub fn is_unique(&self) -> bool {
        self.start == self.end
    }
}

/// `N` matches nothing, not even another `N`. Everything else is raw byte
/// equality over normalized bases.
#[inline]
pub(crate) fn bases_match(a: u8, b: u8) -> bool {
    a == b && a != b'N'
}

impl<'a> Esa<'a> {
    /// Returns the longest prefix of `query` that occurs in the reference,
    /// together with its suffix array interval.
    ///
    /// The result is maximal: either the whole query matched, or extending the
    /// match by `query[len]` has no continuation in the reference.
    pub fn match_cached(&self, query: &[u8]) -> MatchInterval {
        match self.cache.lookup(query) {
            Some(entry) => self.match_from(
                entry.start as usize,
                entry.end as usize,
                self.cache.depth(),
                query,
            ),
            None => self.match_uncached(query),
        }
    }

    /// The same walk, always starting from the root interval.
    pub(crate) fn match_uncached(&self, query: &[u8]) -> MatchInterval {
        self.match_from(0, self.suffix_array.len() - 1, 0, query)
    }

    /// Continues matching `query` against the interval `[start, end]`, whose
    /// suffixes are known to share the first `verified` query characters.
    fn match_from(
        &self,
        mut start: usize,
        mut end: usize,
        mut verified: usize,
        query: &[u8],
    ) -> MatchInterval {
        loop {
            if start == end {
                // singleton: extend by direct comparison against the text
                let suffix = self.suffix_array[start] as usize;
                while verified < query.len()
                    && suffix + verified < self.text.len()
                    && bases_match(self.text[suffix + verified], query[verified])
                {
                    verified += 1;
                }

                return MatchInterval {
                    start,
                    end,
                    len: verified,
                };
            }

            // all suffixes of the interval share their first `depth` characters
            let depth = self.interval_lcp(start, end);
            let head = self.suffix_array[start] as usize;
            while verified < depth && verified < query.len() {
                if !bases_match(self.text[head + verified], query[verified]) {
                    return MatchInterval {
                        start,
                        end,
                        len: verified,
                    };
                }

                verified += 1;
            }

            if verified == query.len() {
                return MatchInterval {
                    start,
                    end,
                    len: verified,
                };
            }

            match self.child_by_base(start, end, depth, query[verified]) {
                Some((child_start, child_end)) => {
                    start = child_start;
                    end = child_end;
                    // the child was selected by its character at `depth`
                    verified = depth + 1;
                }
                None => {
                    return MatchInterval {
                        start,
                        end,
                        len: verified,
                    };
                }
            }
        }
    }

    /// The number of leading characters shared by all suffixes of the
    /// non-singleton lcp-interval `[start, end]`.
    pub(crate) fn interval_lcp(&self, start: usize, end: usize) -> usize {
        self.lcp[self.first_l_index(start, end)] as usize
    }

    /// The smallest position in `(start, end]` holding the interval's minimum
    /// LCP value. Prefers the `up` field stored at `end`; if that points
    /// outside the interval (or the slot holds a different field), the `down`
    /// field at `start` applies.
    fn first_l_index(&self, start: usize, end: usize) -> usize {
        debug_assert!(start < end);

        let up = self.child[end];
        if up > start as i32 && up <= end as i32 {
            up as usize
        } else {
            self.child[start] as usize
        }
    }

    /// Finds the child interval of `[start, end]` (with lcp value `depth`)
    /// whose suffixes continue with `base` at offset `depth`.
    ///
    /// Children are delimited by the l-indices of the interval, which are
    /// chained through the `next_l` field of the child table. A chain link is
    /// only followed while it stays inside the interval and keeps the same LCP
    /// value; anything else stored in the slot fails those checks.
    fn child_by_base(
        &self,
        start: usize,
        end: usize,
        depth: usize,
        base: u8,
    ) -> Option<(usize, usize)> {
        let mut child_start = start;
        let mut boundary = self.first_l_index(start, end);

        loop {
            if self.suffix_continues_with(child_start, depth, base) {
                return Some((child_start, boundary - 1));
            }

            child_start = boundary;

            let link = self.child[boundary];
            if link > boundary as i32
                && link <= end as i32
                && self.lcp[link as usize] == self.lcp[boundary]
            {
                boundary = link as usize;
            } else {
                break;
            }
        }

        if self.suffix_continues_with(child_start, depth, base) {
            Some((child_start, end))
        } else {
            None
        }
    }

    /// Whether the suffix at rank `rank` has `base` at offset `depth`. The
    /// offset can fall past the end of the text for the shortest suffix of an
    /// interval, which by definition continues with nothing.
    fn suffix_continues_with(&self, rank: usize, depth: usize, base: u8) -> bool {
        let position = self.suffix_array[rank] as usize + depth;

        position < self.text.len() && bases_match(self.text[position], base)
    }
}
