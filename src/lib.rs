/*! This library finds Maximal Unique Matches (MUMs) between a DNA reference
 * sequence and a set of query sequences, using an enhanced suffix array.
 *
 * The enhanced suffix array ([Abouelhoda et al.]) augments a plain suffix
 * array with an LCP array and a child table, which together allow the same
 * top-down traversals as a suffix tree in linear space. On top of that, a
 * lookup table precomputes the interval of every short DNA prefix, so the
 * first characters of each query lookup cost a single table read. Suffix
 * sorting is based on the [`libsais-rs`] crate.
 *
 * ## Usage
 *
 * The typical entry point is [`run`], which scans every query against the
 * reference and writes one anchor block per query orientation:
 *
 * ```
 * use mumdex::{RunConfig, Sequence, run};
 *
 * let sequences = [
 *     Sequence::new("ref", b"AAAACGTAAAA").unwrap(),
 *     Sequence::new("query", b"CGTGG").unwrap(),
 * ];
 *
 * let config = RunConfig::new().min_length(3).cache_depth(4);
 *
 * let mut out = Vec::new();
 * run(&sequences, &config, &mut out).unwrap();
 *
 * assert_eq!(
 *     String::from_utf8(out).unwrap(),
 *     "> query\n       5         1         3\n"
 * );
 * ```
 *
 * The index and the match engine are also usable directly via [`Esa`] for
 * callers that need the raw intervals instead of the anchor stream.
 *
 * Anchors that are unique in the reference and at least as long as the
 * threshold (explicit, or derived from the shustring distribution via
 * [`min_anchor_length`]) are reported. Matches that overlap a previous match
 * within the query are intentionally not reported.
 *
 * [Abouelhoda et al.]: https://doi.org/10.1016/S1570-8667(03)00065-0
 * [`libsais-rs`]: https://github.com/feldroop/libsais-rs
 */

/// Contains the alphabet translation tables and reverse complementation.
pub mod alphabet;

mod config;
mod construction;
mod driver;
mod error;
mod lookup_table;
mod matching;
mod sequence;
mod threshold;

#[doc(inline)]
pub use config::RunConfig;
#[doc(inline)]
pub use driver::run;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use matching::MatchInterval;
#[doc(inline)]
pub use sequence::Sequence;
#[doc(inline)]
pub use threshold::min_anchor_length;

use lookup_table::PrefixCache;

/// The suffix array and everything derived from it is stored as `i32`, which
/// bounds the supported sequence length.
pub const MAX_SEQUENCE_LENGTH: usize = (i32::MAX as usize - 1) / 2;

/// The enhanced suffix array over a reference text.
///
/// Owns the suffix array, the LCP array, the child table and the prefix
/// lookup table; borrows the reference bytes. After construction the index is
/// read-only and can be shared freely between threads.
pub struct Esa<'a> {
    text: &'a [u8],
    pub(crate) suffix_array: Vec<i32>,
    pub(crate) lcp: Vec<i32>,
    pub(crate) child: Vec<i32>,
    pub(crate) cache: PrefixCache,
}

impl<'a> Esa<'a> {
    /// Builds the index over `text`, which must be a normalized, non-empty
    /// sequence of at most [`MAX_SEQUENCE_LENGTH`] bases.
    ///
    /// `cache_depth` is the length of the precomputed DNA prefixes (see
    /// [`RunConfig::cache_depth`]); `0` disables the lookup table.
    pub fn new(text: &'a [u8], cache_depth: usize) -> Result<Self, Error> {
        assert!(!text.is_empty());
        assert!(text.len() <= MAX_SEQUENCE_LENGTH);

        let suffix_array = construction::suffix_array(text)?;
        let lcp = construction::lcp_array(text, &suffix_array)?;
        let child = construction::child_table::build(&lcp);

        let mut esa = Esa {
            text,
            suffix_array,
            lcp,
            child,
            cache: PrefixCache::empty(),
        };

        if cache_depth > 0 {
            esa.cache = lookup_table::build(&esa, cache_depth)?;
        }

        Ok(esa)
    }

    /// The reference text this index was built over.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// The suffix array: suffix start positions in lexicographic order.
    pub fn suffix_array(&self) -> &[i32] {
        &self.suffix_array
    }

    /// The LCP array, with `-1` sentinels at both ends.
    pub fn lcp_array(&self) -> &[i32] {
        &self.lcp
    }

    /// The text position of the suffix at the given suffix array rank.
    pub fn suffix_position(&self, rank: usize) -> usize {
        self.suffix_array[rank] as usize
    }
}
