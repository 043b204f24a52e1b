//! The outer scan: for every non-reference sequence, walk its positions,
//! resolve the longest reference match at each one and emit the unique,
//! sufficiently long anchors.
//!
//! Queries are processed data-parallel on the rayon thread pool. The index is
//! shared read-only; each worker owns its reverse complement buffer and its
//! output block, which is flushed under a single writer lock so that blocks of
//! different queries never interleave.

use log::{debug, warn};
use rayon::prelude::*;

use std::io::Write;
use std::sync::Mutex;

use crate::{Error, Esa, RunConfig, Sequence, matching, threshold};

/// Finds MUM anchor candidates between `sequences[0]` (the reference) and all
/// following sequences, writing one block per scanned query orientation to
/// `out`.
///
/// Each block consists of a `"> name"` header (`"> name Reverse"` for the
/// reverse complement scan) followed by one line per anchor: 1-based reference
/// position, 1-based query position and match length, each right-aligned to
/// width 8. Blocks of different queries may appear in any order; anchors
/// within a block are ordered by query position.
pub fn run<W: Write + Send>(
    sequences: &[Sequence],
    config: &RunConfig,
    out: W,
) -> Result<(), Error> {
    if sequences.len() < 2 {
        return Err(Error::TooFewSequences);
    }

    if sequences.iter().any(Sequence::had_non_acgt) {
        warn!("sequences contained residues other than ACGT, which were converted to N");
    }

    let reference = &sequences[0];
    let esa = Esa::new(reference.bytes(), config.cache_depth)?;

    let min_length = if config.min_length > 0 {
        config.min_length
    } else {
        threshold::min_anchor_length(config.p_value, reference.gc(), reference.len())
    };
    debug!("minimum anchor length is {min_length}");

    let out = Mutex::new(out);

    sequences[1..]
        .par_iter()
        .enumerate()
        .try_for_each(|(query_index, query)| {
            debug!("comparing 0 and {}", query_index + 1);

            let mut block = Vec::new();

            if config.forward {
                writeln!(block, "> {}", query.name())?;
                scan_query(&esa, query.bytes(), min_length, &mut block)?;
            }

            if config.reverse_complement {
                let reverse = query.reverse_complement();
                writeln!(block, "> {} Reverse", query.name())?;
                scan_query(&esa, &reverse, min_length, &mut block)?;
            }

            let mut out = out.lock().expect("a worker panicked while writing output");
            out.write_all(&block).map_err(Error::from)
        })
}

/// Scans one query orientation.
///
/// After a match of length `len` at position `q`, the scan resumes at
/// `q + len + 1`, one past the match end. This deliberately skips anchors that
/// overlap a previous match in the query.
fn scan_query(
    esa: &Esa,
    query: &[u8],
    min_length: usize,
    block: &mut Vec<u8>,
) -> Result<(), Error> {
    let text = esa.text();

    let mut q = 0;
    while q < query.len() {
        let interval = esa.match_cached(&query[q..]);

        if interval.is_unique() && interval.len > 0 {
            let mut reference_start = esa.suffix_position(interval.start);
            let mut query_start = q;
            let mut len = interval.len;

            // extend leftwards in the reference while the preceding characters
            // agree, stopping at either sequence start
            while reference_start > 0
                && query_start > 0
                && matching::bases_match(text[reference_start - 1], query[query_start - 1])
            {
                reference_start -= 1;
                query_start -= 1;
                len += 1;
            }

            if len >= min_length {
                writeln!(
                    block,
                    "{:8}  {:8}  {:8}",
                    reference_start + 1,
                    query_start + 1,
                    len
                )?;
            }
        }

        q += interval.len + 1;
    }

    Ok(())
}
