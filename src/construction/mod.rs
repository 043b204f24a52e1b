//! Construction of the enhanced suffix array components: the suffix array
//! itself (via [`libsais`]), the LCP array (Kasai's algorithm) and the child
//! table ([`child_table`]).
//!
//! All arrays use `i32` entries. The sequence length cap guarantees that every
//! text position fits.

pub(crate) mod child_table;

use crate::Error;

/// Allocates a zero-initialized `i32` buffer, surfacing allocation failure as
/// an error instead of an abort. The index arrays are the only allocations in
/// the crate that scale with the reference length.
pub(crate) fn try_allocate_index_buffer(len: usize) -> Result<Vec<i32>, Error> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed)?;
    buffer.resize(len, 0);

    Ok(buffer)
}

/// Builds the suffix array of `text`: the permutation of `0..text.len()` that
/// lists all suffix start positions in lexicographic order of raw bytes.
pub(crate) fn suffix_array(text: &[u8]) -> Result<Vec<i32>, Error> {
    let mut suffix_array_buffer = try_allocate_index_buffer(text.len())?;

    libsais::SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(suffix_array_buffer.as_mut_slice())
        .single_threaded()
        .run()
        .map_err(|libsais_error| Error::IndexBuildFailed(format!("{libsais_error:?}")))?;

    Ok(suffix_array_buffer)
}

/// Computes the LCP array with Kasai's linear-time algorithm.
///
/// The returned array has `n + 1` entries: `lcp[i]` for `0 < i < n` is the
/// longest common prefix length of the suffixes at `suffix_array[i - 1]` and
/// `suffix_array[i]`, and `lcp[0] == lcp[n] == -1` are sentinels. The inverse
/// permutation needed by the algorithm is released before returning.
pub(crate) fn lcp_array(text: &[u8], suffix_array: &[i32]) -> Result<Vec<i32>, Error> {
    let n = text.len();

    let mut inverse = try_allocate_index_buffer(n)?;
    for (rank, &position) in suffix_array.iter().enumerate() {
        inverse[position as usize] = rank as i32;
    }

    let mut lcp = try_allocate_index_buffer(n + 1)?;
    lcp[0] = -1;
    lcp[n] = -1;

    let mut common = 0;
    for position in 0..n {
        let rank = inverse[position] as usize;

        if rank == 0 {
            common = 0;
            continue;
        }

        let previous = suffix_array[rank - 1] as usize;
        while position + common < n
            && previous + common < n
            && text[position + common] == text[previous + common]
        {
            common += 1;
        }

        lcp[rank] = common as i32;
        common = common.saturating_sub(1);
    }

    Ok(lcp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_lcp(a: &[u8], b: &[u8]) -> i32 {
        a.iter().zip(b).take_while(|(x, y)| x == y).count() as i32
    }

    #[test]
    fn suffix_array_of_small_text() {
        let text = b"ACACACAC";
        let suffix_array = suffix_array(text).unwrap();

        assert_eq!(suffix_array, [6, 4, 2, 0, 7, 5, 3, 1]);
    }

    #[test]
    fn lcp_array_of_small_text() {
        let text = b"ACACACAC";
        let suffix_array = suffix_array(text).unwrap();
        let lcp = lcp_array(text, &suffix_array).unwrap();

        assert_eq!(lcp, [-1, 2, 4, 6, 0, 1, 3, 5, -1]);
    }

    #[test]
    fn lcp_matches_pairwise_comparison() {
        let text = b"GTAGGCTTAAGGTTAGATCGNNACGTACGT";
        let suffix_array = suffix_array(text).unwrap();
        let lcp = lcp_array(text, &suffix_array).unwrap();

        assert_eq!(lcp[0], -1);
        assert_eq!(lcp[text.len()], -1);

        for rank in 1..text.len() {
            let previous = &text[suffix_array[rank - 1] as usize..];
            let current = &text[suffix_array[rank] as usize..];

            assert!(previous < current);
            assert_eq!(lcp[rank], naive_lcp(previous, current));
        }
    }
}
