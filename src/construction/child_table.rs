//! The child table of the enhanced suffix array, in the folded representation
//! of Abouelhoda, Kurtz and Ohlebusch.
//!
//! For each position, exactly one of the three classical fields is live:
//!
//! - `up[i]` (stored at `i - 1`): the first l-index of the deepest lcp-interval
//!   ending directly before `i`.
//! - `down[i]` (stored at `i`): the first l-index of the deepest lcp-interval
//!   starting at `i`.
//! - `next_l[i]` (stored at `i`): the next l-index inside the same parent
//!   interval.
//!
//! Exclusivity follows from the LCP values around `i`: `up[i + 1]` requires
//! `lcp[i] > lcp[i + 1]`, while both `down[i]` and `next_l[i]` require
//! `lcp[i + 1] >= lcp[i]`, and where `next_l[i]` exists, `down[i]` is never
//! consulted. Entries that are never written stay `-1`; readers distinguish
//! the live field by range and LCP checks (see `Esa::first_l_index` and
//! `Esa::child_by_base`).

/// Builds the folded child table in two linear passes over the LCP array,
/// each driven by a stack that is monotone in LCP value.
///
/// `lcp` must carry the `-1` sentinels at both ends; the `-1` at index `n`
/// flushes the stack so that `up[n]` lands at index `n - 1`, where the root
/// interval looks for its first l-index.
pub(crate) fn build(lcp: &[i32]) -> Vec<i32> {
    let n = lcp.len() - 1;
    let mut child = vec![-1; n];
    let mut stack: Vec<usize> = Vec::with_capacity(64);

    // up/down pass
    stack.push(0);
    let mut last: i32 = -1;
    for i in 1..=n {
        while lcp[i] < lcp[*stack.last().expect("stack keeps the sentinel")] {
            last = stack.pop().expect("stack keeps the sentinel") as i32;
            let top = *stack.last().expect("stack keeps the sentinel");

            if lcp[i] <= lcp[top] && lcp[top] != lcp[last as usize] {
                child[top] = last;
            }
        }

        if last != -1 {
            child[i - 1] = last;
            last = -1;
        }

        stack.push(i);
    }

    // next-l-index pass; index n is excluded because its sentinel would link
    // the leading sentinel to a bogus l-index at n
    stack.clear();
    stack.push(0);
    for i in 1..n {
        while lcp[i] < lcp[*stack.last().expect("stack keeps the sentinel")] {
            stack.pop();
        }

        let top = *stack.last().expect("stack keeps the sentinel");
        if lcp[i] == lcp[top] {
            stack.pop();
            child[top] = i as i32;
        }

        stack.push(i);
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_run_text() {
        // lcp array of "AAAA": one nested chain of intervals
        let lcp = [-1, 1, 2, 3, -1];

        assert_eq!(build(&lcp), [1, 2, 3, 1]);
    }

    #[test]
    fn alternating_text() {
        // lcp array of "ACACACAC"
        let lcp = [-1, 2, 4, 6, 0, 1, 3, 5, -1];

        assert_eq!(build(&lcp), [4, 2, 3, 1, 5, 6, 7, 4]);
    }

    #[test]
    fn sibling_l_indices_are_chained() {
        // lcp array of "ACGT": the root has four children and l-indices
        // 1, 2, 3 must be linked through next_l
        let lcp = [-1, 0, 0, 0, -1];
        let child = build(&lcp);

        assert_eq!(child[1], 2);
        assert_eq!(child[2], 3);
        // up[4] at index 3: first l-index of the root
        assert_eq!(child[3], 1);
    }
}
