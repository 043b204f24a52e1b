//! The minimum anchor length threshold of Haubold et al. (2009), derived from
//! the distribution of shortest unique substring (shustring) lengths in a
//! random sequence with the GC content of the reference.

/// Returns the smallest anchor length `x` such that a shustring of length `x`
/// is significant at level `p_value`, i.e. `P(X <= x) >= 1 - p_value` under
/// the shustring distribution for a reference of length `reference_len` with
/// the given GC fraction.
///
/// An anchor shorter than this is likely to occur by chance alone.
pub fn min_anchor_length(p_value: f64, gc: f64, reference_len: usize) -> usize {
    let half_gc = gc / 2.0;

    let mut length = 1;
    while shustring_cdf(length, half_gc, reference_len) < 1.0 - p_value {
        length += 1;
    }

    length
}

/// `P(X <= x)` for the shustring length `X`: the probability that a random
/// word of length `x` with `k` G/C bases (each with probability `half_gc`)
/// occurs nowhere in a random reference of length `len`, summed over `k`.
///
/// For large `len` the per-word absence probability `(1 - t)^len` underflows
/// towards 0 and the sum saturates; it is clamped to 1 and the loop exits as
/// soon as saturation is reached.
fn shustring_cdf(x: usize, half_gc: f64, len: usize) -> f64 {
    let mut sum = 0.0;

    for k in 0..=x {
        let word_probability = half_gc.powi(k as i32) * (0.5 - half_gc).powi((x - k) as i32);
        sum += 2f64.powi(x as i32)
            * word_probability
            * (1.0 - word_probability).powi(len.min(i32::MAX as usize) as i32)
            * binomial_coefficient(x, k);

        if sum >= 1.0 {
            return 1.0;
        }
    }

    sum
}

/// `C(n, k)` evaluated exactly in 128-bit integers, falling back to floating
/// point multiplication only if the intermediate product overflows. The
/// threshold loop exits long before that happens for realistic inputs.
fn binomial_coefficient(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);

    let mut exact: u128 = 1;
    for i in 0..k {
        match exact
            .checked_mul((n - i) as u128)
            .map(|product| product / (i as u128 + 1))
        {
            Some(product) => exact = product,
            None => return binomial_coefficient_approximate(n, k),
        }
    }

    exact as f64
}

fn binomial_coefficient_approximate(n: usize, k: usize) -> f64 {
    let mut result = 1.0;
    for i in 0..k {
        result *= (n - i) as f64 / (i + 1) as f64;
    }

    result
}
