//! Integer divisor enumeration.

/// Returns the positive divisors of `n` in increasing order.
///
/// Nonpositive `n` has no divisors under this definition: the scan runs
/// over `1..=n`, which is empty when `n < 1`.
#[must_use]
pub fn divisors(n: i64) -> Vec<i64> {
    (1..=n).filter(|d| n % d == 0).collect()
}
