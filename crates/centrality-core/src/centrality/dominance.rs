//! Central point dominance (Freeman 1977).
//!
//! With `c*` the largest vertex betweenness,
//!
//! ```text
//! C'_B = sum_v (c* - c(v)) / (n - 1)
//! ```
//!
//! On normalized betweenness the result lies in `[0, 1]`: `0` when every
//! vertex is equally central (a cycle), `1` for a star.

/// Central point dominance of a vertex-betweenness vector.
///
/// The running maximum starts at `0`. Returns `0` for `n <= 1`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn dominance(scores: &[f64]) -> f64 {
    let n = scores.len();
    if n <= 1 {
        return 0.0;
    }
    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    let spread: f64 = scores.iter().map(|&c| max - c).sum();
    spread / (n as f64 - 1.0)
}
