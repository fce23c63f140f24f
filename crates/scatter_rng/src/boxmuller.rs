//! Box–Muller transform for synthesising standard-normal deviates.
//!
//! Given two independent uniforms in (0, 1), the transform produces two
//! independent standard-normal deviates. Two interchangeable policies are
//! provided, selected at build time by the `polar-gaussian` feature:
//!
//! - **Trigonometric form** (default): one logarithm, one square root and one
//!   cosine per pair; the sine is reconstructed from the cosine with a cheap
//!   sign rule instead of a second transcendental call.
//! - **Polar (geometric) form**: rejection sampling on the unit disc; no
//!   trigonometric calls at all, at the cost of an expected 4/π draws per
//!   accepted pair.
//!
//! Batch filling always works in pairs: a request for n deviates generates
//! ⌈n/2⌉ pairs, and for odd n the final pair's second deviate is computed but
//! discarded rather than written past the output buffer. Both deviates of a
//! pair are individually standard-normal, so discarding one wastes a draw but
//! preserves correctness.

use std::f64::consts::TAU;

/// Transforms a pair of uniforms in (0, 1) into a pair of independent
/// standard-normal deviates using the trigonometric form.
///
/// `w = sqrt(-2 ln x1)` and `s = cos(2π x2)` give the first deviate `w·s`;
/// the second is `±w·sqrt(1 - s²)`, positive iff `x2 < 0.5`, which recovers
/// the sign of `sin(2π x2)` without evaluating the sine.
///
/// A draw of exactly zero is clamped to the smallest positive double before
/// the logarithm, so the result is always finite.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::boxmuller::normal_pair_trig;
///
/// let (z0, z1) = normal_pair_trig(0.7, 0.3);
/// assert!(z0.is_finite() && z1.is_finite());
/// ```
#[inline]
pub fn normal_pair_trig(x1: f64, x2: f64) -> (f64, f64) {
    let x1 = x1.max(f64::MIN_POSITIVE);
    let w = (-2.0 * x1.ln()).sqrt();
    let s = (TAU * x2).cos();
    let tail = w * (1.0 - s * s).sqrt();
    let z1 = if x2 < 0.5 { tail } else { -tail };
    (w * s, z1)
}

/// Draws uniforms until a point falls strictly inside the unit disc, then
/// transforms it into a pair of independent standard-normal deviates using
/// the polar (geometric) form.
///
/// Each attempt maps two uniforms to (-1, 1) via `2u - 1` and computes
/// `w = x1² + x2²`. Points with `w >= 1` are outside the disc and points with
/// `w == 0` would make the denominator of the accepted scale degenerate; both
/// are rejected and redrawn. The expected number of draws per accepted pair
/// is 4/π.
///
/// # Arguments
///
/// * `draw` - Source of uniforms in [0, 1); called twice per attempt
pub fn normal_pair_polar<F: FnMut() -> f64>(draw: &mut F) -> (f64, f64) {
    loop {
        let x1 = 2.0 * draw() - 1.0;
        let x2 = 2.0 * draw() - 1.0;
        let w = x1 * x1 + x2 * x2;
        if w >= 1.0 || w == 0.0 {
            continue;
        }
        let w = ((-2.0 * w.ln()) / w).sqrt();
        return (x1 * w, x2 * w);
    }
}

/// Fills `out` with standard-normal deviates using the trigonometric form.
///
/// Generates ⌈n/2⌉ pairs; for odd n the final second deviate is discarded.
/// An empty buffer is a no-op.
pub fn fill_normal_trig<F: FnMut() -> f64>(mut draw: F, out: &mut [f64]) {
    let n = out.len();
    let mut i = 0;
    while i < n {
        let (z0, z1) = normal_pair_trig(draw(), draw());
        out[i] = z0;
        if i + 1 < n {
            out[i + 1] = z1;
        }
        i += 2;
    }
}

/// Fills `out` with standard-normal deviates using the polar form.
///
/// Generates ⌈n/2⌉ accepted pairs; for odd n the final second deviate is
/// discarded. An empty buffer is a no-op.
pub fn fill_normal_polar<F: FnMut() -> f64>(mut draw: F, out: &mut [f64]) {
    let n = out.len();
    let mut i = 0;
    while i < n {
        let (z0, z1) = normal_pair_polar(&mut draw);
        out[i] = z0;
        if i + 1 < n {
            out[i + 1] = z1;
        }
        i += 2;
    }
}

/// Fills `out` with standard-normal deviates using the policy selected at
/// build time (trigonometric by default, polar with `polar-gaussian`).
#[inline]
pub fn fill_normal<F: FnMut() -> f64>(draw: F, out: &mut [f64]) {
    #[cfg(not(feature = "polar-gaussian"))]
    fill_normal_trig(draw, out);
    #[cfg(feature = "polar-gaussian")]
    fill_normal_polar(draw, out);
}
