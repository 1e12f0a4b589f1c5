//! Middle-weighted integer sampler for yardage.
//!
//! Draws from a triangular distribution peaked at the midpoint of the range
//! and rounds to the nearest yard, so a 5-yard run is common and a 15-yard
//! run is rare.  Every yardage figure that should look "realistic" rather
//! than uniform goes through [`sample`].

use pbp_core::GameRng;

/// Sample an integer in `[min, max]`, biased toward `(min + max) / 2`.
///
/// `min == max` returns that value without consuming randomness; `min > max`
/// is not a valid range and yields the midpoint.
pub fn sample(rng: &mut GameRng, min: i32, max: i32) -> i32 {
    if min == max {
        return min;
    }
    let (lo, hi) = (f64::from(min), f64::from(max));
    let mode = (lo + hi) / 2.0;
    let value = rng.triangular(lo, hi, mode).unwrap_or(mode);
    value.round() as i32
}

/// [`sample`] over an inclusive `(min, max)` pair from the probability tables.
#[inline]
pub fn sample_range(rng: &mut GameRng, (min, max): (i32, i32)) -> i32 {
    sample(rng, min, max)
}
