use square_common::policy::OverflowPolicy;
use thiserror::Error;

/// Largest magnitude whose square still fits in an `i64`.
pub const MAX_SAFE_INPUT: i64 = 3_037_000_499;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("{input} squared does not fit in a 64-bit integer")]
    Overflow { input: i64 },
}

/// Squares `x`, failing with [`SquareError::Overflow`] if the result does not fit.
pub fn square(x: i64) -> Result<i64, SquareError> {
    x.checked_mul(x).ok_or(SquareError::Overflow { input: x })
}

/// Squares `x` under the given overflow policy.
///
/// Only [`OverflowPolicy::Checked`] can fail. Saturation always clamps to
/// `i64::MAX` since a square is never negative.
pub fn square_with(x: i64, policy: OverflowPolicy) -> Result<i64, SquareError> {
    match policy {
        OverflowPolicy::Checked => square(x),
        OverflowPolicy::Wrapping => Ok(x.wrapping_mul(x)),
        OverflowPolicy::Saturating => Ok(x.saturating_mul(x)),
    }
}

pub fn is_safe(x: i64) -> bool {
    x.unsigned_abs() <= MAX_SAFE_INPUT as u64
}
