use crate::linalg::promote::{Promote, Promoted};

/// A linear interpolation between two values. `amount` is not clamped, so values outside
/// `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
/// // Integers interpolate in `f64`.
/// assert_eq!(lerp(0, 3, 0.5), 1.5);
/// assert_eq!(lerp(0, 10, 1.5), 15.0);
/// ```
pub fn lerp<T: Promote>(start: T, stop: T, amount: Promoted<T>) -> Promoted<T> {
    let start = start.promote();
    start + (stop.promote() - start) * amount
}

/// The inverse of [`lerp`]: where `amount` falls between `start` and `stop`.
///
/// Produces an infinity or `NaN` when `start == stop`.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// assert_eq!(norm(5, 0, 10), 0.5);
/// assert_eq!(norm(15.0_f32, 10.0, 20.0), 0.5);
/// ```
pub fn norm<T: Promote>(amount: T, start: T, stop: T) -> Promoted<T> {
    let start = start.promote();
    (amount.promote() - start) / (stop.promote() - start)
}

/// Restricts `value` to `[min, max]`. The result is unspecified when `min > max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Re-maps `value` from the range `[min1, max1]` into `[min2, max2]`, without clamping.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// assert_eq!(map(5, 0, 10, 100, 200), 150.0);
/// assert_eq!(map(-1.0_f64, 0.0, 1.0, 0.0, 10.0), -10.0);
/// ```
pub fn map<T: Promote>(value: T, min1: T, max1: T, min2: T, max2: T) -> Promoted<T> {
    let t = norm(value, min1, max1);
    let min2 = min2.promote();
    min2 + (max2.promote() - min2) * t
}
