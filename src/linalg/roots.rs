//! Closed-form solvers for linear and quadratic equations.
//!
//! Roots are pushed into any [`Extend`] sink, so callers can collect into a `Vec`, a
//! fixed-capacity buffer, or an existing container. Each solver returns how many roots it
//! wrote.

use crate::linalg::promote::{Promote, Promoted};
use num_traits::{Float, Zero};

/// Solves `a * x + b = 0`.
///
/// Writes nothing and returns 0 when `a == 0`, whether the equation has no solution (`b != 0`)
/// or every `x` is a solution (`b == 0`).
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let mut roots = Vec::new();
/// assert_eq!(solve_linear(2, -4, &mut roots), 1);
/// assert_eq!(roots, vec![2.0]);
/// ```
pub fn solve_linear<T: Promote>(a: T, b: T, result: &mut impl Extend<Promoted<T>>) -> usize {
    if a.is_zero() {
        return 0;
    }
    result.extend(Some(-b.promote() / a.promote()));
    1
}

/// Solves `a * x^2 + b * x + c = 0`, delegating to [`solve_linear`] when `a == 0`.
///
/// Two distinct roots are written in ascending order. A zero discriminant writes the single
/// repeated root; a negative one writes nothing.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let mut roots = Vec::new();
/// assert_eq!(solve_quadratic(1, -3, 2, &mut roots), 2);
/// assert_eq!(roots, vec![1.0, 2.0]);
/// ```
pub fn solve_quadratic<T: Promote>(
    a: T,
    b: T,
    c: T,
    result: &mut impl Extend<Promoted<T>>,
) -> usize {
    if a.is_zero() {
        return solve_linear(b, c, result);
    }
    let (a, b, c) = (a.promote(), b.promote(), c.promote());
    let two = a + a;
    let discriminant = b * b - (two + two) * c;
    if discriminant < <Promoted<T> as Zero>::zero() {
        0
    } else if discriminant.is_zero() {
        result.extend(Some(-b / two));
        1
    } else {
        let sqrt = discriminant.sqrt();
        let r1 = (-b - sqrt) / two;
        let r2 = (-b + sqrt) / two;
        // Negative `a` flips the order.
        if r1 <= r2 {
            result.extend([r1, r2]);
        } else {
            result.extend([r2, r1]);
        }
        2
    }
}
