// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator: how fast does a point leave?
//!
//! For a point c the orbit is z ← z² + c.  Once the orbit's magnitude
//! passes 2 it is guaranteed never to come back, so 2 is the bailout
//! radius; we compare squared magnitudes against 4 to skip the square
//! root.  The convention used here: the orbit starts at c itself, the
//! escape test runs before each step, and the count reported on
//! escape is i + 1.  The +1 keeps pixels on the rim of the set from
//! rendering black, which would otherwise draw a dark ring around the
//! boundary.  A point that survives the full limit reports 0, the
//! interior sentinel.

use num::Complex;

/// The number of orbit steps it takes the point c to escape the
/// bailout radius, or 0 if it has not escaped after `limit` steps.
/// The result is always in [0, limit].
pub fn escape_count(c: Complex<f64>, limit: usize) -> usize {
    let mut z = c;
    for i in 0..limit {
        // A non-finite magnitude (overflow to infinity, or NaN) fails
        // the <= comparison and counts as escaped.
        if !(z.norm_sqr() <= 4.0) {
            return i + 1;
        }
        z = z * z + c;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_count(Complex::new(0.0, 0.0), 1), 0);
        assert_eq!(escape_count(Complex::new(0.0, 0.0), 1000), 0);
    }

    #[test]
    fn far_point_escapes_immediately() {
        let count = escape_count(Complex::new(5.0, 5.0), 1000);
        assert!(count >= 1 && count <= 2);
    }

    #[test]
    fn point_just_outside_the_radius_counts_one() {
        assert_eq!(escape_count(Complex::new(2.1, 0.0), 1000), 1);
    }

    #[test]
    fn tip_of_the_needle_is_interior() {
        // -2 is the leftmost point of the set; its orbit bounces on
        // the bailout radius forever without crossing it.
        assert_eq!(escape_count(Complex::new(-2.0, 0.0), 1000), 0);
    }

    #[test]
    fn count_never_exceeds_the_limit() {
        for limit in &[1, 10, 50] {
            let count = escape_count(Complex::new(-0.75, 0.1), *limit);
            assert!(count <= *limit);
        }
    }

    #[test]
    fn overflow_is_divergence_not_a_fault() {
        let count = escape_count(Complex::new(::std::f64::MAX, 0.0), 1000);
        assert_eq!(count, 1);
    }
}
