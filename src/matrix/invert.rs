//! In-place Gauss-Jordan inversion with partial pivoting.
//!
//! The input buffer becomes the inverse: at step `k` the pivot slot is set to
//! one before the pivot row is scaled, and every eliminated slot of column `k`
//! is set to zero before its row is reduced. Those two slots then carry the
//! inverse instead of the reduced identity. Row swaps are recorded and replayed
//! in reverse as column swaps at the end.

use std::fmt;

use crate::matrix::element::PivotElement;
use crate::matrix::layout::{ensure_len, index};

pub const SINGULAR_MESSAGE: &str = "Inversion failed due to singular matrix";

/// Exact zero pivot met at diagonal step `step`.
///
/// The buffer handed to [`invert`] is left partially reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularMatrix {
    pub step: usize,
}

impl fmt::Display for SingularMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SINGULAR_MESSAGE)
    }
}

impl std::error::Error for SingularMatrix {}

// row with the biggest magnitude in column `k`, last one wins on ties
fn find_pivot_row<T: PivotElement>(a: &[T], n: usize, k: usize) -> usize {
    let mut best = T::zero();
    let mut pivot_row = k;
    for i in k..n {
        let magnitude = a[index(i, k, n)].magnitude();
        if magnitude >= best {
            best = magnitude;
            pivot_row = i;
        }
    }
    pivot_row
}

fn swap_rows<T>(a: &mut [T], n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        a.swap(index(r1, j, n), index(r2, j, n));
    }
}

fn swap_cols<T>(a: &mut [T], n: usize, c1: usize, c2: usize) {
    for i in 0..n {
        a.swap(index(i, c1, n), index(i, c2, n));
    }
}

/// Invert the `n x n` matrix stored in `a`, replacing it with its inverse.
///
/// Only a pivot exactly equal to zero is treated as singular, near singular
/// input goes through and may produce huge or non finite values.
/// `n == 0` is a successful no-op.
pub fn invert<T: PivotElement>(a: &mut [T], n: usize) -> Result<(), SingularMatrix> {
    ensure_len(a, n, n);

    let mut pivot_rows = vec![0usize; n];

    for k in 0..n {
        let pivot_row = find_pivot_row(a, n, k);

        // NaN pivots are never selected, `pivot_row` then stays at `k`
        if a[index(pivot_row, k, n)] == T::zero() {
            return Err(SingularMatrix { step: k });
        }

        if pivot_row != k {
            swap_rows(a, n, k, pivot_row);
        }
        pivot_rows[k] = pivot_row;

        let inv = T::one() / a[index(k, k, n)].clone();
        a[index(k, k, n)] = T::one();
        for j in 0..n {
            let idx = index(k, j, n);
            a[idx] = a[idx].clone() * inv.clone();
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = a[index(i, k, n)].clone();
            a[index(i, k, n)] = T::zero();
            for j in 0..n {
                let pivot_val = a[index(k, j, n)].clone();
                let idx = index(i, j, n);
                a[idx] = a[idx].clone() - pivot_val * factor.clone();
            }
        }
    }

    for k in (0..n).rev() {
        if pivot_rows[k] != k {
            swap_cols(a, n, k, pivot_rows[k]);
        }
    }

    Ok(())
}

/// [`invert`] with the integer status contract: `1` on success, `0` on a
/// singular matrix, in which case one diagnostic line is written to `sink`.
pub fn invert_status<T: PivotElement, W: fmt::Write>(
    a: &mut [T],
    n: usize,
    sink: &mut W,
) -> i32 {
    match invert(a, n) {
        Ok(()) => 1,
        Err(error) => {
            // the status code is the contract, a failing sink does not change it
            let _ = writeln!(sink, "{}", error);
            0
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::kernels::{copy, identity, multiply, transpose};
    use crate::rings::fraction::Fraction;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn assert_close(actual: &[f32], expected: &[f32], tol: f32) {
        assert_eq!(actual.len(), expected.len());
        for (i, (x, y)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!((x - y).abs() <= tol, "cell {}: {} != {}", i, x, y);
        }
    }

    fn assert_near_identity(m: &[f64], n: usize, tol: f64) {
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                let got = m[index(i, j, n)];
                assert!(
                    (got - expected).abs() <= tol,
                    "({}, {}): {} != {}",
                    i,
                    j,
                    got,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_invert_2x2() {
        let mut a = [4.0f32, 3.0, 6.0, 3.0];
        assert_eq!(invert(&mut a, 2), Ok(()));
        assert_close(&a, &[-0.5, 0.5, 1.0, -2.0 / 3.0], 1e-5);
    }

    #[test]
    fn test_invert_swap_matrix() {
        let mut a = [0.0f32, 1.0, 1.0, 0.0];
        assert_eq!(invert(&mut a, 2), Ok(()));
        assert_eq!(a, [0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_invert_singular() {
        let mut a = [1.0f32, 2.0, 2.0, 4.0];
        assert_eq!(invert(&mut a, 2), Err(SingularMatrix { step: 1 }));

        let mut a = [1.0f64, 0.0, 5.0, 2.0, 0.0, 7.0, 3.0, 0.0, 1.0];
        assert_eq!(invert(&mut a, 3), Err(SingularMatrix { step: 1 }));

        let mut a = [0.0f32; 9];
        assert_eq!(invert(&mut a, 3), Err(SingularMatrix { step: 0 }));
    }

    #[test]
    fn test_invert_status() {
        let mut out = String::new();
        let mut a = [4.0f32, 3.0, 6.0, 3.0];
        assert_eq!(invert_status(&mut a, 2, &mut out), 1);
        assert!(out.is_empty());

        let mut a = [1.0f32, 2.0, 2.0, 4.0];
        assert_eq!(invert_status(&mut a, 2, &mut out), 0);
        assert_eq!(out, "Inversion failed due to singular matrix\n");
    }

    #[test]
    fn test_invert_empty_and_scalar() {
        let mut a: [f32; 0] = [];
        assert_eq!(invert(&mut a, 0), Ok(()));

        let mut a = [4.0f32];
        assert_eq!(invert(&mut a, 1), Ok(()));
        assert_eq!(a, [0.25]);

        let mut a = [0.0f32];
        assert_eq!(invert(&mut a, 1), Err(SingularMatrix { step: 0 }));
    }

    #[test]
    fn test_pivot_ties_pick_last_row() {
        let a = [1.0f32, 5.0, -1.0, 3.0];
        assert_eq!(find_pivot_row(&a, 2, 0), 1);

        let a = [2.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, -2.0, 0.0, 0.0];
        assert_eq!(find_pivot_row(&a, 3, 0), 2);
        // all zero: still the last row
        assert_eq!(find_pivot_row(&a, 3, 1), 2);
    }

    #[test]
    fn test_invert_with_ties() {
        // |1| == |-1| in the first column, second row is taken as pivot
        let mut a = [1.0f64, 2.0, -1.0, 3.0];
        assert_eq!(invert(&mut a, 2), Ok(()));
        let expected = [0.6, -0.4, 0.2, 0.2];
        for (x, y) in a.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_permutation_inverse_is_transpose() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..8 {
            let mut perm: Vec<usize> = (0..n).collect();
            perm.shuffle(&mut rng);

            let mut p = vec![0.0f32; n * n];
            for (i, &j) in perm.iter().enumerate() {
                p[index(i, j, n)] = 1.0;
            }
            let mut expected = vec![0.0f32; n * n];
            transpose(&p, n, n, &mut expected);

            assert_eq!(invert(&mut p, n), Ok(()));
            assert_eq!(p, expected, "permutation {:?}", perm);
        }
    }

    #[test]
    fn test_inverse_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(2024);
        for n in 1..9 {
            // diagonally dominant, hence non singular
            let mut a: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            for i in 0..n {
                a[index(i, i, n)] += n as f64 * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            }

            let mut b = vec![0.0; n * n];
            copy(&a, n, n, &mut b);
            assert_eq!(invert(&mut b, n), Ok(()));

            let mut ab = vec![0.0; n * n];
            let mut ba = vec![0.0; n * n];
            multiply(&a, &b, n, n, n, &mut ab);
            multiply(&b, &a, n, n, n, &mut ba);
            assert_near_identity(&ab, n, 1e-9);
            assert_near_identity(&ba, n, 1e-9);
        }
    }

    #[test]
    fn test_invert_needs_pivoting() {
        // zero on the diagonal of a non singular matrix
        let a = [0.0f64, 2.0, 1.0, 1.0, 0.0, 0.0, 3.0, 1.0, 4.0];
        let mut b = a;
        assert_eq!(invert(&mut b, 3), Ok(()));

        let mut ab = [0.0; 9];
        multiply(&a, &b, 3, 3, 3, &mut ab);
        assert_near_identity(&ab, 3, 1e-12);
    }

    #[test]
    fn test_invert_exact_fractions() {
        let f = |v: i64| Fraction::from_int(v);
        let a = [f(2), f(1), f(1), f(1), f(3), f(2), f(1), f(0), f(0)];
        let mut b = a.clone();
        assert_eq!(invert(&mut b, 3), Ok(()));

        let mut ab = vec![f(0); 9];
        let mut id = vec![f(0); 9];
        multiply(&a, &b, 3, 3, 3, &mut ab);
        identity(&mut id, 3);
        assert_eq!(ab, id);

        assert_eq!(b, [f(0), f(0), f(1), f(-2), f(1), f(3), f(3), f(-1), f(-5)]);
    }

    #[test]
    fn test_singular_fraction() {
        let f = |v: i64| Fraction::from_int(v);
        let mut a = [f(1), f(2), f(3), f(2), f(4), f(6), f(1), f(1), f(1)];
        assert_eq!(invert(&mut a, 3), Err(SingularMatrix { step: 2 }));
    }
}
