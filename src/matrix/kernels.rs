//! Elementwise and product kernels over raw row-major buffers.
//!
//! Inputs are borrowed shared and outputs borrowed exclusively, so an output
//! can never alias an input. Only [`scale_in_place`] writes back into its input.

use crate::matrix::element::Element;
use crate::matrix::layout::{ensure_len, index};

/// `b = a`, both `rows x cols`.
pub fn copy<T: Element>(a: &[T], rows: usize, cols: usize, b: &mut [T]) {
    ensure_len(a, rows, cols);
    ensure_len(b, rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            b[index(i, j, cols)] = a[index(i, j, cols)].clone();
        }
    }
}

/// `c = a + b`, all `rows x cols`.
pub fn add<T: Element>(a: &[T], b: &[T], rows: usize, cols: usize, c: &mut [T]) {
    ensure_len(a, rows, cols);
    ensure_len(b, rows, cols);
    ensure_len(c, rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            let idx = index(i, j, cols);
            c[idx] = a[idx].clone() + b[idx].clone();
        }
    }
}

/// `c = a - b`, all `rows x cols`.
pub fn subtract<T: Element>(a: &[T], b: &[T], rows: usize, cols: usize, c: &mut [T]) {
    ensure_len(a, rows, cols);
    ensure_len(b, rows, cols);
    ensure_len(c, rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            let idx = index(i, j, cols);
            c[idx] = a[idx].clone() - b[idx].clone();
        }
    }
}

/// `a = a * k`
pub fn scale_in_place<T: Element>(a: &mut [T], rows: usize, cols: usize, k: T) {
    ensure_len(a, rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            let idx = index(i, j, cols);
            a[idx] = a[idx].clone() * k.clone();
        }
    }
}

/// `c = a * k`, `a` untouched.
pub fn scale<T: Element>(a: &[T], rows: usize, cols: usize, k: T, c: &mut [T]) {
    ensure_len(a, rows, cols);
    ensure_len(c, rows, cols);

    for i in 0..rows {
        for j in 0..cols {
            let idx = index(i, j, cols);
            c[idx] = a[idx].clone() * k.clone();
        }
    }
}

/// `c = aᵀ` where `a` is `rows x cols` and `c` is `cols x rows`.
pub fn transpose<T: Element>(a: &[T], rows: usize, cols: usize, c: &mut [T]) {
    ensure_len(a, rows, cols);
    ensure_len(c, cols, rows);

    for i in 0..rows {
        for j in 0..cols {
            c[index(j, i, rows)] = a[index(i, j, cols)].clone();
        }
    }
}

/// `c = a * b` with `a: m x p`, `b: p x n` and `c: m x n`.
///
/// Accumulates in `i, j, k` order starting from zero, results are reproducible
/// bit for bit on floats.
pub fn multiply<T: Element>(a: &[T], b: &[T], m: usize, p: usize, n: usize, c: &mut [T]) {
    ensure_len(a, m, p);
    ensure_len(b, p, n);
    ensure_len(c, m, n);

    for i in 0..m {
        for j in 0..n {
            let mut acc = T::zero();
            for k in 0..p {
                acc = acc + a[index(i, k, p)].clone() * b[index(k, j, n)].clone();
            }
            c[index(i, j, n)] = acc;
        }
    }
}

/// Write the `n x n` identity into `a`.
pub fn identity<T: Element>(a: &mut [T], n: usize) {
    ensure_len(a, n, n);

    for i in 0..n {
        for j in 0..n {
            a[index(i, j, n)] = if i == j { T::one() } else { T::zero() };
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
