//! Row-major storage convention shared by every kernel.
//!
//! A matrix is a `(buffer, rows, cols)` triple: element `(i, j)` lives at
//! offset `i * cols + j`. Buffers may be longer than `rows * cols`, the tail is
//! never touched.

#[inline(always)]
pub fn index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// Debug-only check that `buf` can hold a `rows x cols` matrix.
#[inline(always)]
pub fn ensure_len<T>(buf: &[T], rows: usize, cols: usize) {
    debug_assert!(
        buf.len() >= rows * cols,
        "buffer of {} elements cannot hold a {}x{} matrix",
        buf.len(),
        rows,
        cols
    );
}

/// Borrow row `row` of a `? x cols` matrix.
#[inline(always)]
pub fn row<T>(buf: &[T], row: usize, cols: usize) -> &[T] {
    &buf[row * cols..(row + 1) * cols]
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
