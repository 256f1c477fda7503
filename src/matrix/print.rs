//! Text rendering of row-major buffers into an injected `fmt::Write` sink.

use itertools::Itertools;
use std::fmt;
use std::fmt::Display;

use crate::matrix::layout::{ensure_len, row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Digits after the decimal point, `None` keeps the element's own formatting.
    pub precision: Option<usize>,
    pub separator: char,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            precision: None,
            separator: '\t',
        }
    }
}

impl PrintOptions {
    pub fn with_precision(precision: usize) -> Self {
        PrintOptions {
            precision: Some(precision),
            ..Default::default()
        }
    }
}

/// One line per row, values separated by a tab.
pub fn print<T: Display, W: fmt::Write>(
    out: &mut W,
    a: &[T],
    rows: usize,
    cols: usize,
) -> fmt::Result {
    print_with(out, a, rows, cols, None, PrintOptions::default())
}

/// Same as [`print`], `label` is written on its own line first.
pub fn print_labeled<T: Display, W: fmt::Write>(
    out: &mut W,
    a: &[T],
    rows: usize,
    cols: usize,
    label: &str,
) -> fmt::Result {
    print_with(out, a, rows, cols, Some(label), PrintOptions::default())
}

pub fn print_with<T: Display, W: fmt::Write>(
    out: &mut W,
    a: &[T],
    rows: usize,
    cols: usize,
    label: Option<&str>,
    options: PrintOptions,
) -> fmt::Result {
    ensure_len(a, rows, cols);

    if let Some(label) = label {
        writeln!(out, "{}", label)?;
    }

    let mut sep_buf = [0u8; 4];
    let sep: &str = options.separator.encode_utf8(&mut sep_buf);

    for i in 0..rows {
        let line = row(a, i, cols)
            .iter()
            .format_with(sep, |value, f| match options.precision {
                Some(precision) => f(&format_args!("{:.*}", precision, value)),
                None => f(value),
            });
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
