//! Dense row-major matrix arithmetic over caller owned buffers.
//!
//! The kernels in [`matrix::kernels`] and [`matrix::invert`] work on
//! `(buffer, rows, cols)` triples. [`matrix::dense::DenseMatrix`] wraps the
//! same layout in an owned value.

pub mod matrix {
    pub mod dense;
    pub mod element;
    pub mod invert;
    pub mod kernels;
    pub mod layout;
    pub mod matrix;
    pub mod print;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub use matrix::dense::DenseMatrix;
pub use matrix::element::{Element, PivotElement};
pub use matrix::invert::{invert, invert_status, SingularMatrix};
pub use matrix::kernels::{
    add, copy, identity, multiply, scale, scale_in_place, subtract, transpose,
};
pub use matrix::matrix::Matrix;
pub use matrix::print::{print, print_labeled, print_with, PrintOptions};
pub use rings::fraction::Fraction;
