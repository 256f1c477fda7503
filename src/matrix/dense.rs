use std::fmt;
use std::ops;

use crate::matrix::element::{Element, PivotElement};
use crate::matrix::invert::invert;
use crate::matrix::kernels;
use crate::matrix::layout::index;
use crate::matrix::matrix::Matrix;
use crate::matrix::print::print;

/// Owned row-major matrix, a thin wrapper over the buffer kernels.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        DenseMatrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), pad))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .take(self.rows)
            .map(|line| line.into())
            .collect()
    }

    fn zeros(rows: usize, cols: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    fn identity(n: usize) -> DenseMatrix<T> {
        let mut mat = DenseMatrix::zeros(n, n);
        kernels::identity(&mut mat.cells, n);
        mat
    }

    fn transpose(&self) -> DenseMatrix<T> {
        let mut mat = DenseMatrix::zeros(self.cols, self.rows);
        kernels::transpose(&self.cells, self.rows, self.cols, &mut mat.cells);
        mat
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[index(row, col, self.cols)].clone()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T: Element> DenseMatrix<T> {
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Result<DenseMatrix<T>, String> {
        if cells.len() != rows * cols {
            return Err("Cell count does not match dimensions".into());
        }
        Ok(DenseMatrix { rows, cols, cells })
    }

    pub fn scale(&self, k: T) -> DenseMatrix<T> {
        let mut mat = DenseMatrix::zeros(self.rows, self.cols);
        kernels::scale(&self.cells, self.rows, self.cols, k, &mut mat.cells);
        mat
    }

    pub fn scale_in_place(&mut self, k: T) {
        kernels::scale_in_place(&mut self.cells, self.rows, self.cols, k);
    }

    fn check_same_shape(&self, rhs: &DenseMatrix<T>) -> Result<(), String> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err("Dimensions not compatible".into());
        }
        Ok(())
    }
}

impl<T: PivotElement> DenseMatrix<T> {
    /// Inverse of a square matrix, `self` is left untouched.
    pub fn inverse(&self) -> Result<DenseMatrix<T>, String> {
        if self.rows != self.cols {
            return Err("Matrix is not square".into());
        }

        let mut mat = DenseMatrix::zeros(self.rows, self.cols);
        kernels::copy(&self.cells, self.rows, self.cols, &mut mat.cells);
        invert(&mut mat.cells, mat.rows).map_err(|_| "Singular matrix".to_string())?;
        Ok(mat)
    }
}

impl<T: Element> ops::Add<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, String>;

    fn add(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, String> {
        self.check_same_shape(rhs)?;

        let mut mat = DenseMatrix::zeros(self.rows, self.cols);
        kernels::add(&self.cells, &rhs.cells, self.rows, self.cols, &mut mat.cells);
        Ok(mat)
    }
}

impl<T: Element> ops::Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, String>;

    fn sub(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, String> {
        self.check_same_shape(rhs)?;

        let mut mat = DenseMatrix::zeros(self.rows, self.cols);
        kernels::subtract(&self.cells, &rhs.cells, self.rows, self.cols, &mut mat.cells);
        Ok(mat)
    }
}

impl<T: Element> ops::Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, String>;

    fn mul(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, String> {
        if self.cols != rhs.rows {
            return Err("Dimensions not compatible".into());
        }

        let mut mat = DenseMatrix::zeros(self.rows, rhs.cols);
        kernels::multiply(
            &self.cells,
            &rhs.cells,
            self.rows,
            self.cols,
            rhs.cols,
            &mut mat.cells,
        );
        Ok(mat)
    }
}

impl<T: Element> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print(f, &self.cells, self.rows, self.cols)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
