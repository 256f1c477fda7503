use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::matrix::dense::DenseMatrix;
use crate::matrix::matrix::Matrix;

#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct MatrixF32 {
    inner: DenseMatrix<f32>,
}

impl From<DenseMatrix<f32>> for MatrixF32 {
    fn from(inner: DenseMatrix<f32>) -> Self {
        MatrixF32 { inner }
    }
}

fn value_error(result: Result<DenseMatrix<f32>, String>) -> PyResult<MatrixF32> {
    match result {
        Ok(value) => Ok(value.into()),
        Err(error) => Err(PyValueError::new_err(error)),
    }
}

#[pymethods]
impl MatrixF32 {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f32>>) -> Self {
        DenseMatrix::from_list(lines).into()
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> Self {
        DenseMatrix::<f32>::identity(n).into()
    }

    pub fn to_list(&self) -> Vec<Vec<f32>> {
        self.inner.to_list()
    }

    pub fn __add__(&self, rhs: &MatrixF32) -> PyResult<MatrixF32> {
        value_error(&self.inner + &rhs.inner)
    }

    pub fn __sub__(&self, rhs: &MatrixF32) -> PyResult<MatrixF32> {
        value_error(&self.inner - &rhs.inner)
    }

    pub fn __mul__(&self, rhs: &MatrixF32) -> PyResult<MatrixF32> {
        value_error(&self.inner * &rhs.inner)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn scale(&self, k: f32) -> MatrixF32 {
        self.inner.scale(k).into()
    }

    pub fn inverse(&self) -> PyResult<MatrixF32> {
        value_error(self.inner.inverse())
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> MatrixF32 {
        self.inner.transpose().into()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn matrix_math(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<MatrixF32>()?;
    Ok(())
}
