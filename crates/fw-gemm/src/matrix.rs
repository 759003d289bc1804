use std::ops::{Index, IndexMut};

use crate::backend::GemmBackend;
use crate::cpu::CpuBackend;
use crate::element::Element;
use crate::error::{GemmError, Result};
use crate::layout::Layout;

/// An owned, dense, column-major matrix.
///
/// Element (row, col) is stored at `row + col * rows`, and the buffer always
/// holds exactly `rows * cols` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Create a `rows x cols` matrix with every entry set to `T::zero()`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a `rows x cols` matrix with every entry set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("matrix size {}x{} overflows usize", rows, cols));
        Matrix {
            data: vec![value; len],
            rows,
            cols,
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Wrap a column-major buffer.
    ///
    /// # Errors
    /// Returns an error if `data.len() != rows * cols`.
    pub fn from_col_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(GemmError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Build a matrix from row-major literal rows, e.g.
    /// `Matrix::from_rows(&[[1, 2], [3, 4]])`.
    ///
    /// # Errors
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Self::new(n_rows, n_cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_cols {
                return Err(GemmError::Other(format!(
                    "from_rows: row {} has {} columns but row 0 has {}",
                    row,
                    values.len(),
                    n_cols
                )));
            }
            for (col, &v) in values.iter().enumerate() {
                m[(row, col)] = v;
            }
        }
        Ok(m)
    }

    /// Matrix product `self * other` computed by `backend`.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `self.num_cols() != other.num_rows()`,
    /// `InvalidDimension` if `m * n` overflows `usize`, and any error raised
    /// by `backend`.
    pub fn matmul(&self, other: &Matrix<T>, backend: &dyn GemmBackend<T>) -> Result<Matrix<T>> {
        check_compatible(self, other)?;
        let (m, k, n) = (self.rows, self.cols, other.cols);
        element_count(m, n)?;
        let mut out = Matrix::new(m, n);
        let (la, lb, lc) = (self.layout(), other.layout(), out.layout());
        backend.gemm(
            m,
            n,
            k,
            &self.data,
            la.ld(),
            &other.data,
            lb.ld(),
            &mut out.data,
            lc.ld(),
        )?;
        Ok(out)
    }
}

impl<T> Matrix<T> {
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Packed column-major layout of this matrix.
    pub fn layout(&self) -> Layout {
        Layout::packed(self.rows, self.cols)
    }

    /// Returns true if the matrix has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The column-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the column-major backing buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its column-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Checked two-index read.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(self.layout().offset(row, col))
        } else {
            None
        }
    }

    /// Checked two-index write access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            let offset = self.layout().offset(row, col);
            self.data.get_mut(offset)
        } else {
            None
        }
    }

    fn checked_offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.layout().offset(row, col)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.checked_offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.checked_offset(row, col);
        &mut self.data[offset]
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(GemmError::InvalidDimension {
        what: "cols",
        value: cols,
        reason: "matrix size overflows usize",
    })
}

fn check_compatible<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.cols != b.rows {
        return Err(GemmError::DimensionMismatch {
            m: a.rows,
            k: a.cols,
            k2: b.rows,
            n: b.cols,
        });
    }
    Ok(())
}

/// Matrix product `a * b` through the two-index accessor.
///
/// Each result entry is accumulated in increasing order of the shared index
/// and stored before moving to the next entry, so the result matches
/// [`gemm`](crate::cpu::gemm::gemm) on the same column-major data.
///
/// # Errors
/// Returns `DimensionMismatch` if `a.num_cols() != b.num_rows()`, or
/// `InvalidDimension` if the `m x n` result size overflows `usize`. Nothing
/// is allocated in either case.
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_compatible(a, b)?;
    let m = a.num_rows();
    let n = b.num_cols();
    let k = a.num_cols();
    element_count(m, n)?;
    log::debug!("multiply<{}>: [{}x{}] @ [{}x{}]", T::NAME, m, k, k, n);

    let mut c = Matrix::new(m, n);
    for row in 0..m {
        for col in 0..n {
            let mut acc = T::zero();
            for i in 0..k {
                acc += a[(row, i)] * b[(i, col)];
            }
            c[(row, col)] = acc;
        }
    }
    Ok(c)
}

/// Matrix product `a * b` on the reference [`CpuBackend`].
pub fn multiply_with_backend<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.matmul(b, &CpuBackend)
}
