//! Rectangular matrices backed by `nalgebra::DMatrix`.

use crate::errors::GeometryError;
use crate::float_types::Real;
use nalgebra::DMatrix;
use std::fmt;
use std::ops::{Mul, Range};

/// A `rows × columns` matrix of [`Real`].
///
/// Row and column counts are derived from the data; every constructor
/// guarantees a rectangular shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    values: DMatrix<Real>,
}

impl Matrix {
    /// Build from row-major data.
    ///
    /// # Errors
    /// * [`GeometryError::EmptyInput`] for zero rows
    /// * [`GeometryError::NonRectangular`] when a row's length differs from the first row's
    ///
    /// # Example
    /// ```
    /// # use sdgeom::matrix::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!((m.row_count(), m.column_count()), (2, 3));
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Real]>>(rows: &[R]) -> Result<Self, GeometryError> {
        let first = rows.first().ok_or(GeometryError::EmptyInput("matrix"))?;
        let columns = first.as_ref().len();

        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(GeometryError::NonRectangular {
                row,
                expected: columns,
                found,
            });
        }

        let data: Vec<Real> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Ok(Matrix {
            values: DMatrix::from_row_slice(rows.len(), columns, &data),
        })
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Matrix {
            values: DMatrix::zeros(rows, columns),
        }
    }

    /// Ones on the main diagonal, zeros elsewhere; need not be square.
    pub fn identity(rows: usize, columns: usize) -> Self {
        Matrix {
            values: DMatrix::identity(rows, columns),
        }
    }

    pub fn row_count(&self) -> usize {
        self.values.nrows()
    }

    pub fn column_count(&self) -> usize {
        self.values.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    pub fn is_square(&self) -> bool {
        self.values.is_square()
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Real> {
        self.values.get((row, column)).copied()
    }

    /// Row-major copy of the values.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Multiply every entry by `value` in place.
    pub fn scale(&mut self, value: Real) {
        self.values *= value;
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            values: self.values.transpose(),
        }
    }

    /// Copy of the block `rows × columns` (half-open ranges).
    pub fn get_range(&self, rows: Range<usize>, columns: Range<usize>) -> Result<Matrix, GeometryError> {
        self.check_range(&rows, &columns)?;
        Ok(Matrix {
            values: self
                .values
                .view((rows.start, columns.start), (rows.len(), columns.len()))
                .into_owned(),
        })
    }

    /// Overwrite the block `rows × columns` with `block`.
    ///
    /// # Errors
    /// [`GeometryError::DimensionMismatch`] when `block` does not have the
    /// shape of the ranges, [`GeometryError::IndexOutOfRange`] when the ranges
    /// leave the matrix.
    pub fn set_range(
        &mut self,
        rows: Range<usize>,
        columns: Range<usize>,
        block: &Matrix,
    ) -> Result<(), GeometryError> {
        if block.shape() != (rows.len(), columns.len()) {
            return Err(GeometryError::DimensionMismatch {
                op: "set_range",
                left: (rows.len(), columns.len()),
                right: block.shape(),
            });
        }
        self.check_range(&rows, &columns)?;
        self.values
            .view_mut((rows.start, columns.start), (rows.len(), columns.len()))
            .copy_from(&block.values);
        Ok(())
    }

    fn check_range(&self, rows: &Range<usize>, columns: &Range<usize>) -> Result<(), GeometryError> {
        let (nrows, ncols) = self.shape();
        if rows.start > rows.end || rows.end > nrows {
            return Err(GeometryError::IndexOutOfRange {
                index: rows.end.max(rows.start),
                len: nrows,
            });
        }
        if columns.start > columns.end || columns.end > ncols {
            return Err(GeometryError::IndexOutOfRange {
                index: columns.end.max(columns.start),
                len: ncols,
            });
        }
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<(), GeometryError> {
        if index >= self.row_count() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.row_count(),
            });
        }
        self.values = self.values.clone().remove_row(index);
        Ok(())
    }

    pub fn remove_column(&mut self, index: usize) -> Result<(), GeometryError> {
        if index >= self.column_count() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.column_count(),
            });
        }
        self.values = self.values.clone().remove_column(index);
        Ok(())
    }

    /// Entry-wise sum of two matrices of the same size.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, GeometryError> {
        self.require_same_size(other, "addition")?;
        Ok(Matrix {
            values: &self.values + &other.values,
        })
    }

    /// Entry-wise difference of two matrices of the same size.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, GeometryError> {
        self.require_same_size(other, "subtraction")?;
        Ok(Matrix {
            values: &self.values - &other.values,
        })
    }

    /// Matrix product; needs `self.column_count() == other.row_count()`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix, GeometryError> {
        if self.column_count() != other.row_count() {
            return Err(GeometryError::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix {
            values: &self.values * &other.values,
        })
    }

    fn require_same_size(&self, other: &Matrix, op: &'static str) -> Result<(), GeometryError> {
        if self.is_same_size(other) {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    pub const fn as_dmatrix(&self) -> &DMatrix<Real> {
        &self.values
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(values: DMatrix<Real>) -> Self {
        Matrix { values }
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.values
    }
}

impl Mul<Real> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: Real) -> Matrix {
        self.scale(rhs);
        self
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
