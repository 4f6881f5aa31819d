use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Identifier for a [`User`]. Kept distinct from plain integers so ids
/// can't be mixed up with counts or indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// First and last name joined by a space, outer whitespace trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Dense row-major matrix of `f64`.
///
/// A `Matrix` always has at least one row and one column, and every row
/// has the same length. All operations return new matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let first = rows.first().ok_or(AppError::EmptyMatrix)?;
        let cols = first.len();
        if cols == 0 {
            return Err(AppError::EmptyRow);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(AppError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    /// Callers guarantee `rows` and `cols` are non-zero.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows {
            return Err(AppError::IndexOutOfBounds {
                axis: "Row",
                index: row,
                max: self.rows - 1,
            });
        }
        if col >= self.cols {
            return Err(AppError::IndexOutOfBounds {
                axis: "Column",
                index: col,
                max: self.cols - 1,
            });
        }
        Ok(self.at(row, col))
    }

    /// Unchecked access for code that has already validated the shape.
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Row `index` as a slice, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        (index < self.rows).then(|| {
            let start = index * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.at(j, i))
    }

    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(AppError::dimension_mismatch(format!(
                "Cannot add matrices of different sizes: {}x{} and {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = AppError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale(self)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{}):", self.rows, self.cols)?;
        for row in self.iter_rows() {
            f.write_str("\n[")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
