//! Free functions over the domain models.

use crate::domain::model::{Matrix, User};
use crate::utils::error::{AppError, Result};

/// Sums prices left to right starting from `0.0`.
///
/// ```
/// use typed_app::calculate_total;
/// assert_eq!(calculate_total([1.5, 2.5]), 4.0);
/// ```
pub fn calculate_total<I>(prices: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    prices
        .into_iter()
        .fold(0.0, |total, price| total + price.into())
}

pub fn get_user_full_name(user: &User) -> String {
    user.full_name()
}

/// Standard matrix product; the result is `left.rows() x right.cols()`.
pub fn multiply_matrices(left: &Matrix, right: &Matrix) -> Result<Matrix> {
    if left.cols() != right.rows() {
        return Err(AppError::dimension_mismatch(format!(
            "Cannot multiply matrices: {}x{} and {}x{}. \
             Number of columns in first matrix must equal number of rows in second matrix.",
            left.rows(),
            left.cols(),
            right.rows(),
            right.cols()
        )));
    }

    Ok(Matrix::from_fn(left.rows(), right.cols(), |i, j| {
        (0..left.cols())
            .map(|k| left.at(i, k) * right.at(k, j))
            .sum()
    }))
}

pub fn create_identity_matrix(size: usize) -> Result<Matrix> {
    if size < 1 {
        return Err(AppError::InvalidSize);
    }
    Ok(Matrix::from_fn(size, size, |i, j| if i == j { 1.0 } else { 0.0 }))
}

/// Determinant by cofactor expansion along the first row.
///
/// Cost grows factorially with the size. Integer-valued inputs give exact
/// results, so singular integer matrices come out as exactly `0.0`.
pub fn matrix_determinant(matrix: &Matrix) -> Result<f64> {
    if !matrix.is_square() {
        return Err(AppError::NotSquare {
            operation: "Determinant",
        });
    }
    Ok(laplace(matrix))
}

fn laplace(m: &Matrix) -> f64 {
    match m.rows() {
        1 => m.at(0, 0),
        2 => m.at(0, 0) * m.at(1, 1) - m.at(0, 1) * m.at(1, 0),
        n => {
            let mut determinant = 0.0;
            for col in 0..n {
                let minor = Matrix::from_fn(n - 1, n - 1, |i, j| {
                    let source_col = if j < col { j } else { j + 1 };
                    m.at(i + 1, source_col)
                });
                let cofactor = m.at(0, col) * laplace(&minor);
                if col % 2 == 0 {
                    determinant += cofactor;
                } else {
                    determinant -= cofactor;
                }
            }
            determinant
        }
    }
}

pub fn matrix_trace(matrix: &Matrix) -> Result<f64> {
    if !matrix.is_square() {
        return Err(AppError::NotSquare { operation: "Trace" });
    }
    Ok((0..matrix.rows()).map(|i| matrix.at(i, i)).sum())
}
