use crate::core::functions::{
    calculate_total, create_identity_matrix, get_user_full_name, matrix_determinant,
    matrix_trace, multiply_matrices,
};
use crate::domain::model::{Matrix, User, UserId};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const INDENT: &str = "   ";

/// Everything the demo needs to run every library function once.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoInputs {
    pub user: User,
    pub prices: Vec<f64>,
    pub a: Matrix,
    pub b: Matrix,
    pub square: Matrix,
    pub c: Matrix,
    pub d: Matrix,
    pub scalar: f64,
    pub identity_size: usize,
}

// Shapes below are fixed and non-empty, so construction cannot fail.
fn fixed(rows: Vec<Vec<f64>>) -> Matrix {
    let cols = rows[0].len();
    Matrix::from_fn(rows.len(), cols, |i, j| rows[i][j])
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            user: User::new(UserId(1), "Ada", "Lovelace", "ada@example.com"),
            prices: vec![9.99, 4.50, 2.00],
            a: fixed(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]),
            b: fixed(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]),
            square: fixed(vec![vec![2.0, 1.0], vec![3.0, 4.0]]),
            c: fixed(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            d: fixed(vec![vec![5.0, 6.0], vec![7.0, 8.0]]),
            scalar: 2.0,
            identity_size: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub user_name: String,
    pub prices: Vec<f64>,
    pub total: f64,
    pub a: Matrix,
    pub b: Matrix,
    pub product: Matrix,
    pub sum: Matrix,
    pub scalar: f64,
    pub scaled: Matrix,
    pub transposed: Matrix,
    pub identity: Matrix,
    pub determinant: f64,
    pub trace: f64,
}

pub struct Demo {
    inputs: DemoInputs,
}

impl Demo {
    pub fn new(inputs: DemoInputs) -> Self {
        Self { inputs }
    }

    pub fn run(&self) -> Result<DemoReport> {
        let inputs = &self.inputs;
        tracing::info!("Running demo for user {}", inputs.user.id);

        let user_name = get_user_full_name(&inputs.user);
        let total = calculate_total(inputs.prices.iter().copied());
        tracing::debug!("Total of {} prices: {}", inputs.prices.len(), total);

        let product = multiply_matrices(&inputs.a, &inputs.b)?;
        tracing::debug!("A x B -> {}x{}", product.rows(), product.cols());

        let sum = inputs.c.checked_add(&inputs.d)?;
        let scaled = &inputs.c * inputs.scalar;
        let transposed = inputs.c.transpose();
        let identity = create_identity_matrix(inputs.identity_size)?;
        let determinant = matrix_determinant(&inputs.square)?;
        let trace = matrix_trace(&inputs.square)?;
        tracing::debug!("det = {}, trace = {}", determinant, trace);

        Ok(DemoReport {
            generated_at: Utc::now(),
            user_name,
            prices: inputs.prices.clone(),
            total,
            a: inputs.a.clone(),
            b: inputs.b.clone(),
            product,
            sum,
            scalar: inputs.scalar,
            scaled,
            transposed,
            identity,
            determinant,
            trace,
        })
    }
}

fn indented(matrix: &Matrix) -> String {
    let mut out = String::new();
    for (i, line) in matrix.to_string().lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(line);
    }
    out
}

fn format_prices(prices: &[f64]) -> String {
    let items: Vec<String> = prices.iter().map(|p| p.to_string()).collect();
    format!("[{}]", items.join(", "))
}

impl DemoReport {
    /// Console layout of the demo; same as the `Display` output.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Typed App Demo ===\n")?;

        writeln!(f, "1. User Operations:")?;
        writeln!(f, "{INDENT}User: {}", self.user_name)?;

        writeln!(f, "\n2. Price Calculations:")?;
        writeln!(f, "{INDENT}Prices: {}", format_prices(&self.prices))?;
        writeln!(f, "{INDENT}Total: {:.2}", self.total)?;

        writeln!(f, "\n3. Matrix Operations:")?;
        let sections: [(String, &Matrix); 7] = [
            (
                format!("Matrix A ({}x{}):", self.a.rows(), self.a.cols()),
                &self.a,
            ),
            (
                format!("Matrix B ({}x{}):", self.b.rows(), self.b.cols()),
                &self.b,
            ),
            ("A × B (Matrix Multiplication):".to_string(), &self.product),
            ("Matrix C + Matrix D (Addition):".to_string(), &self.sum),
            (
                format!("Matrix C × {} (Scalar Multiplication):", self.scalar),
                &self.scaled,
            ),
            ("Matrix C Transpose:".to_string(), &self.transposed),
            (
                format!(
                    "{}x{} Identity Matrix:",
                    self.identity.rows(),
                    self.identity.cols()
                ),
                &self.identity,
            ),
        ];
        for (i, (title, matrix)) in sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{INDENT}{title}")?;
            writeln!(f, "{}", indented(matrix))?;
        }

        writeln!(f, "\n{INDENT}Determinant of Matrix Square: {}", self.determinant)?;
        writeln!(f, "{INDENT}Trace of Matrix Square: {}", self.trace)?;

        writeln!(f, "\n=== Summary ===")?;
        writeln!(
            f,
            "Hello, {}! Your total is {:.2}.",
            self.user_name, self.total
        )?;
        writeln!(f, "Matrix operations completed successfully!")?;
        write!(
            f,
            "Matrix A×B result dimensions: {}x{}",
            self.product.rows(),
            self.product.cols()
        )
    }
}
