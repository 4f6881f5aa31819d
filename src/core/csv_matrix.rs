use crate::domain::model::Matrix;
use crate::utils::error::{AppError, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};

/// Writes one headerless CSV record per matrix row.
pub fn matrix_to_csv(matrix: &Matrix) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for row in matrix.iter_rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    let bytes = writer.into_inner().map_err(|e| AppError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::ConfigValidationError {
        field: "csv".to_string(),
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Parses a headerless numeric CSV document into a matrix.
///
/// Cells are trimmed; blank and whitespace-only lines are skipped. Errors
/// name the 1-based source line and column of the offending cell.
pub fn matrix_from_csv(content: &str) -> Result<Matrix> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        let mut row = Vec::with_capacity(record.len());
        for (col_index, cell) in record.iter().enumerate() {
            let field = format!("csv row {} column {}", line, col_index + 1);
            let value = cell
                .parse::<f64>()
                .map_err(|e| AppError::InvalidConfigValueError {
                    field: field.clone(),
                    value: cell.to_string(),
                    reason: format!("Not a number: {}", e),
                })?;
            if !value.is_finite() {
                return Err(AppError::InvalidConfigValueError {
                    field,
                    value: cell.to_string(),
                    reason: "Value must be a finite number".to_string(),
                });
            }
            row.push(value);
        }
        rows.push(row);
    }

    tracing::debug!("Parsed {} CSV rows", rows.len());
    Matrix::new(rows)
}
