use crate::core::csv_matrix::matrix_to_csv;
use crate::core::demo::DemoReport;
use crate::domain::model::Matrix;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const REPORT_FILE: &str = "report.json";
pub const PRODUCT_FILE: &str = "product.csv";

/// Writes a matrix as headerless CSV and returns the file name used.
pub fn export_matrix<S: Storage>(storage: &S, file_name: &str, matrix: &Matrix) -> Result<String> {
    let csv = matrix_to_csv(matrix)?;
    storage.write_file(file_name, csv.as_bytes())?;
    tracing::info!("Exported {}x{} matrix to {}", matrix.rows(), matrix.cols(), file_name);
    Ok(file_name.to_string())
}

/// Writes `report.json` and `product.csv`; returns the written file names.
pub fn export_report<S: Storage>(storage: &S, report: &DemoReport) -> Result<Vec<String>> {
    let json = report.to_json()?;
    storage.write_file(REPORT_FILE, json.as_bytes())?;
    tracing::info!("Exported demo report to {}", REPORT_FILE);

    let product = export_matrix(storage, PRODUCT_FILE, &report.product)?;
    Ok(vec![REPORT_FILE.to_string(), product])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::csv_matrix::matrix_from_csv;
    use crate::core::demo::{Demo, DemoInputs};
    use crate::utils::error::AppError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                AppError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_export_report_writes_both_files() {
        let storage = MemoryStorage::default();
        let report = Demo::new(DemoInputs::default()).run().unwrap();

        let written = export_report(&storage, &report).unwrap();
        assert_eq!(written, vec!["report.json", "product.csv"]);

        let csv = String::from_utf8(storage.read_file(PRODUCT_FILE).unwrap()).unwrap();
        assert_eq!(matrix_from_csv(&csv).unwrap(), report.product);

        let json: serde_json::Value =
            serde_json::from_slice(&storage.read_file(REPORT_FILE).unwrap()).unwrap();
        assert_eq!(json["determinant"], 5.0);
    }
}
