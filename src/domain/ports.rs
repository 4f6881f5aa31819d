use crate::utils::error::Result;

/// Where exported artifacts (reports, CSV matrices) end up.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
