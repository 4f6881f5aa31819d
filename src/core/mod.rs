pub mod csv_matrix;
pub mod demo;
pub mod export;
pub mod functions;

pub use crate::domain::model::{Matrix, User, UserId};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
