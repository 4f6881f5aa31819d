//! Typed application starter: a `User` model, a `Matrix` value type and the
//! functions that operate on them, plus a demo that exercises everything.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command, OutputFormat};

pub use crate::config::{cli::LocalStorage, toml_config::DemoConfig};
pub use crate::core::csv_matrix::{matrix_from_csv, matrix_to_csv};
pub use crate::core::demo::{Demo, DemoInputs, DemoReport};
pub use crate::core::export::{export_matrix, export_report};
pub use crate::core::functions::{
    calculate_total, create_identity_matrix, get_user_full_name, matrix_determinant,
    matrix_trace, multiply_matrices,
};
pub use crate::domain::model::{Matrix, User, UserId};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
