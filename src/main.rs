use clap::Parser;
use std::path::Path;
use typed_app::utils::{logger, validation::Validate};
use typed_app::{
    export_matrix, export_report, matrix_determinant, matrix_from_csv, matrix_trace,
    multiply_matrices, AppError, CliConfig, Command, Demo, DemoConfig, DemoInputs,
    LocalStorage, Matrix, OutputFormat, Result,
};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting typed-app {}", typed_app::VERSION);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|()| run(&config)) {
        tracing::error!(
            "❌ typed-app failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let storage = config.output.clone().map(LocalStorage::new);

    match config.effective_command() {
        Command::Demo { config: demo_config } => {
            let inputs = match demo_config {
                Some(path) => load_inputs(&path)?,
                None => DemoInputs::default(),
            };
            let report = Demo::new(inputs).run()?;

            match config.format {
                OutputFormat::Text => println!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }

            if let Some(storage) = &storage {
                let written = export_report(storage, &report)?;
                tracing::info!(
                    "📁 Exported {} to {}",
                    written.join(", "),
                    storage.base_path().display()
                );
            }
        }
        Command::Inspect { file } => {
            let matrix = load_matrix(&file)?;
            inspect(&matrix, config.format)?;
        }
        Command::Multiply { left, right } => {
            let product = multiply_matrices(&load_matrix(&left)?, &load_matrix(&right)?)?;

            match config.format {
                OutputFormat::Text => println!("{}", product),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&product)?),
            }

            if let Some(storage) = &storage {
                let name = export_matrix(storage, typed_app::core::export::PRODUCT_FILE, &product)?;
                tracing::info!("📁 Exported {} to {}", name, storage.base_path().display());
            }
        }
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn load_inputs(path: &Path) -> Result<DemoInputs> {
    tracing::info!("📁 Loading demo configuration from: {}", path.display());
    let demo_config = DemoConfig::from_file(path)?;
    demo_config.validate()?;
    Ok(demo_config.to_inputs())
}

fn load_matrix(path: &Path) -> Result<Matrix> {
    tracing::info!("📁 Loading matrix from: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(AppError::IoError)?;
    matrix_from_csv(&content)
}

fn inspect(matrix: &Matrix, format: OutputFormat) -> Result<()> {
    let (determinant, trace) = if matrix.is_square() {
        (Some(matrix_determinant(matrix)?), Some(matrix_trace(matrix)?))
    } else {
        (None, None)
    };

    match format {
        OutputFormat::Text => {
            println!("{}", matrix);
            println!("\nShape: {}x{}", matrix.rows(), matrix.cols());
            println!("\nTranspose:\n{}", matrix.transpose());
            match (determinant, trace) {
                (Some(det), Some(tr)) => {
                    println!("\nDeterminant: {}", det);
                    println!("Trace: {}", tr);
                }
                _ => println!("\nNot square: determinant and trace are undefined"),
            }
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "rows": matrix.rows(),
                "cols": matrix.cols(),
                "matrix": matrix,
                "transpose": matrix.transpose(),
                "determinant": determinant,
                "trace": trace,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
