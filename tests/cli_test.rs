use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn typed_app() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_typed-app"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_demo() {
    let output = typed_app().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("=== Typed App Demo ==="));
    assert!(stdout.contains("Hello, Ada Lovelace! Your total is 16.49."));
}

#[test]
fn test_demo_json_and_export() {
    let temp_dir = TempDir::new().unwrap();
    let output = typed_app()
        .args(["--format", "json", "--output"])
        .arg(temp_dir.path())
        .arg("demo")
        .output()
        .unwrap();
    assert!(output.status.success());

    // stdout carries only the report, so it must parse as a single JSON document
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["determinant"], 5.0);

    assert!(temp_dir.path().join("report.json").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("product.csv")).unwrap(),
        "58,64\n139,154\n"
    );
}

#[test]
fn test_multiply_json_with_export_keeps_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    let left = temp_dir.path().join("left.csv");
    let right = temp_dir.path().join("right.csv");
    fs::write(&left, "1,2\n3,4\n").unwrap();
    fs::write(&right, "5,6\n7,8\n").unwrap();

    let out_dir = temp_dir.path().join("out");
    let output = typed_app()
        .args(["--format", "json", "--output"])
        .arg(&out_dir)
        .arg("multiply")
        .arg(&left)
        .arg(&right)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let product: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(product, serde_json::json!([[19.0, 22.0], [43.0, 50.0]]));
    assert_eq!(
        fs::read_to_string(out_dir.join("product.csv")).unwrap(),
        "19,22\n43,50\n"
    );
}

#[test]
fn test_inspect_square_matrix() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("m.csv");
    fs::write(&file, "3,1\n2,4\n").unwrap();

    let output = typed_app().arg("inspect").arg(&file).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Shape: 2x2"));
    assert!(stdout.contains("Determinant: 10"));
    assert!(stdout.contains("Trace: 7"));
}

#[test]
fn test_multiply_incompatible_exits_with_math_code() {
    let temp_dir = TempDir::new().unwrap();
    let left = temp_dir.path().join("left.csv");
    let right = temp_dir.path().join("right.csv");
    fs::write(&left, "1,2\n3,4\n").unwrap();
    fs::write(&right, "1,2,3\n").unwrap();

    let output = typed_app()
        .arg("multiply")
        .arg(&left)
        .arg(&right)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot multiply matrices: 2x2 and 1x3"));
}

#[test]
fn test_missing_config_file_exits_with_io_code() {
    let output = typed_app()
        .args(["demo", "--config", "/definitely/not/here.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}
