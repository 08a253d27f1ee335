use std::fs;

use tempfile::tempdir;

use sketch_cli::{Args, run};

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
                      <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n";

#[test]
fn e2e_demo_picture_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("demo.svg");

    let args = Args {
        output: Some(output_path.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    };
    run(&args).expect("demo picture should render");

    let svg = fs::read_to_string(&output_path).expect("output file");
    assert!(svg.starts_with(HEADER));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("  <polyline points=\"100,20 120,50 80,40 100,20\" />\n"));
    assert!(svg.contains("  <circle cx=\"30\" cy=\"70\" r=\"20\" />\n"));
    assert_eq!(svg.lines().count(), 8);
}

#[test]
fn e2e_config_changes_indentation() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("demo.svg");
    fs::write(&config_path, "[render]\nindent = 0\n").expect("write config");

    let args = Args {
        output: Some(output_path.to_string_lossy().to_string()),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    run(&args).expect("demo picture should render");

    let svg = fs::read_to_string(&output_path).expect("output file");
    assert!(svg.contains("\n<circle cx=\"30\" cy=\"20\" r=\"10\" />\n"));
}

#[test]
fn e2e_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        output: Some(temp_dir.path().join("demo.svg").to_string_lossy().to_string()),
        config: Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
    assert!(!temp_dir.path().join("demo.svg").exists());
}
