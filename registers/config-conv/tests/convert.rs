// Licensed under the Apache-2.0 license

use log::LevelFilter;
use mems_reg_config_conv::{
    convert, convert_status, convert_with_config, CodegenConfig, ConvError, ErrorKind, FileType,
    StatusCode,
};
use simple_logger::SimpleLogger;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join(name)
}

fn setup() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_ucf_to_file() {
    setup();
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "init.ucf", "WRITE 0x20 0x01\nDELAY 0x00 0x0A\n");
    let output = dir.path().join("init.rs");

    convert(&input, &output, "init_seq", "LSM6DSO", FileType::Ucf).unwrap();

    let code = fs::read_to_string(&output).unwrap();
    assert!(code.contains("pub const init_seq: [UcfLineExt; 2] = ["));
    assert!(code.contains("UcfLineExt { op: MemsUcfOp::Write, address: 0x20, data: 0x01 },"));
    assert!(code.contains("UcfLineExt { op: MemsUcfOp::Delay, address: 0x00, data: 0x0A },"));
}

#[test]
fn test_json_sensor_document_to_file() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("mlc_config.rs");

    convert(
        &fixture("ism330dhcx_six_d.json"),
        &output,
        "SIX_D",
        "ism330dhcx",
        FileType::Json,
    )
    .unwrap();

    let code = fs::read_to_string(&output).unwrap();
    assert!(code.contains("// Sensor: ism330dhcx\n"));
    assert!(code.contains("// Source format: JSON\n"));
    assert!(code.contains("pub const SIX_D: [UcfLineExt; 7] = ["));
    let elements: Vec<&str> = code
        .lines()
        .filter(|l| l.trim_start().starts_with("UcfLineExt {"))
        .collect();
    assert_eq!(elements.len(), 7);
    assert!(elements[0].contains("address: 0x01, data: 0x80"));
    assert!(elements[4].contains("MemsUcfOp::Delay, address: 0x00, data: 0x05"));
    assert!(elements[6].contains("address: 0x10, data: 0x28"));
}

#[test]
fn test_unknown_sensor_leaves_output_alone() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("mlc_config.rs");
    let err = convert(
        &fixture("ism330dhcx_six_d.json"),
        &output,
        "SIX_D",
        "LSM6DSO",
        FileType::Json,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!output.exists());
}

#[test]
fn test_idempotent_output() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("free_fall.rs");
    let input = fixture("lsm6dso_free_fall.ucf");

    convert(&input, &output, "FREE_FALL", "LSM6DSO", FileType::Ucf).unwrap();
    let first = fs::read(&output).unwrap();
    convert(&input, &output, "FREE_FALL", "LSM6DSO", FileType::Ucf).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, fs::read(fixture("lsm6dso_free_fall.rs")).unwrap());
}

#[test]
fn test_failures_leave_existing_output_unchanged() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.rs");
    let previous = "// previous contents\n";
    fs::write(&output, previous).unwrap();

    let bad_json = write_input(&dir, "bad.json", r#"[{"address":300,"value":1}]"#);
    let err = convert(&bad_json, &output, "A", "LSM6DSO", FileType::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);

    let truncated = write_input(&dir, "truncated.json", r#"[{"address":1,"#);
    let err = convert(&truncated, &output, "A", "LSM6DSO", FileType::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);

    let bad_ucf = write_input(&dir, "bad.ucf", "WRITE 0x20 0x01\nWRITE 0x20\n");
    let err = convert(&bad_ucf, &output, "A", "LSM6DSO", FileType::Ucf).unwrap_err();
    assert!(matches!(
        err,
        ConvError::Parse {
            location: mems_reg_config_conv::Location::Line(2),
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);

    let good_ucf = write_input(&dir, "good.ucf", "WRITE 1 2\n");
    let err = convert(&good_ucf, &output, "1bad", "LSM6DSO", FileType::Ucf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = convert(&good_ucf, &output, "A", "", FileType::Ucf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);

    // Four inputs and the output; no temp files left behind.
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names.len(), 5);
}

#[test]
fn test_failures_do_not_create_output() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.rs");
    let input = write_input(&dir, "bad.ucf", "POKE 1 2\n");
    let err = convert(&input, &output, "A", "LSM6DSO", FileType::Ucf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!output.exists());
}

#[test]
fn test_io_errors() {
    setup();
    let dir = TempDir::new().unwrap();
    let err = convert(
        &dir.path().join("missing.ucf"),
        &dir.path().join("out.rs"),
        "A",
        "LSM6DSO",
        FileType::Ucf,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    let input = write_input(&dir, "ok.ucf", "WRITE 1 2\n");
    let err = convert(
        &input,
        &dir.path().join("no_such_dir").join("out.rs"),
        "A",
        "LSM6DSO",
        FileType::Ucf,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    // Output path is an existing directory.
    let err = convert(&input, dir.path(), "A", "LSM6DSO", FileType::Ucf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_custom_config() {
    setup();
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.ucf", "Ac 10 60\n");
    let output = dir.path().join("out.rs");
    let config = CodegenConfig::with_defaults()
        .entry_path("crate::ucf_entry")
        .license_header("Licensed under the Apache-2.0 license");
    convert_with_config(&input, &output, "ACC_ON", "LSM6DSO", FileType::Ucf, &config).unwrap();
    let code = fs::read_to_string(&output).unwrap();
    assert!(code.starts_with("// Licensed under the Apache-2.0 license\n// DO NOT EDIT."));
    assert!(code.contains("use crate::ucf_entry::*;"));
}

#[test]
fn test_status_codes() {
    setup();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.rs");
    let good = write_input(&dir, "good.ucf", "WRITE 1 2\n");
    let bad_parse = write_input(&dir, "bad.ucf", "WRITE 1\n");
    let bad_schema = write_input(&dir, "bad.json", r#"[{"address":1}]"#);
    let missing = dir.path().join("missing.ucf");

    let ucf = FileType::Ucf as i32;
    let json = FileType::Json as i32;
    assert_eq!(convert_status(&good, &output, "A", "S", ucf), StatusCode::Success);
    assert_eq!(convert_status(&good, &output, "A", "S", 7), StatusCode::UnsupportedFileType);
    assert_eq!(convert_status(&good, &output, "", "S", ucf), StatusCode::InvalidArgument);
    assert_eq!(convert_status(&missing, &output, "A", "S", ucf), StatusCode::IoError);
    assert_eq!(convert_status(&bad_parse, &output, "A", "S", ucf), StatusCode::ParseError);
    assert_eq!(convert_status(&bad_schema, &output, "A", "S", json), StatusCode::SchemaError);
}

#[test]
fn test_parallel_conversions() {
    setup();
    let dir = TempDir::new().unwrap();
    let input = fixture("lsm6dso_free_fall.ucf");
    let expected = fs::read(fixture("lsm6dso_free_fall.rs")).unwrap();

    std::thread::scope(|s| {
        for i in 0..8 {
            let output = dir.path().join(format!("out_{i}.rs"));
            let input = &input;
            s.spawn(move || {
                convert(input, &output, "FREE_FALL", "LSM6DSO", FileType::Ucf).unwrap();
            });
        }
    });

    for i in 0..8 {
        assert_eq!(fs::read(dir.path().join(format!("out_{i}.rs"))).unwrap(), expected);
    }
}
