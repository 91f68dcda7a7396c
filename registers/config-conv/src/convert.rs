// Licensed under the Apache-2.0 license

//! The conversion pipeline: dispatch, parse, validate, generate, write.
//!
//! Each call is independent and holds no state beyond its arguments, so
//! calls with distinct output paths can run in parallel. Calls that share an
//! output path race and the last rename wins.

use log::{debug, error, info};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::config::CodegenConfig;
use crate::error::{ConvError, Result, StatusCode};
use crate::model::FileType;
use crate::parse::{parse_file, parse_str};
use crate::validate::{validate, validate_config};

/// Converts `input` into a Rust source file at `output`.
///
/// On any error, `output` is left exactly as it was before the call.
pub fn convert(
    input: &Path,
    output: &Path,
    array_name: &str,
    sensor_id: &str,
    file_type: FileType,
) -> Result<()> {
    convert_with_config(
        input,
        output,
        array_name,
        sensor_id,
        file_type,
        &CodegenConfig::with_defaults(),
    )
}

/// Same as [`convert`], with control over the generated text.
pub fn convert_with_config(
    input: &Path,
    output: &Path,
    array_name: &str,
    sensor_id: &str,
    file_type: FileType,
    config: &CodegenConfig,
) -> Result<()> {
    check_path(input, "input")?;
    check_path(output, "output")?;

    debug!("Converting {} as {file_type}", input.display());
    let sequence = parse_file(file_type, input, sensor_id)?;
    let request = validate(array_name, sensor_id, sequence)?;
    validate_config(config)?;

    let code = request.generate_code(config);
    debug!("Rendered {} bytes", code.len());
    write_atomic(output, code.as_bytes())?;

    info!(
        "Generated {} ({} register operations) from {}",
        output.display(),
        request.sequence().len(),
        input.display()
    );
    Ok(())
}

/// Converts in-memory input text and returns the generated source.
pub fn render(
    content: &str,
    file_type: FileType,
    array_name: &str,
    sensor_id: &str,
    config: &CodegenConfig,
) -> Result<String> {
    let sequence = parse_str(file_type, content, sensor_id)?;
    let request = validate(array_name, sensor_id, sequence)?;
    validate_config(config)?;
    Ok(request.generate_code(config))
}

/// [`convert`] for callers that branch on an integer status and pass the
/// file type as a raw tag (see [`FileType`] for the values).
pub fn convert_status(
    input: &Path,
    output: &Path,
    array_name: &str,
    sensor_id: &str,
    file_type: i32,
) -> StatusCode {
    let result = FileType::try_from(file_type)
        .and_then(|file_type| convert(input, output, array_name, sensor_id, file_type));
    if let Err(err) = &result {
        error!("Conversion of {} failed: {err}", input.display());
    }
    StatusCode::from(&result)
}

fn check_path(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConvError::InvalidArgument(format!(
            "{what} path must not be empty"
        )));
    }
    Ok(())
}

/// Writes `contents` to a temporary file next to `path`, then renames it
/// over `path`. Readers see either the old file or the complete new one.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |e| ConvError::io(path, e);

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;

    // Temp files are created owner-only; keep the permissions a plain write would give.
    let permissions = match std::fs::metadata(path) {
        Ok(existing) if existing.is_file() => Some(existing.permissions()),
        _ => default_permissions(),
    };
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions).map_err(io_err)?;
    }

    file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
