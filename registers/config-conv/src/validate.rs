// Licensed under the Apache-2.0 license

//! Argument checks that run between parsing and code generation.

use crate::config::CodegenConfig;
use crate::error::{ConvError, Result};
use crate::model::{ConfigurationSequence, GenerationRequest};
use crate::util::{is_identifier, is_rust_keyword};

/// Checks the generation names and wraps them with the parsed sequence.
///
/// An empty sequence is valid and generates an empty array.
pub fn validate<'a>(
    array_name: &'a str,
    sensor_id: &'a str,
    sequence: ConfigurationSequence,
) -> Result<GenerationRequest<'a>> {
    if array_name.is_empty() {
        return Err(ConvError::InvalidArgument(
            "array name must not be empty".to_string(),
        ));
    }
    if !is_identifier(array_name) {
        return Err(ConvError::InvalidArgument(format!(
            "array name `{array_name}` is not a valid identifier"
        )));
    }
    if is_rust_keyword(array_name) {
        return Err(ConvError::InvalidArgument(format!(
            "array name `{array_name}` is a reserved word"
        )));
    }
    if sensor_id.is_empty() {
        return Err(ConvError::InvalidArgument(
            "sensor id must not be empty".to_string(),
        ));
    }
    Ok(GenerationRequest::new_unchecked(
        array_name, sensor_id, sequence,
    ))
}

/// Checks that the configured import path is a valid `use` path.
///
/// `crate` and `self` may only lead the path. `super` may only follow
/// `self` or other `super` segments.
pub fn validate_config(config: &CodegenConfig) -> Result<()> {
    let segments: Vec<&str> = config.entry_path.split("::").collect();
    let valid = segments.iter().enumerate().all(|(i, seg)| {
        if !is_identifier(seg) {
            return false;
        }
        match *seg {
            "crate" | "self" => i == 0,
            "super" => segments[..i].iter().all(|s| matches!(*s, "self" | "super")),
            _ => !is_rust_keyword(seg),
        }
    });
    if !valid {
        return Err(ConvError::InvalidArgument(format!(
            "`{}` is not a valid module path",
            config.entry_path
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{FileType, RegisterOperation};

    fn sequence() -> ConfigurationSequence {
        let mut seq = ConfigurationSequence::new(FileType::Ucf);
        seq.push(RegisterOperation::write(0x10, 0x60));
        seq
    }

    #[test]
    fn test_valid_request() {
        let request = validate("init_seq", "LSM6DSO", sequence()).unwrap();
        assert_eq!(request.array_name(), "init_seq");
        assert_eq!(request.sensor_id(), "LSM6DSO");
        assert_eq!(request.sequence().len(), 1);
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let request = validate("EMPTY", "LSM6DSO", ConfigurationSequence::new(FileType::Json));
        assert!(request.unwrap().sequence().is_empty());
    }

    #[test]
    fn test_invalid_array_names() {
        for name in ["", "1st", "init seq", "init-seq", "type", "_", "ünï"] {
            let err = validate(name, "LSM6DSO", sequence()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "name {name:?}");
        }
    }

    #[test]
    fn test_sensor_id_is_free_form() {
        assert!(validate("A", "LSM6DSO rev.B / FSM", sequence()).is_ok());
        let err = validate("A", "", sequence()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&CodegenConfig::with_defaults()).is_ok());
        assert!(validate_config(&CodegenConfig::with_defaults().entry_path("crate::ucf_entry")).is_ok());
        assert!(validate_config(&CodegenConfig::with_defaults().entry_path("super::super::ucf")).is_ok());
        assert!(validate_config(&CodegenConfig::with_defaults().entry_path("self::super::ucf")).is_ok());
        for path in [
            "",
            "a::",
            "::a",
            "a b",
            "a::type",
            "self::crate",
            "crate::super::x",
            "a::super",
            "super::a::super",
            "Self::x",
        ] {
            let config = CodegenConfig::with_defaults().entry_path(path);
            assert!(validate_config(&config).is_err(), "path {path:?}");
        }
    }
}
