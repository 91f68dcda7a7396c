// Licensed under the Apache-2.0 license

//! Input format dispatch.
//!
//! The file type tag picks one of the two parsers; nothing else is decided
//! here.

pub mod json;
pub mod ucf;

use log::debug;
use std::path::Path;

use crate::error::{ConvError, Location, Result};
use crate::model::{ConfigurationSequence, FileType};

/// Parses in-memory text with the parser for `file_type`.
///
/// `sensor_id` is only consulted by the JSON parser, to pick a sensor out of
/// a multi-sensor document.
pub fn parse_str(file_type: FileType, content: &str, sensor_id: &str) -> Result<ConfigurationSequence> {
    debug!("Parsing {file_type} input ({} bytes)", content.len());
    let sequence = match file_type {
        FileType::Json => json::parse(content, sensor_id)?,
        FileType::Ucf => ucf::parse(content)?,
    };
    debug!("Parsed {} register operations", sequence.len());
    Ok(sequence)
}

/// Reads `path` and parses it with the parser for `file_type`.
pub fn parse_file(file_type: FileType, path: &Path, sensor_id: &str) -> Result<ConfigurationSequence> {
    let bytes = std::fs::read(path).map_err(|e| ConvError::io(path, e))?;
    let content = decode_utf8(file_type, bytes)?;
    parse_str(file_type, &content, sensor_id)
}

/// Rejects non-UTF-8 input as a parse error located at the first bad byte.
fn decode_utf8(file_type: FileType, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
        let column = valid.iter().rev().take_while(|b| **b != b'\n').count() + 1;
        let location = match file_type {
            FileType::Ucf => Location::Line(line),
            FileType::Json => Location::Position { line, column },
        };
        ConvError::parse(location, "input is not valid UTF-8")
    })
}
