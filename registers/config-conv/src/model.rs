// Licensed under the Apache-2.0 license

//! Intermediate representation shared by the parsers, the validator and the
//! code generator.
//!
//! ```text
//! input text ──parse──▶ ConfigurationSequence ──validate──▶ GenerationRequest ──▶ Rust code
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::ConvError;
use crate::ucf_entry::{MemsUcfOp, UcfLineExt};

/// Supported input formats.
///
/// The discriminants are the values accepted by the C boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum FileType {
    /// Structured JSON configuration.
    Json = 0,
    /// Line-oriented UCF register commands.
    Ucf = 1,
}

impl FileType {
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Json => "JSON",
            FileType::Ucf => "UCF",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for FileType {
    type Error = ConvError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(FileType::Json),
            1 => Ok(FileType::Ucf),
            _ => Err(ConvError::UnsupportedFileType(format!("tag {tag}"))),
        }
    }
}

impl FromStr for FileType {
    type Err = ConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "structured" => Ok(FileType::Json),
            "ucf" | "line" => Ok(FileType::Ucf),
            _ => Err(ConvError::UnsupportedFileType(format!("`{s}`"))),
        }
    }
}

/// One register operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterOperation {
    pub address: u8,
    /// Data byte, or delay length for [`MemsUcfOp::Delay`].
    pub value: u8,
    pub kind: MemsUcfOp,
}

impl RegisterOperation {
    pub fn new(kind: MemsUcfOp, address: u8, value: u8) -> Self {
        Self {
            address,
            value,
            kind,
        }
    }

    pub fn write(address: u8, value: u8) -> Self {
        Self::new(MemsUcfOp::Write, address, value)
    }

    /// Delays carry no register; the address is always 0.
    pub fn delay(millis: u8) -> Self {
        Self::new(MemsUcfOp::Delay, 0, millis)
    }
}

impl From<RegisterOperation> for UcfLineExt {
    fn from(op: RegisterOperation) -> Self {
        UcfLineExt {
            address: op.address,
            data: op.value,
            op: op.kind,
        }
    }
}

/// Ordered register operations parsed from one input file.
///
/// Order is the order of the source file. Nothing is ever sorted, merged or
/// removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationSequence {
    format: FileType,
    operations: Vec<RegisterOperation>,
}

impl ConfigurationSequence {
    pub fn new(format: FileType) -> Self {
        Self {
            format,
            operations: Vec::new(),
        }
    }

    pub fn push(&mut self, op: RegisterOperation) {
        self.operations.push(op);
    }

    /// Format the operations were parsed from.
    pub fn format(&self) -> FileType {
        self.format
    }

    pub fn operations(&self) -> &[RegisterOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RegisterOperation> {
        self.operations.iter()
    }
}

impl<'a> IntoIterator for &'a ConfigurationSequence {
    type Item = &'a RegisterOperation;
    type IntoIter = core::slice::Iter<'a, RegisterOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A validated sequence plus the names it will be generated under.
///
/// Only [`crate::validate::validate`] constructs this type, so holding one
/// means `array_name` is a usable identifier and `sensor_id` is non-empty.
#[derive(Clone, Debug)]
pub struct GenerationRequest<'a> {
    array_name: &'a str,
    sensor_id: &'a str,
    sequence: ConfigurationSequence,
}

impl<'a> GenerationRequest<'a> {
    pub(crate) fn new_unchecked(
        array_name: &'a str,
        sensor_id: &'a str,
        sequence: ConfigurationSequence,
    ) -> Self {
        Self {
            array_name,
            sensor_id,
            sequence,
        }
    }

    pub fn array_name(&self) -> &'a str {
        self.array_name
    }

    pub fn sensor_id(&self) -> &'a str {
        self.sensor_id
    }

    pub fn sequence(&self) -> &ConfigurationSequence {
        &self.sequence
    }
}
