// Licensed under the Apache-2.0 license

//! Rust code generation for register configuration tables.
//!
//! ## Generated Code Structure
//!
//! For `array_name = "init_seq"` and `sensor_id = "LSM6DSO"`:
//!
//! ```text
//! // DO NOT EDIT. File autogenerated from a MEMS register configuration.
//! // Sensor: LSM6DSO
//! // Source format: UCF
//! use mems_reg_config_conv::ucf_entry::*;
//!
//! #[rustfmt::skip]
//! #[allow(non_upper_case_globals)]
//! pub const init_seq: [UcfLineExt; 2] = [
//!     UcfLineExt { op: MemsUcfOp::Write, address: 0x20, data: 0x01 },
//!     UcfLineExt { op: MemsUcfOp::Delay, address: 0x00, data: 0x0A },
//! ];
//! ```
//!
//! The output depends only on the request and the config: no timestamps,
//! no paths, no locale.

use crate::config::CodegenConfig;
use crate::model::{GenerationRequest, RegisterOperation};
use crate::util::{hex_byte, single_line};
use std::fmt::Write;

impl GenerationRequest<'_> {
    /// Generate the complete Rust source for this request.
    pub fn generate_code(&self, config: &CodegenConfig) -> String {
        let mut output = String::new();

        if let Some(header) = &config.license_header {
            for line in header.lines() {
                if line.starts_with("//") {
                    writeln!(output, "{line}").unwrap();
                } else if line.is_empty() {
                    writeln!(output, "//").unwrap();
                } else {
                    writeln!(output, "// {line}").unwrap();
                }
            }
        }

        writeln!(
            output,
            "// DO NOT EDIT. File autogenerated from a MEMS register configuration."
        )
        .unwrap();
        writeln!(output, "// Sensor: {}", single_line(self.sensor_id())).unwrap();
        writeln!(output, "// Source format: {}", self.sequence().format()).unwrap();
        writeln!(output, "use {}::*;", config.entry_path).unwrap();
        writeln!(output).unwrap();

        if config.rustfmt_skip {
            writeln!(output, "#[rustfmt::skip]").unwrap();
        }
        let name = self.array_name();
        if name.chars().any(|c| c.is_ascii_lowercase()) {
            writeln!(output, "#[allow(non_upper_case_globals)]").unwrap();
        }
        writeln!(
            output,
            "pub const {name}: [UcfLineExt; {}] = [",
            self.sequence().len()
        )
        .unwrap();
        for op in self.sequence() {
            writeln!(output, "    {}", entry(op)).unwrap();
        }
        writeln!(output, "];").unwrap();

        output
    }
}

/// One array element, with its trailing comma.
fn entry(op: &RegisterOperation) -> String {
    format!(
        "UcfLineExt {{ op: MemsUcfOp::{}, address: {}, data: {} }},",
        op.kind,
        hex_byte(op.address),
        hex_byte(op.value)
    )
}
