// Licensed under the Apache-2.0 license

//! Register operation types referenced by generated configuration tables.
//!
//! Generated files glob-import this module and declare a `const` array of
//! [`UcfLineExt`] values. Firmware walks the array in order and applies each
//! entry to the sensor:
//!
//! ```
//! use mems_reg_config_conv::ucf_entry::*;
//!
//! const INIT: [UcfLineExt; 2] = [
//!     UcfLineExt { op: MemsUcfOp::Write, address: 0x10, data: 0x60 },
//!     UcfLineExt { op: MemsUcfOp::Delay, address: 0x00, data: 0x05 },
//! ];
//!
//! for line in INIT {
//!     match line.op {
//!         MemsUcfOp::Write => { /* bus.write(line.address, line.data) */ }
//!         MemsUcfOp::Delay => { /* delay_ms(line.data) */ }
//!         _ => {}
//!     }
//! }
//! ```

use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// One entry of a generated register configuration table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UcfLineExt {
    /// Register address.
    pub address: u8,
    /// Byte to write, or the delay length in milliseconds for [`MemsUcfOp::Delay`].
    pub data: u8,
    /// Operation to perform.
    pub op: MemsUcfOp,
}

/// Register operation codes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum MemsUcfOp {
    Read = 0x0,
    Write = 0x1,
    Delay = 0x2,
    PollSet = 0x3,
    PollReset = 0x4,
}

impl MemsUcfOp {
    /// Variant name as it appears in generated code.
    pub const fn name(&self) -> &'static str {
        match self {
            MemsUcfOp::Read => "Read",
            MemsUcfOp::Write => "Write",
            MemsUcfOp::Delay => "Delay",
            MemsUcfOp::PollSet => "PollSet",
            MemsUcfOp::PollReset => "PollReset",
        }
    }
}

impl fmt::Display for MemsUcfOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
