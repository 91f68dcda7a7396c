// DO NOT EDIT. File autogenerated from a MEMS register configuration.
// Sensor: LSM6DSO
// Source format: UCF
use mems_reg_config_conv::ucf_entry::*;

#[rustfmt::skip]
pub const FREE_FALL: [UcfLineExt; 10] = [
    UcfLineExt { op: MemsUcfOp::Write, address: 0x10, data: 0x00 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x11, data: 0x00 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x01, data: 0x80 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x04, data: 0x00 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x05, data: 0x00 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x5F, data: 0x4B },
    UcfLineExt { op: MemsUcfOp::Delay, address: 0x00, data: 0x05 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x46, data: 0x01 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x01, data: 0x00 },
    UcfLineExt { op: MemsUcfOp::Write, address: 0x10, data: 0x60 },
];
