// Licensed under the Apache-2.0 license

//! MEMS Register Configuration Converter C Bindings
//!
//! C-compatible entry point for the `mems-reg-config-conv` pipeline. The
//! declarations live in `include/mems_reg_config_conv.h`.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use mems_reg_config_conv::{convert_status, ConvError};

/// Generates a `.rs` file from a JSON or UCF register configuration.
///
/// Returns 0 on success or a negative [`StatusCode`](mems_reg_config_conv::StatusCode) value:
/// -1 invalid argument (including null pointers and non-UTF-8 strings),
/// -2 unsupported file type, -3 I/O error, -4 parse error, -5 schema error.
///
/// # Arguments
///
/// * `input_file`: path of the `.json`/`.ucf` input
/// * `output_file`: path of the `.rs` file to write
/// * `array_name`: identifier of the generated array
/// * `sensor_id`: sensor name, recorded in the header and used to pick the
///   sensor in a multi-sensor JSON document
/// * `file_type`: 0 for JSON, 1 for UCF
///
/// # Safety
/// - Each non-null pointer must point to a nul-terminated string inside a
///   single allocation.
/// - The strings must not be modified for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn generate_rs(
    input_file: *const c_char,
    output_file: *const c_char,
    array_name: *const c_char,
    sensor_id: *const c_char,
    file_type: c_int,
) -> i32 {
    let args = c_str(input_file, "input_file").and_then(|input_file| {
        Ok((
            input_file,
            c_str(output_file, "output_file")?,
            c_str(array_name, "array_name")?,
            c_str(sensor_id, "sensor_id")?,
        ))
    });

    match args {
        Ok((input_file, output_file, array_name, sensor_id)) => convert_status(
            Path::new(input_file),
            Path::new(output_file),
            array_name,
            sensor_id,
            file_type,
        )
        .code(),
        Err(err) => {
            log::error!("generate_rs: {err}");
            err.status().code()
        }
    }
}

/// Borrows a C string as UTF-8.
///
/// # Safety
/// `ptr` must be null or satisfy the requirements of [`CStr::from_ptr`].
unsafe fn c_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, ConvError> {
    if ptr.is_null() {
        return Err(ConvError::InvalidArgument(format!("`{name}` is null")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| ConvError::InvalidArgument(format!("`{name}` is not valid UTF-8")))
}
