// Licensed under the Apache-2.0 license

//! MEMS register configuration to Rust code converter.
//!
//! This crate converts sensor register configurations, as exported by the
//! vendor tools in JSON or UCF form, into a Rust source file declaring a
//! `const` table of register operations that firmware replays at init.
//!
//! ## Usage
//!
//! From a build script:
//!
//! ```no_run
//! use std::path::Path;
//! use mems_reg_config_conv::{convert, FileType};
//!
//! convert(
//!     Path::new("lsm6dso_free_fall.ucf"),
//!     Path::new("src/mlc_config.rs"),
//!     "FREE_FALL",
//!     "LSM6DSO",
//!     FileType::Ucf,
//! )
//! .unwrap();
//! println!("cargo:rerun-if-changed=lsm6dso_free_fall.ucf");
//! ```
//!
//! In memory, with a custom import path for the entry types:
//!
//! ```
//! use mems_reg_config_conv::{render, CodegenConfig, FileType};
//!
//! let code = render(
//!     "WRITE 0x20 0x01\nDELAY 0x00 0x0A\n",
//!     FileType::Ucf,
//!     "init_seq",
//!     "LSM6DSO",
//!     &CodegenConfig::with_defaults().entry_path("crate::ucf_entry"),
//! )
//! .unwrap();
//! assert!(code.contains("pub const init_seq: [UcfLineExt; 2]"));
//! ```
//!
//! C callers link `mems-reg-config-conv-cbinding` and call `generate_rs`.
//!
//! ## Features
//!
//! - `std` (default): the converter itself. Without it the crate is
//!   `#![no_std]` and only provides [`ucf_entry`], which is all a generated
//!   table needs, so firmware depends on it with `default-features = false`.
//!
//! ## Module Organization
//!
//! - [`ucf_entry`]: Types the generated tables are built from
//! - [`model`]: Parsed register operations and generation requests
//! - [`parse`]: Format dispatch and the JSON and UCF parsers
//! - [`validate`]: Name and configuration checks
//! - [`config`]: Code generation options ([`CodegenConfig`])
//! - [`output`]: Rust code generation
//! - [`error`]: [`ConvError`] and the C status codes
//! - [`util`]: Identifier, literal and hex helpers

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod ucf_entry;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod model;
#[cfg(feature = "std")]
pub mod output;
#[cfg(feature = "std")]
pub mod parse;
#[cfg(feature = "std")]
pub mod util;
#[cfg(feature = "std")]
pub mod validate;

#[cfg(feature = "std")]
mod convert;

// Re-export main public API
#[cfg(feature = "std")]
pub use config::CodegenConfig;
#[cfg(feature = "std")]
pub use convert::{convert, convert_status, convert_with_config, render};
#[cfg(feature = "std")]
pub use error::{ConvError, ErrorKind, Location, Result, StatusCode};
#[cfg(feature = "std")]
pub use model::{ConfigurationSequence, FileType, GenerationRequest, RegisterOperation};
pub use ucf_entry::{MemsUcfOp, UcfLineExt};
