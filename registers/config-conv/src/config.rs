// Licensed under the Apache-2.0 license

//! Configuration for the generated source text.
//!
//! [`CodegenConfig`] controls the parts of the output that do not come from
//! the input file: the module the generated table imports its entry types
//! from, an optional license header, and formatter attributes.

/// Default module providing `UcfLineExt` and `MemsUcfOp` to generated code.
pub const DEFAULT_ENTRY_PATH: &str = "mems_reg_config_conv::ucf_entry";

/// Configuration for code generation.
///
/// # Example
///
/// ```
/// use mems_reg_config_conv::config::CodegenConfig;
///
/// // Generated tables import `mems_reg_config_conv::ucf_entry::*`.
/// let config = CodegenConfig::with_defaults();
/// assert!(config.rustfmt_skip);
///
/// // A firmware crate that vendors the entry types.
/// let config = CodegenConfig::with_defaults()
///     .entry_path("crate::ucf_entry")
///     .license_header("Licensed under the Apache-2.0 license");
/// assert_eq!(config.entry_path, "crate::ucf_entry");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Module path glob-imported at the top of the generated file.
    pub entry_path: String,

    /// Text placed above the generated header, one `//` comment per line.
    pub license_header: Option<String>,

    /// Emit `#[rustfmt::skip]` on the table so one entry stays on one line.
    pub rustfmt_skip: bool,
}

impl CodegenConfig {
    /// Create a config importing from this crate with `#[rustfmt::skip]` on.
    pub fn with_defaults() -> Self {
        Self {
            entry_path: DEFAULT_ENTRY_PATH.to_string(),
            license_header: None,
            rustfmt_skip: true,
        }
    }

    /// Set the module path the generated code imports entry types from.
    pub fn entry_path(mut self, path: &str) -> Self {
        self.entry_path = path.to_string();
        self
    }

    /// Set the license header.
    pub fn license_header(mut self, header: &str) -> Self {
        self.license_header = Some(header.to_string());
        self
    }

    /// Set whether the table is marked `#[rustfmt::skip]`.
    pub fn rustfmt_skip(mut self, skip: bool) -> Self {
        self.rustfmt_skip = skip;
        self
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
