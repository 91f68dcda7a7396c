// Licensed under the Apache-2.0 license

//! Generate and check Rust register tables from MEMS register configurations.

use anyhow::{bail, Context, Result};
use mems_reg_config_conv::{convert_with_config, render, CodegenConfig};
use std::fs;

use crate::RegConfigArgs;

fn codegen_config(args: &RegConfigArgs) -> CodegenConfig {
    let mut config = CodegenConfig::with_defaults();
    if let Some(path) = &args.entry_path {
        config = config.entry_path(path);
    }
    if let Some(header) = &args.license_header {
        config = config.license_header(header);
    }
    config
}

/// Convert `args.input` and write the table to `args.output`.
pub(crate) fn generate(args: &RegConfigArgs) -> Result<()> {
    println!(
        "Generating {} from {} ({}, sensor {})",
        args.output.display(),
        args.input.display(),
        args.file_type,
        args.sensor_id
    );
    convert_with_config(
        &args.input,
        &args.output,
        &args.array_name,
        &args.sensor_id,
        args.file_type,
        &codegen_config(args),
    )?;
    println!("  ✓ Generated {}", args.output.display());
    Ok(())
}

/// Fail if `args.output` differs from what [`generate`] would write.
pub(crate) fn check(args: &RegConfigArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let expected = render(
        &content,
        args.file_type,
        &args.array_name,
        &args.sensor_id,
        &codegen_config(args),
    )?;
    let actual = fs::read_to_string(&args.output)
        .with_context(|| format!("reading {}", args.output.display()))?;

    if actual != expected {
        bail!(
            "{} is out of date with {}; run `cargo xtask reg-config-gen` with the same arguments",
            args.output.display(),
            args.input.display()
        );
    }
    println!("  ✓ {} is up to date", args.output.display());
    Ok(())
}
