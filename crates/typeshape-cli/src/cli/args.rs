//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `check` read the
//! manifest and shape the output the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file, or `-` for stdin (positional).
pub fn manifest_path_arg() -> Arg {
    Arg::new("manifest_path")
        .value_name("MANIFEST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Manifest file (`-` reads stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// First line of the output (--header).
pub fn header_arg() -> Arg {
    Arg::new("header")
        .long("header")
        .value_name("TEXT")
        .help("Header line written before the declarations")
}

/// Indent with spaces (--indent-width).
pub fn indent_width_arg() -> Arg {
    Arg::new("indent_width")
        .long("indent-width")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Indent with N spaces instead of a tab")
}

/// Don't export declarations (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export top-level declarations")
}
