//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeshape")
        .about("TypeScript declarations from type manifests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Render the schema for a manifest.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Render TypeScript declarations for a manifest")
        .after_help(
            r#"EXAMPLES:
  typeshape generate types.json                   # schema to stdout
  typeshape generate types.json -o types.ts       # schema to file
  typeshape generate - --indent-width 2 < t.json  # manifest from stdin"#,
        )
        .arg(manifest_path_arg())
        .arg(output_file_arg())
        .arg(header_arg())
        .arg(indent_width_arg())
        .arg(no_export_arg())
}

/// Validate a manifest without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a manifest without writing output")
        .after_help(
            r#"EXAMPLES:
  typeshape check types.json
  typeshape check - < types.json"#,
        )
        .arg(manifest_path_arg())
}
