//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, generate_command};
use crate::commands::generate::GenerateArgs;

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "types.json"])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.manifest_path, PathBuf::from("types.json"));
    assert_eq!(args.output, None);
    assert_eq!(args.header, None);
    assert_eq!(args.indent_width, None);
    assert!(args.export);
}

#[test]
fn generate_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "-",
            "-o",
            "out.ts",
            "--header",
            "// mine",
            "--indent-width",
            "2",
            "--no-export",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.manifest_path, PathBuf::from("-"));
    assert_eq!(args.output, Some(PathBuf::from("out.ts")));
    assert_eq!(args.header.as_deref(), Some("// mine"));
    assert_eq!(args.indent_width, Some(2));
    assert!(!args.export);
}

#[test]
fn manifest_is_required() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn indent_width_must_be_a_number() {
    let result =
        generate_command().try_get_matches_from(["generate", "t.json", "--indent-width", "two"]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_output_flags() {
    let result = check_command().try_get_matches_from(["check", "t.json", "-o", "out.ts"]);
    assert!(result.is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "types.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.manifest_path, PathBuf::from("types.json"));
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["typeshape"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}
