//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub manifest_path: PathBuf,
    pub output: Option<PathBuf>,
    pub header: Option<String>,
    pub indent_width: Option<usize>,
    pub no_export: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: manifest_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            header: m.get_one::<String>("header").cloned(),
            indent_width: m.get_one::<usize>("indent_width").copied(),
            no_export: m.get_flag("no_export"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
            output: p.output,
            header: p.header,
            indent_width: p.indent_width,
            export: !p.no_export,
        }
    }
}

pub struct CheckParams {
    pub manifest_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: manifest_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
        }
    }
}

/// The positional is required, so clap has rejected the command line without it.
fn manifest_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
