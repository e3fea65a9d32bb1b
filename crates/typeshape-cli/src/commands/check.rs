use std::path::PathBuf;

use typeshape_lib::Config;

use super::generate::render;
use super::manifest_loader::load_manifest;

pub struct CheckArgs {
    pub manifest_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let manifest = load_manifest(&args.manifest_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = render(&manifest, Config::new()) {
        eprintln!("error: {}: {}", args.manifest_path.display(), e);
        std::process::exit(1);
    }

    // Nothing to report on success.
}
