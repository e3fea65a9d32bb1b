use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;
use typeshape_lib::Config;
use typeshape_lib::manifest::{Manifest, ManifestError};

use super::manifest_loader::load_manifest;

pub struct GenerateArgs {
    pub manifest_path: PathBuf,
    pub output: Option<PathBuf>,
    pub header: Option<String>,
    pub indent_width: Option<usize>,
    pub export: bool,
}

impl GenerateArgs {
    pub fn config(&self) -> Config {
        let mut config = Config::new().export(self.export);
        if let Some(header) = &self.header {
            config = config.header(header.as_str());
        }
        if let Some(width) = self.indent_width {
            config = config.indent_width(width);
        }
        config
    }
}

pub fn run(args: GenerateArgs) {
    let manifest = load_manifest(&args.manifest_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let schema = render(&manifest, args.config()).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", args.manifest_path.display(), e);
        std::process::exit(1);
    });

    let written = match &args.output {
        Some(path) => fs::write(path, &schema).map_err(|e| {
            format!("failed to write '{}': {}", path.display(), e)
        }),
        None => io::stdout()
            .write_all(schema.as_bytes())
            .map_err(|e| format!("failed to write stdout: {}", e)),
    };
    if let Err(msg) = written {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
    debug!(bytes = schema.len(), "schema written");
}

/// Run every registration in `manifest` and render the result.
pub fn render(manifest: &Manifest, config: Config) -> Result<String, ManifestError> {
    let generator = manifest.generate(config)?;
    Ok(generator.render_to_string()?)
}
