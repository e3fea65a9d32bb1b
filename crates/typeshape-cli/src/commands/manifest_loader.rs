use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use typeshape_lib::manifest::{Manifest, ManifestError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
}

/// Read and decode a manifest; `-` reads stdin.
pub fn load_manifest(path: &Path) -> Result<Manifest, LoadError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    text.parse().map_err(|source| LoadError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
