use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Argument prefix marking a path whose contents are the document
pub const FILE_PREFIX: &str = "file=";

/// Errors that can occur while reading a `file=` argument
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("file '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn path(&self) -> &Path {
        match self {
            ResolveError::FileNotFound { path } | ResolveError::Io { path, .. } => path.as_path(),
        }
    }
}

/// Turn a command-line argument into the document text to score
///
/// `file=<path>` yields the whitespace-trimmed contents of `<path>`; any
/// other argument is the document itself and is returned untouched.
pub fn resolve_input(arg: &str) -> Result<String, ResolveError> {
    let Some(path) = arg.strip_prefix(FILE_PREFIX) else {
        return Ok(arg.to_string());
    };

    let path = PathBuf::from(path);
    tracing::debug!("Reading document from {}", path.display());

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ResolveError::FileNotFound { path }),
        Err(source) => Err(ResolveError::Io { path, source }),
    }
}
