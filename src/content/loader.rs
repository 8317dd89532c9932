//! Loader for RON content files.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` is only used in the error.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Load a single RON struct from a file.
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file_name.clone(),
        source,
    })?;

    parse_single(&file_name, &contents)
}
