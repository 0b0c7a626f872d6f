use std::io::Read;
use std::path::Path;

use crate::error::SourceError;

/// Identifier used for standard input.
pub const STDIN_ID: &str = "stdin";

/// The full text of one input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub text: String,
}

impl Source {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn from_reader(id: impl Into<String>, mut reader: impl Read) -> std::io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(id, text))
    }
}

/// Read every path; `-` (or no path at all) means standard input.
///
/// Unreadable sources are returned as errors alongside the sources that could be read, so
/// the caller can go on with the rest.
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> (Vec<Source>, Vec<SourceError>) {
    let mut sources = Vec::new();
    let mut errors = Vec::new();

    if paths.is_empty() {
        match Source::from_reader(STDIN_ID, std::io::stdin().lock()) {
            Ok(source) => sources.push(source),
            Err(source) => errors.push(SourceError {
                path: STDIN_ID.to_string(),
                source,
            }),
        }
        return (sources, errors);
    }

    for path in paths {
        let path = path.as_ref();
        let result = if path == Path::new("-") {
            Source::from_reader(STDIN_ID, std::io::stdin().lock())
        } else {
            std::fs::read_to_string(path)
                .map(|text| Source::new(path.to_string_lossy(), text))
        };

        match result {
            Ok(source) => {
                tracing::debug!(source = %source.id, bytes = source.text.len(), "read source");
                sources.push(source);
            }
            Err(source) => {
                let path = path.to_string_lossy().to_string();
                tracing::debug!(path = %path, error = %source, "source unreadable");
                errors.push(SourceError { path, source });
            }
        }
    }

    (sources, errors)
}
