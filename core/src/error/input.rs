use thiserror::Error;

/// Problems local to a single task line. The line (or just the offending property) is
/// skipped and loading continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineIssueKind {
    #[error("malformed task line")]
    MalformedLine,

    #[error("improper time format: {0}")]
    InvalidDate(String),

    #[error("unknown property \"{0}\"")]
    UnknownProperty(String),
}

/// A [`LineIssueKind`] located in its source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{origin}:{line}: {kind}")]
pub struct LineIssue {
    pub origin: String,
    pub line: usize,
    pub kind: LineIssueKind,
}

/// An input source that could not be read. The source is skipped.
#[derive(Error, Debug)]
#[error("{path}: {source}")]
pub struct SourceError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}
