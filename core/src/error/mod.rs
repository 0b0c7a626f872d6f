#[allow(clippy::module_inception)]
pub mod error;
pub mod agenda;
pub mod input;

pub use agenda::AgendaError;
pub use error::CliError;
pub use input::{LineIssue, LineIssueKind, SourceError};
